use serde::{Deserialize, Serialize};

/// A comment on an article or a talk. Replies are nested under `children`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub user_id: Option<i64>,
    pub username: Option<String>,
    pub avatar: Option<String>,
    pub parent_id: Option<i64>,
    pub create_time: Option<String>,
    pub children: Vec<Comment>,
}

impl Comment {
    /// Number of comments in this thread, including this one.
    pub fn thread_len(&self) -> usize {
        1 + self.children.iter().map(Comment::thread_len).sum::<usize>()
    }

    pub fn author(&self) -> &str {
        self.username.as_deref().unwrap_or("anonymous")
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticleComment {
    pub article_id: i64,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTalkComment {
    pub talk_id: i64,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_comments() {
        let json = r#"[{"id":1,"content":"first","username":"a","children":[{"id":2,"content":"reply","parentId":1,"children":[{"id":3,"content":"deep"}]}]},{"id":4,"content":"second"}]"#;
        let comments: Vec<Comment> = serde_json::from_str(json).unwrap();

        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].thread_len(), 3);
        assert_eq!(comments[0].children[0].parent_id, Some(1));
        assert_eq!(comments[1].author(), "anonymous");
    }

    #[test]
    fn test_new_comment_omits_missing_parent() {
        let json = serde_json::to_value(NewArticleComment {
            article_id: 9,
            content: "nice".to_string(),
            parent_id: None,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"articleId": 9, "content": "nice"}));
    }
}
