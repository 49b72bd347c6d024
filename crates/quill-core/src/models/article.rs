use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub id: Option<i64>,
    #[serde(alias = "tagName")]
    pub name: String,
}

/// An article as returned by the list and detail endpoints.
///
/// The default value is the "no article selected" placeholder: id, views and
/// likes are `-1`, text fields are empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub img_url: String,
    pub created_time: String,
    pub updated_time: String,
    pub views: i64,
    pub likes: i64,
    pub category_name: String,
    pub tags: Vec<Tag>,
}

impl Default for Article {
    fn default() -> Self {
        Self {
            id: -1,
            title: String::new(),
            description: String::new(),
            content: None,
            img_url: String::new(),
            created_time: String::new(),
            updated_time: String::new(),
            views: -1,
            likes: -1,
            category_name: String::new(),
            tags: Vec::new(),
        }
    }
}

impl Article {
    /// Whether this is a real article rather than the placeholder.
    pub fn is_set(&self) -> bool {
        self.id >= 0
    }

    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    pub id: i64,
    #[serde(alias = "categoryName")]
    pub name: String,
    #[serde(alias = "count")]
    pub article_count: Option<i64>,
}

/// Filters for `/user/article/condition/list`. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleQuery {
    pub title: Option<String>,
    pub category_id: Option<i64>,
    pub tag_id: Option<i64>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ArticleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn category(mut self, id: i64) -> Self {
        self.category_id = Some(id);
        self
    }

    pub fn tag(mut self, id: i64) -> Self {
        self.tag_id = Some(id);
        self
    }

    pub fn page(mut self, page: u32, page_size: u32) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }

    /// Query parameters in the server's naming.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(ref title) = self.title {
            params.push(("title".to_string(), title.clone()));
        }
        if let Some(id) = self.category_id {
            params.push(("categoryId".to_string(), id.to_string()));
        }
        if let Some(id) = self.tag_id {
            params.push(("tagId".to_string(), id.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page".to_string(), page.to_string()));
        }
        if let Some(size) = self.page_size {
            params.push(("pageSize".to_string(), size.to_string()));
        }
        params
    }
}
