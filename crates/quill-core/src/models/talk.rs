use serde::{Deserialize, Serialize};

/// A short status post ("talk").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Talk {
    pub id: i64,
    pub content: String,
    pub images: Vec<String>,
    pub likes: i64,
    pub comment_count: i64,
    pub create_time: Option<String>,
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page<T> {
    pub total: i64,
    #[serde(alias = "rows", alias = "list")]
    pub records: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            total: 0,
            records: Vec::new(),
        }
    }
}

/// Page number (1-based) and size for paginated endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub page_size: u32,
}

/// Default number of talks per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageQuery {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn to_params(&self) -> Vec<(String, String)> {
        vec![
            ("page".to_string(), self.page.to_string()),
            ("pageSize".to_string(), self.page_size.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_aliases() {
        let page: Page<Talk> =
            serde_json::from_str(r#"{"total":12,"rows":[{"id":1,"content":"hi","images":["a.png"]}]}"#).unwrap();
        assert_eq!(page.total, 12);
        assert_eq!(page.records[0].images, vec!["a.png".to_string()]);

        let page: Page<Talk> = serde_json::from_str(r#"{"list":[]}"#).unwrap();
        assert_eq!(page.total, 0);
        assert!(page.records.is_empty());
    }

    #[test]
    fn test_page_query_clamps_to_one() {
        let query = PageQuery::new(0, 0);
        assert_eq!(query, PageQuery { page: 1, page_size: 1 });
        assert_eq!(
            PageQuery::default().to_params(),
            vec![
                ("page".to_string(), "1".to_string()),
                ("pageSize".to_string(), "10".to_string()),
            ]
        );
    }
}
