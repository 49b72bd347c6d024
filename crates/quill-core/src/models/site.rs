use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Site owner and presentation info from `/webinfo/baseinfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteBaseInfo {
    pub web_name: Option<String>,
    pub author: Option<String>,
    pub avatar: Option<String>,
    pub introduction: Option<String>,
    pub notice: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Counters from `/webinfo`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteStats {
    pub article_count: i64,
    pub category_count: i64,
    pub tag_count: i64,
    pub talk_count: i64,
    pub view_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_info_keeps_unknown_fields() {
        let info: SiteBaseInfo =
            serde_json::from_str(r#"{"webName":"Notes","author":"me","github":"https://github.com/me"}"#).unwrap();
        assert_eq!(info.web_name.as_deref(), Some("Notes"));
        assert_eq!(info.extra.get("github").and_then(Value::as_str), Some("https://github.com/me"));
    }

    #[test]
    fn test_parse_stats_defaults() {
        let stats: SiteStats = serde_json::from_str(r#"{"articleCount":3,"viewCount":100}"#).unwrap();
        assert_eq!(stats.article_count, 3);
        assert_eq!(stats.view_count, 100);
        assert_eq!(stats.tag_count, 0);
    }
}
