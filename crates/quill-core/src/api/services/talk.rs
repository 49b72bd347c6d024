use crate::api::transport::{HttpRequest, Transport};
use crate::api::{ApiClient, ApiError};
use crate::models::{Page, PageQuery, Talk};

impl<T: Transport> ApiClient<T> {
    pub async fn talk_list(&self, page: PageQuery) -> Result<Page<Talk>, ApiError> {
        self.fetch(HttpRequest::get("user/talk").params(page.to_params()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::api::testing::FakeTransport;
    use crate::api::ApiClient;
    use crate::models::PageQuery;
    use crate::storage::MemoryStorage;

    #[tokio::test]
    async fn test_talk_list_paginates() {
        let transport = FakeTransport::new();
        let client = ApiClient::with_transport(transport.clone(), Arc::new(MemoryStorage::new()));
        transport.respond(
            200,
            json!({"code": 1, "data": {"total": 21, "records": [{"id": 11, "content": "coffee"}]}}),
        );

        let page = client.talk_list(PageQuery::new(2, 10)).await.unwrap();
        assert_eq!(page.total, 21);
        assert_eq!(page.records[0].content, "coffee");

        let sent = transport.last_request();
        assert_eq!(sent.path, "user/talk");
        assert_eq!(sent.query, PageQuery::new(2, 10).to_params());
    }
}
