use crate::api::transport::{HttpRequest, Transport};
use crate::api::{ApiClient, ApiError};
use crate::models::{SiteBaseInfo, SiteStats};

impl<T: Transport> ApiClient<T> {
    pub async fn site_base_info(&self) -> Result<SiteBaseInfo, ApiError> {
        self.fetch(HttpRequest::get("/webinfo/baseinfo")).await
    }

    pub async fn site_stats(&self) -> Result<SiteStats, ApiError> {
        self.fetch(HttpRequest::get("/webinfo")).await
    }
}
