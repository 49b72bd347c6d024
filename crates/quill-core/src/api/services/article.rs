use crate::api::transport::{HttpRequest, Transport};
use crate::api::{ApiClient, ApiError, Envelope};
use crate::models::{Article, ArticleQuery, Category};

impl<T: Transport> ApiClient<T> {
    pub async fn article_list(&self) -> Result<Vec<Article>, ApiError> {
        self.fetch(HttpRequest::get("/user/article/list")).await
    }

    pub async fn article_detail(&self, id: i64) -> Result<Article, ApiError> {
        self.fetch(HttpRequest::get("/user/article").query("id", id))
            .await
    }

    pub async fn like_article(&self, id: i64) -> Result<Envelope, ApiError> {
        self.execute(HttpRequest::get(format!("/user/article/like/{}", id)))
            .await
    }

    pub async fn articles_by_tag(&self, tag_id: i64) -> Result<Vec<Article>, ApiError> {
        self.fetch(HttpRequest::get(format!("/user/article/tag/{}", tag_id)))
            .await
    }

    pub async fn articles_by_category(&self, category_id: i64) -> Result<Vec<Article>, ApiError> {
        self.fetch(HttpRequest::get(format!("/user/article/category/{}", category_id)))
            .await
    }

    /// Filtered listing; the payload shape depends on the filters, so the
    /// raw envelope is returned.
    pub async fn articles_by_condition(&self, query: &ArticleQuery) -> Result<Envelope, ApiError> {
        self.execute(HttpRequest::get("/user/article/condition/list").params(query.to_params()))
            .await
    }

    pub async fn category_list(&self) -> Result<Vec<Category>, ApiError> {
        self.fetch(HttpRequest::get("/user/category/list")).await
    }
}
