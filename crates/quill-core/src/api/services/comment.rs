use crate::api::transport::{HttpRequest, Transport};
use crate::api::{ApiClient, ApiError, Envelope};
use crate::models::{Comment, NewArticleComment, NewTalkComment};

use super::user::to_body;

impl<T: Transport> ApiClient<T> {
    // ===== Article comments =====

    pub async fn article_comments(&self, article_id: i64) -> Result<Vec<Comment>, ApiError> {
        self.fetch(HttpRequest::get(format!("/user/comment/article/{}", article_id)))
            .await
    }

    pub async fn add_article_comment(&self, comment: &NewArticleComment) -> Result<Envelope, ApiError> {
        self.execute(HttpRequest::post("/user/comment/article/add", to_body(comment)?))
            .await
    }

    pub async fn delete_article_comment(&self, comment_id: i64) -> Result<Envelope, ApiError> {
        self.execute(HttpRequest::delete(format!("/user/comment/article/{}", comment_id)))
            .await
    }

    // ===== Talk comments =====

    pub async fn talk_comments(&self, talk_id: i64) -> Result<Vec<Comment>, ApiError> {
        self.fetch(HttpRequest::get(format!("/user/comment/talk/{}", talk_id)))
            .await
    }

    pub async fn add_talk_comment(&self, comment: &NewTalkComment) -> Result<Envelope, ApiError> {
        self.execute(HttpRequest::post("/user/comment/talk", to_body(comment)?))
            .await
    }

    pub async fn delete_talk_comment(&self, comment_id: i64) -> Result<Envelope, ApiError> {
        self.execute(HttpRequest::delete(format!("/user/comment/talk/{}", comment_id)))
            .await
    }
}
