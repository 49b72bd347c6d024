//! Data models for blog entities.
//!
//! Response models are lenient: unknown fields are ignored and missing
//! fields fall back to defaults, since the server omits empty values.
//!
//! - `UserProfile`, `LoginPayload` and the account forms
//! - `Article`, `Tag`, `Category`, `ArticleQuery`
//! - `Comment` and the new-comment forms
//! - `Talk`, `Page`, `PageQuery`
//! - `SiteBaseInfo`, `SiteStats`

pub mod article;
pub mod comment;
pub mod site;
pub mod talk;
pub mod user;

pub use article::{Article, ArticleQuery, Category, Tag};
pub use comment::{Comment, NewArticleComment, NewTalkComment};
pub use site::{SiteBaseInfo, SiteStats};
pub use talk::{Page, PageQuery, Talk};
pub use user::{LoginForm, LoginPayload, RegisterForm, ResetPasswordForm, UserProfile, VerifyCodeForm};
