//! 게시글 관련 요청 DTO

pub mod new_article_request;
pub mod update_article_request;

pub use new_article_request::NewArticleRequest;
pub use update_article_request::UpdateArticleRequest;
