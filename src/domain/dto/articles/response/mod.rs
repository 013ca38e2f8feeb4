pub mod article_response;

pub use article_response::{Article, ArticleList};
