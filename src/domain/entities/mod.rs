//! 저장소에 보관되는 핵심 엔티티

pub mod articles;
pub mod comments;
pub mod users;

pub use articles::Article;
pub use comments::Comment;
pub use users::User;
