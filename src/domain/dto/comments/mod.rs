pub mod request;
pub mod response;

pub use request::NewCommentRequest;
pub use response::Comment;
