//! 사용자 관련 응답 DTO

pub mod profile_response;
pub mod user_response;

pub use profile_response::Profile;
pub use user_response::UserBody;
