use serde::Serialize;

use crate::domain::entities::User;

/// 인증된 사용자 본인 정보 (`{"user": ...}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserBody {
    pub email: String,
    pub token: String,
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl UserBody {
    pub fn new(user: &User, token: String) -> Self {
        Self {
            email: user.email.clone(),
            token,
            username: user.username.clone(),
            bio: user.bio.clone(),
            image: user.image.clone(),
        }
    }
}
