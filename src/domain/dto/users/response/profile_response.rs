use serde::Serialize;

use crate::domain::entities::User;

/// 다른 사용자에게 보이는 공개 프로필 (`{"profile": ...}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    /// 요청자가 이 사용자를 팔로우하는지 여부 (익명이면 항상 false)
    pub following: bool,
}

impl Profile {
    pub fn new(user: &User, viewer: Option<&User>) -> Self {
        Self {
            username: user.username.clone(),
            bio: user.bio.clone(),
            image: user.image.clone(),
            following: viewer.is_some_and(|viewer| viewer.is_following(user.id)),
        }
    }
}
