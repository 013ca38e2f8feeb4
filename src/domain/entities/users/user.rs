//! 사용자 엔티티

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

/// 저장소에 보관되는 사용자
///
/// 응답으로 직접 직렬화되지 않습니다. 외부로 나갈 때는 항상
/// [`crate::domain::dto::users::response::UserBody`] 또는 [`crate::domain::dto::users::response::Profile`]을 거칩니다.
#[derive(Debug, Clone)]
pub struct User {
    pub id: u64,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 사용자 이름 (unique)
    pub username: String,
    /// bcrypt 해시
    pub password_hash: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    /// 이 사용자가 팔로우하는 사용자 ID 목록
    pub following: BTreeSet<u64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: u64, username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();

        Self {
            id,
            email,
            username,
            password_hash,
            bio: None,
            image: None,
            following: BTreeSet::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_following(&self, other: u64) -> bool {
        self.following.contains(&other)
    }
}
