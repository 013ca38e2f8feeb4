use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::dto::users::response::Profile;
use crate::domain::entities;

/// 댓글 응답 (`{"comment": ...}` 또는 `{"comments": [...]}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub author: Profile,
}

impl Comment {
    pub fn new(comment: &entities::Comment, author: &entities::User, viewer: Option<&entities::User>) -> Self {
        Self {
            id: comment.id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            body: comment.body.clone(),
            author: Profile::new(author, viewer),
        }
    }
}
