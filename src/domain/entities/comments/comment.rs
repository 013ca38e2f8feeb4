//! 댓글 엔티티

use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: u64,
    /// 상위 게시글 ID (슬러그는 바뀔 수 있으므로 ID로 연결)
    pub article_id: u64,
    pub author_id: u64,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
