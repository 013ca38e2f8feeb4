//! 게시글 엔티티

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: u64,
    /// URL 식별자 (unique, 제목이 바뀌면 다시 생성)
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    /// 중복 없이 입력 순서를 유지한 태그 목록
    pub tag_list: Vec<String>,
    pub author_id: u64,
    /// 이 게시글을 즐겨찾기한 사용자 ID 목록
    pub favorited_by: BTreeSet<u64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_authored_by(&self, user_id: u64) -> bool {
        self.author_id == user_id
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag_list.iter().any(|candidate| candidate == tag)
    }
}
