//! # 인메모리 저장소
//!
//! 참조용 비즈니스 서비스들이 공유하는 상태입니다. 모든 서비스는 같은 [`Store`]를
//! 복제해 들고 있으며, 상태는 `tokio::sync::RwLock` 하나로 보호됩니다.
//! 요청 파이프라인은 이 저장소를 직접 보지 않습니다.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::entities::{Article, Comment, User};

#[derive(Debug, Default)]
pub struct StoreState {
    pub users: BTreeMap<u64, User>,
    pub articles: BTreeMap<u64, Article>,
    pub comments: BTreeMap<u64, Comment>,
    last_user_id: u64,
    last_article_id: u64,
    last_comment_id: u64,
}

impl StoreState {
    pub fn next_user_id(&mut self) -> u64 {
        self.last_user_id += 1;
        self.last_user_id
    }

    pub fn next_article_id(&mut self) -> u64 {
        self.last_article_id += 1;
        self.last_article_id
    }

    pub fn next_comment_id(&mut self) -> u64 {
        self.last_comment_id += 1;
        self.last_comment_id
    }

    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.values().find(|user| user.username == username)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.values().find(|user| user.email == email)
    }

    pub fn article_by_slug(&self, slug: &str) -> Option<&Article> {
        self.articles.values().find(|article| article.slug == slug)
    }

    pub fn article_by_slug_mut(&mut self, slug: &str) -> Option<&mut Article> {
        self.articles.values_mut().find(|article| article.slug == slug)
    }

    pub fn slug_exists(&self, slug: &str) -> bool {
        self.article_by_slug(slug).is_some()
    }
}

/// 서비스 간에 공유되는 저장소 핸들
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: Arc<RwLock<StoreState>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().await
    }
}
