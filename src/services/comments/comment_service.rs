//! # 댓글 서비스 (인메모리 참조 구현)
//!
//! 댓글은 게시글 ID 에 연결되므로 게시글 슬러그가 바뀌어도 유지됩니다.
//! 목록은 오래된 댓글이 먼저입니다.

use async_trait::async_trait;
use chrono::Utc;

use crate::core::AppError;
use crate::domain::dto::comments::{Comment, NewCommentRequest};
use crate::domain::entities;
use crate::domain::CurrentUser;
use crate::errors::{CommentError, CommentResult};
use crate::repositories::{Store, StoreState};
use crate::services::CommentService;

pub struct InMemoryCommentService {
    store: Store,
}

fn render(state: &StoreState, comment: &entities::Comment, viewer: Option<&CurrentUser>) -> Result<Comment, AppError> {
    let author = state.users.get(&comment.author_id).ok_or_else(|| {
        AppError::Unhandled(format!("댓글 {}의 작성자 {}가 없습니다", comment.id, comment.author_id))
    })?;
    let viewer = viewer.and_then(|viewer| state.users.get(&viewer.user_id));

    Ok(Comment::new(comment, author, viewer))
}

fn article_id(state: &StoreState, slug: &str) -> Result<u64, CommentError> {
    state
        .article_by_slug(slug)
        .map(|article| article.id)
        .ok_or_else(|| CommentError::SlugNotFound(slug.to_string()))
}

impl InMemoryCommentService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommentService for InMemoryCommentService {
    async fn add(&self, caller: &CurrentUser, slug: &str, comment: NewCommentRequest) -> CommentResult<Comment> {
        let mut state = self.store.write().await;
        let article_id = article_id(&state, slug)?;
        let now = Utc::now();

        let id = state.next_comment_id();
        let created = entities::Comment {
            id,
            article_id,
            author_id: caller.user_id,
            body: comment.body,
            created_at: now,
            updated_at: now,
        };

        let rendered = render(&state, &created, Some(caller))?;
        state.comments.insert(id, created);
        Ok(rendered)
    }

    async fn delete(&self, caller: &CurrentUser, slug: &str, id: u64) -> CommentResult<()> {
        let mut state = self.store.write().await;
        let article_id = article_id(&state, slug)?;

        let comment = state
            .comments
            .get(&id)
            .filter(|comment| comment.article_id == article_id)
            .ok_or(CommentError::NotFound(id))?;

        if comment.author_id != caller.user_id {
            log::warn!("댓글 {} 삭제 거부: 사용자 ID {}", id, caller.user_id);
            return Err(CommentError::NotPermitted(id).into());
        }

        state.comments.remove(&id);
        Ok(())
    }

    async fn list(&self, viewer: Option<&CurrentUser>, slug: &str) -> CommentResult<Vec<Comment>> {
        let state = self.store.read().await;
        let article_id = article_id(&state, slug)?;

        let comments = state
            .comments
            .values()
            .filter(|comment| comment.article_id == article_id)
            .map(|comment| render(&state, comment, viewer))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(comments)
    }
}
