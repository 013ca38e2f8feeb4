//! # 비즈니스 서비스 계약
//!
//! 요청 파이프라인은 이 모듈의 trait 으로만 비즈니스 계층과 대화합니다. 각 연산은
//! 자신의 도메인 에러만 반환하므로, 핸들러에서 `?`를 쓰면 해당 도메인의 상태 코드
//! 매핑이 그대로 적용됩니다.
//!
//! 참조 구현은 인메모리 저장소를 공유하는 [`AppServices::in_memory`]입니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{JwtConfig, PasswordConfig};
use crate::domain::dto::articles::query::{ArticleFilter, Pagination};
use crate::domain::dto::articles::request::{NewArticleRequest, UpdateArticleRequest};
use crate::domain::dto::articles::response::{Article, ArticleList};
use crate::domain::dto::comments::{Comment, NewCommentRequest};
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest, UpdateUserRequest};
use crate::domain::dto::users::response::{Profile, UserBody};
use crate::domain::CurrentUser;
use crate::errors::{ArticleResult, CommentResult, TokenError, UserResult};
use crate::repositories::Store;

pub mod articles;
pub mod auth;
pub mod comments;
pub mod users;

/// 토큰 원문을 사용자 ID 로 교환합니다.
#[async_trait]
pub trait TokenResolver: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<u64, TokenError>;
}

#[async_trait]
pub trait UserService: Send + Sync {
    async fn login(&self, credentials: LoginRequest) -> UserResult<UserBody>;

    async fn register(&self, registration: RegisterRequest) -> UserResult<UserBody>;

    /// 응답 토큰은 요청에 제시된 토큰 그대로입니다.
    async fn current(&self, caller: &CurrentUser) -> UserResult<UserBody>;

    /// 수정이 반영된 사용자 정보와 새로 발급한 토큰을 돌려줍니다.
    async fn update(&self, caller: &CurrentUser, changes: UpdateUserRequest) -> UserResult<UserBody>;

    async fn profile(&self, viewer: Option<&CurrentUser>, username: &str) -> UserResult<Profile>;

    async fn follow(&self, caller: &CurrentUser, username: &str) -> UserResult<Profile>;

    async fn unfollow(&self, caller: &CurrentUser, username: &str) -> UserResult<Profile>;
}

#[async_trait]
pub trait ArticleService: Send + Sync {
    async fn list(
        &self,
        viewer: Option<&CurrentUser>,
        filter: ArticleFilter,
        page: Pagination,
    ) -> ArticleResult<ArticleList>;

    /// 팔로우한 작성자들의 게시글
    async fn feed(&self, caller: &CurrentUser, page: Pagination) -> ArticleResult<ArticleList>;

    async fn get(&self, viewer: Option<&CurrentUser>, slug: &str) -> ArticleResult<Article>;

    async fn create(&self, caller: &CurrentUser, article: NewArticleRequest) -> ArticleResult<Article>;

    async fn update(
        &self,
        caller: &CurrentUser,
        slug: &str,
        changes: UpdateArticleRequest,
    ) -> ArticleResult<Article>;

    async fn delete(&self, caller: &CurrentUser, slug: &str) -> ArticleResult<()>;

    async fn favorite(&self, caller: &CurrentUser, slug: &str) -> ArticleResult<Article>;

    async fn unfavorite(&self, caller: &CurrentUser, slug: &str) -> ArticleResult<Article>;

    async fn tags(&self) -> ArticleResult<Vec<String>>;
}

#[async_trait]
pub trait CommentService: Send + Sync {
    async fn add(&self, caller: &CurrentUser, slug: &str, comment: NewCommentRequest) -> CommentResult<Comment>;

    async fn delete(&self, caller: &CurrentUser, slug: &str, id: u64) -> CommentResult<()>;

    async fn list(&self, viewer: Option<&CurrentUser>, slug: &str) -> CommentResult<Vec<Comment>>;
}

/// 핸들러가 `web::Data`로 공유하는 서비스 묶음
#[derive(Clone)]
pub struct AppServices {
    pub tokens: Arc<dyn TokenResolver>,
    pub users: Arc<dyn UserService>,
    pub articles: Arc<dyn ArticleService>,
    pub comments: Arc<dyn CommentService>,
}

impl AppServices {
    /// 하나의 인메모리 저장소를 공유하는 참조 구현
    pub fn in_memory(jwt: JwtConfig, password: PasswordConfig) -> Self {
        let store = Store::new();
        let tokens = Arc::new(auth::JwtTokenService::new(store.clone(), jwt));

        Self {
            tokens: tokens.clone(),
            users: Arc::new(users::InMemoryUserService::new(store.clone(), tokens, password)),
            articles: Arc::new(articles::InMemoryArticleService::new(store.clone())),
            comments: Arc::new(comments::InMemoryCommentService::new(store)),
        }
    }
}
