//! # 사용자 관리 서비스 (인메모리 참조 구현)
//!
//! 가입, 로그인, 본인 정보 조회/수정, 프로필 조회, 팔로우를 담당합니다.
//!
//! - 비밀번호는 bcrypt 로 해싱하며 cost 는 실행 환경별 설정을 따릅니다.
//! - 사용자명과 이메일은 각각 유일해야 하며, 사용자명 검사가 먼저입니다.
//! - 알 수 없는 이메일과 틀린 비밀번호는 구분하지 않고 `BadCredentials`로 응답합니다.

use std::sync::Arc;

use async_trait::async_trait;
use bcrypt::{hash, verify};
use chrono::Utc;

use crate::config::PasswordConfig;
use crate::core::ErrorContext;
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest, UpdateUserRequest};
use crate::domain::dto::users::response::{Profile, UserBody};
use crate::domain::entities::User;
use crate::domain::CurrentUser;
use crate::errors::{UserError, UserResult};
use crate::repositories::{Store, StoreState};
use crate::services::auth::JwtTokenService;
use crate::services::UserService;

pub struct InMemoryUserService {
    store: Store,
    tokens: Arc<JwtTokenService>,
    password: PasswordConfig,
}

impl InMemoryUserService {
    pub fn new(store: Store, tokens: Arc<JwtTokenService>, password: PasswordConfig) -> Self {
        Self { store, tokens, password }
    }

    fn hash_password(&self, password: &str) -> UserResult<String> {
        Ok(hash(password, self.password.bcrypt_cost).context("비밀번호 해싱 실패")?)
    }

    /// 이메일로 `(사용자 ID, 비밀번호 해시)`를 복사해 옵니다. 반환 시점에 읽기 잠금은 풀려 있습니다.
    async fn stored_credentials(&self, email: &str) -> UserResult<(u64, String)> {
        let state = self.store.read().await;

        match state.user_by_email(email) {
            Some(user) => Ok((user.id, user.password_hash.clone())),
            None => {
                log::info!("로그인 실패: 알 수 없는 이메일 {}", email);
                Err(UserError::BadCredentials.into())
            }
        }
    }

    /// 다른 사용자가 이미 쓰고 있는 사용자명/이메일인지 확인합니다.
    fn ensure_available(
        state: &StoreState,
        user_id: Option<u64>,
        username: Option<&str>,
        email: Option<&str>,
    ) -> UserResult<()> {
        let taken_by_other = |user: Option<&User>| user.is_some_and(|user| Some(user.id) != user_id);

        if let Some(username) = username {
            if taken_by_other(state.user_by_username(username)) {
                return Err(UserError::UsernameTaken(username.to_string()).into());
            }
        }

        if let Some(email) = email {
            if taken_by_other(state.user_by_email(email)) {
                return Err(UserError::EmailTaken(email.to_string()).into());
            }
        }

        Ok(())
    }

    fn caller<'s>(state: &'s StoreState, caller: &CurrentUser) -> UserResult<&'s User> {
        state
            .users
            .get(&caller.user_id)
            .ok_or_else(|| UserError::NotFound(caller.user_id.to_string()).into())
    }

    fn target<'s>(state: &'s StoreState, username: &str) -> UserResult<&'s User> {
        state
            .user_by_username(username)
            .ok_or_else(|| UserError::NotFound(username.to_string()).into())
    }

    async fn set_following(&self, caller: &CurrentUser, username: &str, follow: bool) -> UserResult<Profile> {
        let mut state = self.store.write().await;
        let target_id = Self::target(&state, username)?.id;

        let follower = state
            .users
            .get_mut(&caller.user_id)
            .ok_or_else(|| UserError::NotFound(caller.user_id.to_string()))?;
        if follow {
            follower.following.insert(target_id);
        } else {
            follower.following.remove(&target_id);
        }

        log::debug!("팔로우 변경: {} -> {} ({})", caller.user_id, username, follow);

        let viewer = Self::caller(&state, caller)?;
        Ok(Profile::new(Self::target(&state, username)?, Some(viewer)))
    }
}

#[async_trait]
impl UserService for InMemoryUserService {
    async fn login(&self, credentials: LoginRequest) -> UserResult<UserBody> {
        let (user_id, password_hash) = self.stored_credentials(&credentials.email).await?;

        // bcrypt 검증은 저장소 잠금 밖에서 수행
        if !verify(&credentials.password, &password_hash).context("비밀번호 검증 실패")? {
            log::info!("로그인 실패: 비밀번호 불일치 (사용자 ID {})", user_id);
            return Err(UserError::BadCredentials.into());
        }

        let token = self.tokens.issue(user_id)?;
        let state = self.store.read().await;
        let user = state.users.get(&user_id).ok_or(UserError::BadCredentials)?;
        Ok(UserBody::new(user, token))
    }

    async fn register(&self, registration: RegisterRequest) -> UserResult<UserBody> {
        let password_hash = self.hash_password(&registration.password)?;

        let mut state = self.store.write().await;
        Self::ensure_available(
            &state,
            None,
            Some(registration.username.as_str()),
            Some(registration.email.as_str()),
        )?;

        let id = state.next_user_id();
        let user = User::new(id, registration.username, registration.email, password_hash);
        let token = self.tokens.issue(id)?;
        let body = UserBody::new(&user, token);
        state.users.insert(id, user);

        log::info!("사용자 가입: {} (ID {})", body.username, id);
        Ok(body)
    }

    async fn current(&self, caller: &CurrentUser) -> UserResult<UserBody> {
        let state = self.store.read().await;
        let user = Self::caller(&state, caller)?;

        Ok(UserBody::new(user, caller.token.clone()))
    }

    async fn update(&self, caller: &CurrentUser, changes: UpdateUserRequest) -> UserResult<UserBody> {
        let password_hash = changes
            .password
            .as_deref()
            .map(|password| self.hash_password(password))
            .transpose()?;

        let mut state = self.store.write().await;
        Self::ensure_available(
            &state,
            Some(caller.user_id),
            changes.username.as_deref(),
            changes.email.as_deref(),
        )?;

        let user = state
            .users
            .get_mut(&caller.user_id)
            .ok_or_else(|| UserError::NotFound(caller.user_id.to_string()))?;

        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(username) = changes.username {
            user.username = username;
        }
        if let Some(password_hash) = password_hash {
            user.password_hash = password_hash;
        }
        if let Some(image) = changes.image {
            user.image = Some(image);
        }
        if let Some(bio) = changes.bio {
            user.bio = Some(bio);
        }
        user.updated_at = Utc::now();

        let token = self.tokens.issue(caller.user_id)?;
        Ok(UserBody::new(user, token))
    }

    async fn profile(&self, viewer: Option<&CurrentUser>, username: &str) -> UserResult<Profile> {
        let state = self.store.read().await;
        let user = Self::target(&state, username)?;
        let viewer = viewer.and_then(|viewer| state.users.get(&viewer.user_id));

        Ok(Profile::new(user, viewer))
    }

    async fn follow(&self, caller: &CurrentUser, username: &str) -> UserResult<Profile> {
        self.set_following(caller, username, true).await
    }

    async fn unfollow(&self, caller: &CurrentUser, username: &str) -> UserResult<Profile> {
        self.set_following(caller, username, false).await
    }
}
