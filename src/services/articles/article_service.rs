//! # 게시글 서비스 (인메모리 참조 구현)
//!
//! - 슬러그는 제목을 slugify 한 뒤 짧은 UUID 접미사를 붙여 유일하게 만듭니다.
//! - 수정/삭제는 작성자만 가능하며, 제목이 바뀌면 슬러그도 다시 만들어집니다.
//! - 목록과 피드는 최신 글이 먼저이며, `articlesCount`는 페이지네이션 전 개수입니다.

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::core::AppError;
use crate::domain::dto::articles::query::{ArticleFilter, Pagination};
use crate::domain::dto::articles::request::{NewArticleRequest, UpdateArticleRequest};
use crate::domain::dto::articles::response::{Article, ArticleList};
use crate::domain::entities;
use crate::domain::CurrentUser;
use crate::errors::{ArticleError, ArticleResult};
use crate::repositories::{Store, StoreState};
use crate::services::ArticleService;

pub struct InMemoryArticleService {
    store: Store,
}

/// `slugify(title)-xxxxxxxx`
fn generate_slug(state: &StoreState, title: &str) -> String {
    loop {
        let suffix = Uuid::new_v4().simple().to_string();
        let slug = format!("{}-{}", slug::slugify(title), &suffix[..8]);
        if !state.slug_exists(&slug) {
            return slug;
        }
    }
}

/// 입력 순서를 유지하며 중복 태그를 제거합니다.
fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    tags.into_iter().filter(|tag| seen.insert(tag.clone())).collect()
}

/// 요청자 관점의 응답으로 변환합니다.
fn render(
    state: &StoreState,
    article: &entities::Article,
    viewer: Option<&CurrentUser>,
) -> Result<Article, AppError> {
    let author = state.users.get(&article.author_id).ok_or_else(|| {
        AppError::Unhandled(format!("게시글 {}의 작성자 {}가 없습니다", article.slug, article.author_id))
    })?;
    let viewer = viewer.and_then(|viewer| state.users.get(&viewer.user_id));

    Ok(Article::new(article, author, viewer))
}

fn paginate(
    state: &StoreState,
    mut matches: Vec<&entities::Article>,
    page: Pagination,
    viewer: Option<&CurrentUser>,
) -> ArticleResult<ArticleList> {
    matches.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    let articles_count = matches.len();

    let articles = matches
        .into_iter()
        .skip(page.offset)
        .take(page.limit)
        .map(|article| render(state, article, viewer))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ArticleList { articles, articles_count })
}

impl InMemoryArticleService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    fn not_found(slug: &str) -> ArticleError {
        ArticleError::NotFound(slug.to_string())
    }

    /// 슬러그로 찾은 게시글을 작성자만 수정할 수 있도록 꺼냅니다.
    fn owned_mut<'s>(
        state: &'s mut StoreState,
        caller: &CurrentUser,
        slug: &str,
    ) -> ArticleResult<&'s mut entities::Article> {
        let article = state.article_by_slug_mut(slug).ok_or_else(|| Self::not_found(slug))?;
        if !article.is_authored_by(caller.user_id) {
            log::warn!("게시글 {} 수정 거부: 사용자 ID {}", slug, caller.user_id);
            return Err(ArticleError::NotPermitted(slug.to_string()).into());
        }
        Ok(article)
    }

    async fn set_favorite(&self, caller: &CurrentUser, slug: &str, favorite: bool) -> ArticleResult<Article> {
        let mut state = self.store.write().await;

        let article = state.article_by_slug_mut(slug).ok_or_else(|| Self::not_found(slug))?;
        if favorite {
            article.favorited_by.insert(caller.user_id);
        } else {
            article.favorited_by.remove(&caller.user_id);
        }

        let article = state.article_by_slug(slug).ok_or_else(|| Self::not_found(slug))?;
        Ok(render(&state, article, Some(caller))?)
    }
}

#[async_trait]
impl ArticleService for InMemoryArticleService {
    async fn list(
        &self,
        viewer: Option<&CurrentUser>,
        filter: ArticleFilter,
        page: Pagination,
    ) -> ArticleResult<ArticleList> {
        let state = self.store.read().await;

        // 알 수 없는 사용자명으로 거르면 결과는 비어 있음
        let author_id = filter
            .author
            .as_deref()
            .map(|username| state.user_by_username(username).map(|user| user.id));
        let favorited_by = filter
            .favorited
            .as_deref()
            .map(|username| state.user_by_username(username).map(|user| user.id));

        let matches = state
            .articles
            .values()
            .filter(|article| filter.tag.as_deref().is_none_or(|tag| article.has_tag(tag)))
            .filter(|article| author_id.is_none_or(|id| id == Some(article.author_id)))
            .filter(|article| {
                favorited_by.is_none_or(|id| id.is_some_and(|id| article.favorited_by.contains(&id)))
            })
            .collect();

        paginate(&state, matches, page, viewer)
    }

    async fn feed(&self, caller: &CurrentUser, page: Pagination) -> ArticleResult<ArticleList> {
        let state = self.store.read().await;
        let following = state
            .users
            .get(&caller.user_id)
            .map(|user| user.following.clone())
            .unwrap_or_default();

        let matches = state
            .articles
            .values()
            .filter(|article| following.contains(&article.author_id))
            .collect();

        paginate(&state, matches, page, Some(caller))
    }

    async fn get(&self, viewer: Option<&CurrentUser>, slug: &str) -> ArticleResult<Article> {
        let state = self.store.read().await;
        let article = state.article_by_slug(slug).ok_or_else(|| Self::not_found(slug))?;

        Ok(render(&state, article, viewer)?)
    }

    async fn create(&self, caller: &CurrentUser, article: NewArticleRequest) -> ArticleResult<Article> {
        let mut state = self.store.write().await;
        let now = Utc::now();

        let id = state.next_article_id();
        let created = entities::Article {
            id,
            slug: generate_slug(&state, &article.title),
            title: article.title,
            description: article.description,
            body: article.body,
            tag_list: dedup_tags(article.tag_list),
            author_id: caller.user_id,
            favorited_by: BTreeSet::new(),
            created_at: now,
            updated_at: now,
        };

        let rendered = render(&state, &created, Some(caller))?;
        state.articles.insert(id, created);

        log::info!("게시글 작성: {} (사용자 ID {})", rendered.slug, caller.user_id);
        Ok(rendered)
    }

    async fn update(
        &self,
        caller: &CurrentUser,
        slug: &str,
        changes: UpdateArticleRequest,
    ) -> ArticleResult<Article> {
        let mut state = self.store.write().await;

        let new_slug = match changes.title.as_deref() {
            Some(title) => Some(generate_slug(&state, title)),
            None => None,
        };

        let article = Self::owned_mut(&mut state, caller, slug)?;
        if let Some(title) = changes.title {
            article.title = title;
        }
        if let Some(new_slug) = new_slug {
            article.slug = new_slug;
        }
        if let Some(description) = changes.description {
            article.description = description;
        }
        if let Some(body) = changes.body {
            article.body = body;
        }
        article.updated_at = Utc::now();

        let updated = article.clone();
        Ok(render(&state, &updated, Some(caller))?)
    }

    async fn delete(&self, caller: &CurrentUser, slug: &str) -> ArticleResult<()> {
        let mut state = self.store.write().await;
        let id = Self::owned_mut(&mut state, caller, slug)?.id;

        state.articles.remove(&id);
        state.comments.retain(|_, comment| comment.article_id != id);

        log::info!("게시글 삭제: {} (사용자 ID {})", slug, caller.user_id);
        Ok(())
    }

    async fn favorite(&self, caller: &CurrentUser, slug: &str) -> ArticleResult<Article> {
        self.set_favorite(caller, slug, true).await
    }

    async fn unfavorite(&self, caller: &CurrentUser, slug: &str) -> ArticleResult<Article> {
        self.set_favorite(caller, slug, false).await
    }

    async fn tags(&self) -> ArticleResult<Vec<String>> {
        let state = self.store.read().await;
        let tags: BTreeSet<&String> = state
            .articles
            .values()
            .flat_map(|article| article.tag_list.iter())
            .collect();

        Ok(tags.into_iter().cloned().collect())
    }
}
