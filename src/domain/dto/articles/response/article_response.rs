use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::dto::users::response::Profile;
use crate::domain::entities;

/// 게시글 응답 (`{"article": ...}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// 요청자가 즐겨찾기했는지 여부
    pub favorited: bool,
    pub favorites_count: usize,
    pub author: Profile,
}

impl Article {
    pub fn new(article: &entities::Article, author: &entities::User, viewer: Option<&entities::User>) -> Self {
        Self {
            slug: article.slug.clone(),
            title: article.title.clone(),
            description: article.description.clone(),
            body: article.body.clone(),
            tag_list: article.tag_list.clone(),
            created_at: article.created_at,
            updated_at: article.updated_at,
            favorited: viewer.is_some_and(|viewer| article.favorited_by.contains(&viewer.id)),
            favorites_count: article.favorited_by.len(),
            author: Profile::new(author, viewer),
        }
    }
}

/// 게시글 목록 응답 (`{"articles": [...], "articlesCount": n}`)
///
/// `articles_count`는 페이지네이션 적용 전 전체 개수입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleList {
    pub articles: Vec<Article>,
    pub articles_count: usize,
}
