//! 게시글 목록 쿼리 파라미터
//!
//! 쿼리 문자열은 최선의 노력(best effort)으로 해석합니다. 해석할 수 없는 값은 에러가
//! 아니라 기본값으로 대체되며, 같은 키가 여러 번 나오면 첫 번째 값만 사용하고,
//! 빈 값은 없는 것으로 취급합니다.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, Error, FromRequest, HttpRequest};

/// 페이지네이션 `(limit, offset)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: usize,
    pub offset: usize,
}

impl Pagination {
    pub const DEFAULT_LIMIT: usize = 20;
    pub const DEFAULT_OFFSET: usize = 0;

    pub fn from_query(query: &str) -> Self {
        let pairs = QueryPairs::parse(query);
        Self {
            limit: pairs.count("limit").unwrap_or(Self::DEFAULT_LIMIT),
            offset: pairs.count("offset").unwrap_or(Self::DEFAULT_OFFSET),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            offset: Self::DEFAULT_OFFSET,
        }
    }
}

/// 게시글 목록 필터. 모든 조건은 AND 로 결합됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub tag: Option<String>,
    /// 작성자 사용자명
    pub author: Option<String>,
    /// 이 사용자명이 즐겨찾기한 게시글만
    pub favorited: Option<String>,
}

impl ArticleFilter {
    pub fn from_query(query: &str) -> Self {
        let pairs = QueryPairs::parse(query);
        Self {
            tag: pairs.first("tag"),
            author: pairs.first("author"),
            favorited: pairs.first("favorited"),
        }
    }
}

impl FromRequest for Pagination {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Pagination::from_query(req.query_string())))
    }
}

impl FromRequest for ArticleFilter {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(ArticleFilter::from_query(req.query_string())))
    }
}

/// 디코딩된 `(키, 값)` 쌍을 원래 순서대로 보관합니다.
struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    /// `application/x-www-form-urlencoded` 규칙으로 해석합니다. 실패하면 빈 목록.
    fn parse(query: &str) -> Self {
        let pairs = web::Query::<Vec<(String, String)>>::from_query(query)
            .map(web::Query::into_inner)
            .unwrap_or_default();
        Self(pairs)
    }

    /// `key`의 첫 번째 값. 빈 값은 없는 것으로 봅니다.
    fn first(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone())
            .filter(|value| !value.is_empty())
    }

    fn count(&self, key: &str) -> Option<usize> {
        self.first(key).and_then(|value| value.trim().parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_query() {
        assert_eq!(Pagination::from_query(""), Pagination { limit: 20, offset: 0 });
        assert_eq!(ArticleFilter::from_query(""), ArticleFilter::default());
    }

    #[test]
    fn test_each_field_defaults_independently() {
        assert_eq!(Pagination::from_query("limit=5&offset=abc"), Pagination { limit: 5, offset: 0 });
        assert_eq!(Pagination::from_query("limit=-3&offset=10"), Pagination { limit: 20, offset: 10 });
        assert_eq!(Pagination::from_query("limit=&offset"), Pagination::default());
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(Pagination::from_query("limit=2&limit=9"), Pagination { limit: 2, offset: 0 });
    }

    #[test]
    fn test_filter_values_are_decoded() {
        let filter = ArticleFilter::from_query("tag=rust+lang&author=jake%20doe&favorited=");

        assert_eq!(filter.tag.as_deref(), Some("rust lang"));
        assert_eq!(filter.author.as_deref(), Some("jake doe"));
        assert_eq!(filter.favorited, None);
    }

    #[test]
    fn test_first_occurrence_wins_even_when_empty() {
        // 첫 값이 비어 있으면 뒤의 값으로 넘어가지 않고 기본값
        assert_eq!(Pagination::from_query("limit=&limit=7"), Pagination::default());
        assert_eq!(ArticleFilter::from_query("tag=a%26b&tag=c").tag.as_deref(), Some("a&b"));
    }
}
