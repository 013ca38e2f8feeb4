use crate::validation::{rules, ObjectValidator, Schema};

/// 게시글 수정 요청. 값이 있는 필드만 바뀝니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}

impl Schema for UpdateArticleRequest {
    fn schema(root: &mut ObjectValidator<'_, '_>) -> Option<Self> {
        root.nested("article", |article| {
            let title = article.optional("title", rules::FREE_TEXT);
            let description = article.optional("description", rules::FREE_TEXT);
            let body = article.optional("body", rules::FREE_TEXT);

            Some(Self {
                title: title?,
                description: description?,
                body: body?,
            })
        })
    }
}
