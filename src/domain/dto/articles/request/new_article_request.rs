use crate::validation::{rules, ObjectValidator, Schema};

/// 게시글 작성 요청 `{"article": {"title", "description", "body", "tagList"?}}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticleRequest {
    pub title: String,
    pub description: String,
    pub body: String,
    /// 없으면 빈 목록
    pub tag_list: Vec<String>,
}

impl Schema for NewArticleRequest {
    fn schema(root: &mut ObjectValidator<'_, '_>) -> Option<Self> {
        root.nested("article", |article| {
            let title = article.required("title", rules::FREE_TEXT);
            let description = article.required("description", rules::FREE_TEXT);
            let body = article.required("body", rules::FREE_TEXT);
            let tag_list = article.string_list("tagList");

            Some(Self {
                title: title?,
                description: description?,
                body: body?,
                tag_list: tag_list?,
            })
        })
    }
}
