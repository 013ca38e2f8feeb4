use crate::validation::{rules, ObjectValidator, Schema};

/// 댓글 작성 요청 `{"comment": {"body"}}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCommentRequest {
    pub body: String,
}

impl Schema for NewCommentRequest {
    fn schema(root: &mut ObjectValidator<'_, '_>) -> Option<Self> {
        root.nested("comment", |comment| {
            let body = comment.required("body", rules::FREE_TEXT);
            Some(Self { body: body? })
        })
    }
}
