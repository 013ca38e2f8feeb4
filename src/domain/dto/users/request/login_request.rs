use crate::validation::{rules, ObjectValidator, Schema};

/// 로그인 요청 `{"user": {"email", "password"}}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Schema for LoginRequest {
    fn schema(root: &mut ObjectValidator<'_, '_>) -> Option<Self> {
        root.nested("user", |user| {
            let email = user.required("email", rules::EMAIL);
            let password = user.required("password", rules::PASSWORD);

            Some(Self {
                email: email?,
                password: password?,
            })
        })
    }
}
