use crate::validation::{rules, ObjectValidator, Schema};

/// 회원가입 요청 `{"user": {"username", "email", "password"}}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Schema for RegisterRequest {
    fn schema(root: &mut ObjectValidator<'_, '_>) -> Option<Self> {
        root.nested("user", |user| {
            let username = user.required("username", rules::USERNAME);
            let email = user.required("email", rules::EMAIL);
            let password = user.required("password", rules::PASSWORD);

            Some(Self {
                username: username?,
                email: email?,
                password: password?,
            })
        })
    }
}
