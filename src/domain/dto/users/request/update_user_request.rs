use crate::validation::{rules, ObjectValidator, Schema};

/// 프로필 수정 요청. 모든 필드가 선택이며, 값이 있으면 가입 때와 같은 규칙을 적용합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub image: Option<String>,
    pub bio: Option<String>,
}

impl Schema for UpdateUserRequest {
    fn schema(root: &mut ObjectValidator<'_, '_>) -> Option<Self> {
        root.nested("user", |user| {
            let email = user.optional("email", rules::EMAIL);
            let username = user.optional("username", rules::USERNAME);
            let password = user.optional("password", rules::PASSWORD);
            let image = user.optional("image", rules::FREE_TEXT);
            let bio = user.optional("bio", rules::FREE_TEXT);

            Some(Self {
                email: email?,
                username: username?,
                password: password?,
                image: image?,
                bio: bio?,
            })
        })
    }
}
