//! 스키마 평가기
//!
//! [`Schema`]를 구현한 페이로드 타입은 자신의 필드와 규칙 목록을 선언하고,
//! [`ObjectValidator`]가 원본 JSON 을 한 번 순회하면서 필드를 평가합니다.
//!
//! 필드 간에는 단락 평가가 없습니다. 각 필드 호출은 실패하더라도 에러를 공유 맵에
//! 기록하고 `None`을 돌려줄 뿐이므로, 모든 필드를 먼저 평가한 뒤 `?`로 조립하면
//! 전체 에러가 한 번에 수집됩니다.
//!
//! ```rust,ignore
//! impl Schema for Login {
//!     fn schema(root: &mut ObjectValidator<'_, '_>) -> Option<Self> {
//!         root.nested("user", |user| {
//!             let email = user.required("email", rules::EMAIL);
//!             let password = user.required("password", rules::PASSWORD);
//!             Some(Login { email: email?, password: password? })
//!         })
//!     }
//! }
//! ```

use serde_json::{Map, Value};

use super::rules::{self, Rule};
use crate::errors::{FieldErrors, PayloadError};

pub const REQUIRED: &str = "Required";
pub const NOT_A_STRING: &str = "Should be a string";
pub const NOT_A_STRING_LIST: &str = "Should be a list of strings";
pub const NOT_AN_OBJECT: &str = "Should be an object";

/// 원본 JSON 으로부터 검증된 타입을 만들어내는 스키마
pub trait Schema: Sized {
    /// 필드를 평가합니다. 하나라도 실패하면 `None`을 돌려주고 에러는 validator 에 남습니다.
    fn schema(root: &mut ObjectValidator<'_, '_>) -> Option<Self>;
}

/// 하나의 JSON 객체에 대한 필드 평가 컨텍스트
pub struct ObjectValidator<'v, 'e> {
    prefix: String,
    fields: &'v Map<String, Value>,
    errors: &'e mut FieldErrors,
}

impl<'v, 'e> ObjectValidator<'v, 'e> {
    fn new(prefix: String, fields: &'v Map<String, Value>, errors: &'e mut FieldErrors) -> Self {
        Self { prefix, fields, errors }
    }

    fn path(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.prefix, key)
        }
    }

    /// `null` 은 값이 없는 것으로 취급합니다.
    fn lookup(&self, key: &str) -> Option<&'v Value> {
        let fields: &'v Map<String, Value> = self.fields;
        fields.get(key).filter(|value| !value.is_null())
    }

    fn fail(&mut self, key: &str, message: impl Into<String>) {
        let path = self.path(key);
        self.errors.add(path, message);
    }

    fn check(&mut self, key: &str, value: &Value, rules: &[Rule]) -> Option<String> {
        let Some(raw) = value.as_str() else {
            self.fail(key, NOT_A_STRING);
            return None;
        };

        match rules::run(rules, raw.to_string()) {
            Ok(accepted) => Some(accepted),
            Err(message) => {
                self.fail(key, message);
                None
            }
        }
    }

    /// 반드시 있어야 하는 문자열 필드
    pub fn required(&mut self, key: &str, rules: &[Rule]) -> Option<String> {
        match self.lookup(key) {
            Some(value) => self.check(key, value, rules),
            None => {
                self.fail(key, REQUIRED);
                None
            }
        }
    }

    /// 없어도 되는 문자열 필드. 없으면 `Some(None)`, 있으면 규칙을 그대로 적용합니다.
    pub fn optional(&mut self, key: &str, rules: &[Rule]) -> Option<Option<String>> {
        match self.lookup(key) {
            Some(value) => self.check(key, value, rules).map(Some),
            None => Some(None),
        }
    }

    /// 자유 형식 문자열 목록. 없으면 빈 목록입니다.
    pub fn string_list(&mut self, key: &str) -> Option<Vec<String>> {
        let Some(value) = self.lookup(key) else {
            return Some(Vec::new());
        };

        let strings = value.as_array().and_then(|items| {
            items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
        });

        if strings.is_none() {
            self.fail(key, NOT_A_STRING_LIST);
        }
        strings
    }

    /// 중첩 객체 필드. 내부 필드의 경로는 `key.field` 형태가 됩니다.
    pub fn nested<T, F>(&mut self, key: &str, build: F) -> Option<T>
    where
        F: FnOnce(&mut ObjectValidator<'v, '_>) -> Option<T>,
    {
        match self.lookup(key) {
            Some(Value::Object(fields)) => {
                let prefix = self.path(key);
                let mut nested = ObjectValidator::new(prefix, fields, &mut *self.errors);
                build(&mut nested)
            }
            Some(_) => {
                self.fail(key, NOT_AN_OBJECT);
                None
            }
            None => {
                self.fail(key, REQUIRED);
                None
            }
        }
    }
}

/// 이미 JSON 으로 해석된 문서를 스키마로 검증합니다.
///
/// 최상위가 객체가 아니면 빈 객체로 보고 평가하므로, 봉투 키가 `Required`로 보고됩니다.
pub fn validate_document<T: Schema>(document: &Value) -> Result<T, PayloadError> {
    let empty = Map::new();
    let fields = document.as_object().unwrap_or(&empty);

    let mut errors = FieldErrors::default();
    let accepted = T::schema(&mut ObjectValidator::new(String::new(), fields, &mut errors));

    match accepted {
        Some(payload) if errors.is_empty() => Ok(payload),
        _ => Err(PayloadError::Invalid(errors)),
    }
}

/// 원본 본문을 해석하고 검증합니다.
///
/// JSON 으로 해석되지 않으면 스키마 평가 전에 `Malformed`로 끝납니다.
pub fn parse_payload<T: Schema>(body: &[u8]) -> Result<T, PayloadError> {
    let document: Value = serde_json::from_slice(body).map_err(|_| PayloadError::Malformed)?;
    validate_document(&document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    struct Signup {
        username: String,
        email: String,
        bio: Option<String>,
        tags: Vec<String>,
    }

    impl Schema for Signup {
        fn schema(root: &mut ObjectValidator<'_, '_>) -> Option<Self> {
            root.nested("user", |user| {
                let username = user.required("username", rules::USERNAME);
                let email = user.required("email", rules::EMAIL);
                let bio = user.optional("bio", rules::FREE_TEXT);
                let tags = user.string_list("tags");
                Some(Signup {
                    username: username?,
                    email: email?,
                    bio: bio?,
                    tags: tags?,
                })
            })
        }
    }

    #[test]
    fn test_accepts_valid_document() {
        let document = json!({ "user": { "username": "jake", "email": "jake@jake.jake", "tags": ["a"] } });

        let signup: Signup = validate_document(&document).unwrap();
        assert_eq!(
            signup,
            Signup {
                username: "jake".to_string(),
                email: "jake@jake.jake".to_string(),
                bio: None,
                tags: vec!["a".to_string()],
            }
        );
    }

    #[test]
    fn test_collects_every_failing_field() {
        let document = json!({ "user": { "username": "ab", "email": "bad", "tags": [1] } });

        let Err(PayloadError::Invalid(errors)) = validate_document::<Signup>(&document) else {
            panic!("expected field errors");
        };
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("user.username"), Some(&["Minimum length is 3".to_string()][..]));
        assert_eq!(errors.get("user.email"), Some(&["Not a valid email".to_string()][..]));
        assert_eq!(errors.get("user.tags"), Some(&[NOT_A_STRING_LIST.to_string()][..]));
    }

    #[test]
    fn test_missing_and_mistyped_fields() {
        let document = json!({ "user": { "username": 42, "bio": null } });

        let Err(PayloadError::Invalid(errors)) = validate_document::<Signup>(&document) else {
            panic!("expected field errors");
        };
        assert_eq!(errors.get("user.username"), Some(&[NOT_A_STRING.to_string()][..]));
        assert_eq!(errors.get("user.email"), Some(&[REQUIRED.to_string()][..]));
        assert_eq!(errors.get("user.bio"), None);
    }

    #[test]
    fn test_optional_field_is_validated_when_present() {
        let document = json!({ "user": { "username": "jake", "email": "jake@jake.jake", "bio": 7 } });

        let Err(PayloadError::Invalid(errors)) = validate_document::<Signup>(&document) else {
            panic!("expected field errors");
        };
        assert_eq!(errors.paths().collect::<Vec<_>>(), vec!["user.bio"]);
    }

    #[test]
    fn test_missing_envelope() {
        for document in [json!({}), json!([1, 2]), json!({ "user": "jake" })] {
            let Err(PayloadError::Invalid(errors)) = validate_document::<Signup>(&document) else {
                panic!("expected field errors");
            };
            assert_eq!(errors.paths().collect::<Vec<_>>(), vec!["user"]);
        }
    }

    #[test]
    fn test_malformed_body_short_circuits() {
        assert_eq!(parse_payload::<Signup>(b"{\"user\":"), Err(PayloadError::Malformed));
        assert_eq!(parse_payload::<Signup>(b""), Err(PayloadError::Malformed));
    }
}
