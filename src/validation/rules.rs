//! 필드 단위 검증 규칙
//!
//! 규칙은 데이터입니다. 한 필드의 규칙 목록은 선언 순서대로 논리곱(AND)으로 평가되며,
//! 처음 실패한 규칙의 메시지 하나만 그 필드의 에러가 됩니다. 모든 규칙을 통과하면
//! (정규화되었을 수 있는) 값이 채택됩니다.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateLength;

/// `local@domain.tld` 형태의 느슨한 이메일 패턴
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// 앞뒤 공백 제거 (항상 통과)
    Trim,
    /// 최소 글자 수 (유니코드 문자 기준)
    MinLength(u64),
    /// 문자와 숫자만 허용
    Alphanumeric,
    /// `local@domain.tld` 형태
    Email,
}

impl Rule {
    /// 규칙을 적용해 채택된 값 또는 에러 메시지를 돌려줍니다.
    pub fn apply(self, value: String) -> Result<String, String> {
        match self {
            Rule::Trim => Ok(value.trim().to_string()),
            Rule::MinLength(min) => {
                if value.validate_length(Some(min), None, None) {
                    Ok(value)
                } else {
                    Err(format!("Minimum length is {}", min))
                }
            }
            Rule::Alphanumeric => {
                if value.chars().all(char::is_alphanumeric) {
                    Ok(value)
                } else {
                    Err("Should be alphanumeric".to_string())
                }
            }
            Rule::Email => {
                if EMAIL_REGEX.is_match(&value) {
                    Ok(value)
                } else {
                    Err("Not a valid email".to_string())
                }
            }
        }
    }
}

/// 규칙 목록을 선언 순서대로 적용하고, 첫 실패에서 멈춥니다.
pub fn run(rules: &[Rule], value: String) -> Result<String, String> {
    rules.iter().try_fold(value, |accepted, rule| rule.apply(accepted))
}

pub const EMAIL: &[Rule] = &[Rule::Trim, Rule::Email];
pub const USERNAME: &[Rule] = &[Rule::Trim, Rule::MinLength(3), Rule::Alphanumeric];
pub const PASSWORD: &[Rule] = &[Rule::MinLength(5)];
/// 검증하지 않는 자유 텍스트
pub const FREE_TEXT: &[Rule] = &[];
