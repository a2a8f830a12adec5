//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_valid_string;
///
/// assert_eq!(is_valid_string("Hello"), true);
/// assert_eq!(is_valid_string("   "), false);
/// assert_eq!(is_valid_string(""), false);
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 로그 출력용으로 비밀 값을 가립니다.
///
/// 앞 4글자만 남기고 나머지는 `*`로 바꿉니다. 8글자 미만이면 전부 가립니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::mask_secret;
///
/// assert_eq!(mask_secret("eyJhbGciOiJIUzI1"), "eyJh************");
/// assert_eq!(mask_secret("short"), "*****");
/// ```
pub fn mask_secret(value: &str) -> String {
    let len = value.chars().count();
    if len < 8 {
        return "*".repeat(len);
    }

    value
        .chars()
        .enumerate()
        .map(|(i, c)| if i < 4 { c } else { '*' })
        .collect()
}
