use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

/// 姓名字段的长度限制（学生与教师共用）
pub const PERSON_NAME_MIN: usize = 2;
pub const PERSON_NAME_MAX: usize = 30;

/// 空字符串或仅包含空白字符
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// 按字符数（而非字节数）校验长度，闭区间
pub fn validate_length(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email should be valid");
    }
    Ok(())
}

/// 校验必填的姓名字段，`label` 为错误信息中的字段名（如 "First name"）
pub fn validate_person_name(value: &str, label: &str) -> Result<(), String> {
    if is_blank(value) {
        return Err(format!("{label} is mandatory"));
    }
    if !validate_length(value, PERSON_NAME_MIN, PERSON_NAME_MAX) {
        return Err(format!(
            "{label} must be between {PERSON_NAME_MIN} and {PERSON_NAME_MAX} characters"
        ));
    }
    Ok(())
}
