use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 校验分配/花名册中的邮箱列表，返回第一个非法条目
pub fn validate_emails(emails: &[String]) -> Result<(), String> {
    for email in emails {
        if validate_email(email).is_err() {
            return Err(format!("Invalid email address: {email}"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("student@example.com").is_ok());
        assert!(validate_email("first.last+tag@school.edu").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_validate_emails_reports_offender() {
        let emails = vec!["ok@example.com".to_string(), "broken".to_string()];
        let err = validate_emails(&emails).unwrap_err();
        assert!(err.contains("broken"));

        assert!(validate_emails(&["a@b.com".to_string()]).is_ok());
        assert!(validate_emails(&[]).is_ok());
    }
}
