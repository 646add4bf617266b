// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// 语法合法邮箱的锚定正则
static EMAIL_SYNTAX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// 一次性邮箱域名
const DISPOSABLE_DOMAINS: &[&str] = &[
    "mailinator.com",
    "tempmail.com",
    "temp-mail.org",
    "guerrillamail.com",
    "throwawaymail.com",
    "yopmail.com",
    "10minutemail.com",
];

/// 公共免费邮箱服务商域名
const FREE_PROVIDERS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "aol.com",
    "protonmail.com",
    "mail.com",
    "zoho.com",
    "icloud.com",
    "gmx.com",
];

/// 邮箱校验结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailValidation {
    /// 被校验的邮箱（小写化后）
    pub email: String,
    /// 语法是否合法
    pub valid: bool,
    /// 是否一次性邮箱域名
    pub disposable: bool,
    /// 是否公共免费服务商
    pub free_provider: bool,
    /// 语法合法且既非一次性也非免费服务商
    pub corporate: bool,
}

/// 邮箱语法与域名分类校验器
///
/// 纯离线校验，不做 MX 查询或 SMTP 探测。
pub struct EmailVerifier;

impl EmailVerifier {
    /// 校验单个邮箱
    ///
    /// # 参数
    ///
    /// * `email` - 待校验的地址，大小写不敏感
    ///
    /// # 返回值
    ///
    /// 语法与域名分类标志
    pub fn verify(email: &str) -> EmailValidation {
        let email = email.trim().to_lowercase();
        let valid = EMAIL_SYNTAX_REGEX.is_match(&email);

        let domain = email.rsplit_once('@').map(|(_, d)| d).unwrap_or("");
        let disposable = valid && DISPOSABLE_DOMAINS.contains(&domain);
        let free_provider = valid && FREE_PROVIDERS.contains(&domain);
        let corporate = valid && !disposable && !free_provider;

        EmailValidation {
            email,
            valid,
            disposable,
            free_provider,
            corporate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corporate_email() {
        let result = EmailVerifier::verify("Jane.Doe@Acme.com");
        assert_eq!(result.email, "jane.doe@acme.com");
        assert!(result.valid);
        assert!(!result.disposable);
        assert!(!result.free_provider);
        assert!(result.corporate);
    }

    #[test]
    fn test_free_provider_is_not_corporate() {
        let result = EmailVerifier::verify("someone@gmail.com");
        assert!(result.valid);
        assert!(result.free_provider);
        assert!(!result.corporate);
    }

    #[test]
    fn test_disposable_domain() {
        let result = EmailVerifier::verify("throwaway@mailinator.com");
        assert!(result.valid);
        assert!(result.disposable);
        assert!(!result.corporate);
    }

    #[test]
    fn test_invalid_syntax() {
        for email in ["not-an-email", "a@b", "a b@acme.com", "@acme.com", ""] {
            let result = EmailVerifier::verify(email);
            assert!(!result.valid, "expected invalid: {email:?}");
            assert!(!result.corporate);
        }
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let result = EmailVerifier::verify("  jane@acme.com  ");
        assert_eq!(result.email, "jane@acme.com");
        assert!(result.valid);
    }
}
