// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 抓取管线请求
///
/// `domain` 是裸域名（如 `acme.com`），`seed_url` 缺失时由域名推导。
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CrawlPipelineRequest {
    /// 目标站点裸域名
    #[validate(custom(function = "validate_bare_domain"))]
    pub domain: String,
    /// 起始抓取地址，缺省为 `https://{domain}`
    #[validate(url)]
    pub seed_url: Option<String>,
    /// 公司名，缺省从域名推导
    pub company_name: Option<String>,
    /// 目标联系人的名，与 `last_name` 同时给出才会推断候选邮箱
    pub first_name: Option<String>,
    /// 目标联系人的姓
    pub last_name: Option<String>,
    /// 单次任务最多抓取的页面数
    #[validate(range(min = 1, max = 500))]
    pub max_pages: Option<usize>,
    /// 单页抓取超时秒数
    #[validate(range(min = 1, max = 120))]
    pub timeout_seconds: Option<u64>,
    /// 结果回调地址
    #[validate(url)]
    pub callback_url: Option<String>,
}

/// 校验裸域名：非空、含点、不带协议与路径
fn validate_bare_domain(domain: &str) -> Result<(), ValidationError> {
    if domain.trim().is_empty() {
        return Err(ValidationError::new("domain_empty"));
    }
    if !domain.contains('.') {
        return Err(ValidationError::new("domain_no_tld"));
    }
    if domain.contains("://") || domain.contains('/') {
        return Err(ValidationError::new("domain_not_bare"));
    }
    Ok(())
}
