// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 邮箱推断请求
///
/// 不触发抓取，直接基于已知邮箱样本推断候选邮箱。
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct PredictRequest {
    /// 目标联系人的名
    #[validate(length(min = 1, message = "First name cannot be empty"))]
    pub first_name: String,
    /// 目标联系人的姓
    #[validate(length(min = 1, message = "Last name cannot be empty"))]
    pub last_name: String,
    /// 公司域名
    #[validate(length(min = 1, message = "Company domain cannot be empty"))]
    pub company_domain: String,
    /// 该域名下已知的真实邮箱样本
    #[serde(default)]
    pub known_emails: Vec<String>,
}
