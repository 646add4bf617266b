// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 线索属性记录
///
/// 质量评分器的输入；所有可选字段缺失时仅得到基础分。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadAttributes {
    /// 名
    pub first_name: String,
    /// 姓
    pub last_name: String,
    /// 职位
    pub title: Option<String>,
    /// 所属公司
    pub company: Option<String>,
    /// 公司规模区间，如 "51-200"
    pub company_size: Option<String>,
    /// 所属行业
    pub industry: Option<String>,
    /// 邮箱
    pub email: Option<String>,
    /// LinkedIn主页链接
    pub linkedin_url: Option<String>,
    /// 所属公司的网站域名，批量邮箱推断时用于分组
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_domain: Option<String>,
    /// 推断得到的候选邮箱，仅在 `email` 缺失时回填
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_email: Option<String>,
    /// 推断邮箱的置信度
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_confidence: Option<f64>,
}

/// 单个评分因子的明细
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreFactor {
    /// 观察到的取值
    pub value: serde_json::Value,
    /// 重要性权重
    pub importance: f64,
}

/// 线索质量评分解释
///
/// 评分时派生，产生后不可变。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadScoreExplanation {
    /// 质量评分，取值范围 [0,100]
    pub score: u8,
    /// 可读的评分理由，按重要性排列
    pub reasons: Vec<String>,
    /// 因子名到明细的映射
    pub factors: BTreeMap<String, ScoreFactor>,
}
