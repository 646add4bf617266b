// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 邮箱本地部分格式枚举
///
/// 封闭的九种命名约定，描述本地部分如何由姓名构造。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmailFormat {
    /// `first.last`
    #[serde(rename = "first.last")]
    FirstDotLast,
    /// `firstlast`
    #[serde(rename = "firstlast")]
    FirstLast,
    /// `first_last`
    #[serde(rename = "first_last")]
    FirstUnderscoreLast,
    /// `flast`
    #[serde(rename = "flast")]
    InitialLast,
    /// `first`
    #[serde(rename = "first")]
    FirstOnly,
    /// `first.l`
    #[serde(rename = "first.l")]
    FirstDotInitial,
    /// `f.last`
    #[serde(rename = "f.last")]
    InitialDotLast,
    /// `lastfirst`
    #[serde(rename = "lastfirst")]
    LastFirst,
    /// `first.last.initial`
    #[serde(rename = "first.last.initial")]
    FirstDotLastDotInitial,
}

impl EmailFormat {
    /// 所有格式，按无先验信息时的尝试顺序排列
    pub const ALL: [EmailFormat; 9] = [
        EmailFormat::FirstDotLast,
        EmailFormat::FirstLast,
        EmailFormat::FirstUnderscoreLast,
        EmailFormat::InitialLast,
        EmailFormat::FirstOnly,
        EmailFormat::FirstDotInitial,
        EmailFormat::InitialDotLast,
        EmailFormat::LastFirst,
        EmailFormat::FirstDotLastDotInitial,
    ];

    /// 按该格式由规范化后的姓名构造本地部分
    ///
    /// # 参数
    ///
    /// * `first` - 规范化后的名
    /// * `last` - 规范化后的姓
    ///
    /// # 返回值
    ///
    /// 构造出的本地部分字符串；空输入产生退化但格式合法的结果
    pub fn local_part(&self, first: &str, last: &str) -> String {
        let f_initial: String = first.chars().take(1).collect();
        let l_initial: String = last.chars().take(1).collect();
        match self {
            EmailFormat::FirstDotLast => format!("{}.{}", first, last),
            EmailFormat::FirstLast => format!("{}{}", first, last),
            EmailFormat::FirstUnderscoreLast => format!("{}_{}", first, last),
            EmailFormat::InitialLast => format!("{}{}", f_initial, last),
            EmailFormat::FirstOnly => first.to_string(),
            EmailFormat::FirstDotInitial => format!("{}.{}", first, l_initial),
            EmailFormat::InitialDotLast => format!("{}.{}", f_initial, last),
            EmailFormat::LastFirst => format!("{}{}", last, first),
            EmailFormat::FirstDotLastDotInitial => format!("{}.{}.{}", first, last, f_initial),
        }
    }
}

/// 将格式标签格式化为字符串表示
impl fmt::Display for EmailFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tag = match self {
            EmailFormat::FirstDotLast => "first.last",
            EmailFormat::FirstLast => "firstlast",
            EmailFormat::FirstUnderscoreLast => "first_last",
            EmailFormat::InitialLast => "flast",
            EmailFormat::FirstOnly => "first",
            EmailFormat::FirstDotInitial => "first.l",
            EmailFormat::InitialDotLast => "f.last",
            EmailFormat::LastFirst => "lastfirst",
            EmailFormat::FirstDotLastDotInitial => "first.last.initial",
        };
        write!(f, "{}", tag)
    }
}

/// 从字符串解析格式标签
impl FromStr for EmailFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first.last" => Ok(EmailFormat::FirstDotLast),
            "firstlast" => Ok(EmailFormat::FirstLast),
            "first_last" => Ok(EmailFormat::FirstUnderscoreLast),
            "flast" => Ok(EmailFormat::InitialLast),
            "first" => Ok(EmailFormat::FirstOnly),
            "first.l" => Ok(EmailFormat::FirstDotInitial),
            "f.last" => Ok(EmailFormat::InitialDotLast),
            "lastfirst" => Ok(EmailFormat::LastFirst),
            "first.last.initial" => Ok(EmailFormat::FirstDotLastDotInitial),
            _ => Err(()),
        }
    }
}

/// 邮箱命名约定分析结果
///
/// 无状态派生值，按需从域信号的邮箱集合重新计算，从不持久化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailPatternAnalysis {
    /// 占主导地位的格式
    pub primary_format: EmailFormat,
    /// 观察到的格式，按出现频率降序排列
    pub formats: Vec<EmailFormat>,
    /// 置信度，取值范围 [0,1]
    pub confidence: f64,
    /// 参与分析的样本数
    pub sample_size: usize,
}

impl EmailPatternAnalysis {
    /// 无已知邮箱时的固定先验
    ///
    /// 这是一个固定约定，不是计算得出的猜测。
    pub fn default_prior(sample_size: usize) -> Self {
        Self {
            primary_format: EmailFormat::FirstDotLast,
            formats: vec![EmailFormat::FirstDotLast, EmailFormat::FirstLast],
            confidence: 0.3,
            sample_size,
        }
    }
}

/// 单个候选邮箱预测
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictedEmail {
    /// 候选邮箱地址
    pub email: String,
    /// 使用的格式标签
    pub format: EmailFormat,
    /// 置信度，取值范围 [0,1]
    pub confidence: f64,
}
