// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// 网站提取的联系人记录
///
/// 仅由团队页结构化提取产生；缺少职位或邮箱的部分记录也是有效的。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedContact {
    /// 名
    pub first_name: String,
    /// 姓，名字中没有空格时为空字符串
    pub last_name: String,
    /// 职位（可选）
    pub title: Option<String>,
    /// 所属公司
    pub company: String,
    /// 邮箱（可选）
    pub email: Option<String>,
    /// 数据来源，固定为 "website"
    pub source: String,
}

/// 页面角色枚举
///
/// 一次爬取内每种角色只保留第一个命中的URL。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageRole {
    /// 团队页
    Team,
    /// 联系页
    Contact,
    /// 关于页
    About,
}

/// 域级抓取信号
///
/// 一次爬取对应一个实例，由提取器在所有页面上累积填充。
/// 集合字段使用有序容器，序列化结果天然去重且确定有序。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSignals {
    /// 公司名称
    pub company: String,
    /// 目标域名
    pub domain: String,
    /// 提取到的联系人，按发现顺序排列
    pub contacts: Vec<ExtractedContact>,
    /// 团队页URL（首个命中）
    pub team_page_url: Option<String>,
    /// 联系页URL（首个命中）
    pub contact_page_url: Option<String>,
    /// 关于页URL（首个命中）
    pub about_page_url: Option<String>,
    /// 社交平台链接，每个平台保留首个命中
    pub social_links: BTreeMap<String, String>,
    /// 发现的邮箱，统一小写去重
    pub emails: BTreeSet<String>,
    /// 发现的电话号码
    pub phone_numbers: BTreeSet<String>,
}

impl DomainSignals {
    /// 创建一次爬取的空信号集
    pub fn new(company: &str, domain: &str) -> Self {
        Self {
            company: company.to_string(),
            domain: domain.to_string(),
            ..Default::default()
        }
    }

    /// 查询某角色当前记录的URL
    pub fn role_url(&self, role: PageRole) -> Option<&str> {
        match role {
            PageRole::Team => self.team_page_url.as_deref(),
            PageRole::Contact => self.contact_page_url.as_deref(),
            PageRole::About => self.about_page_url.as_deref(),
        }
    }

    /// 记录某角色的URL，仅在尚未记录时生效
    pub fn tag_role(&mut self, role: PageRole, url: &str) {
        let slot = match role {
            PageRole::Team => &mut self.team_page_url,
            PageRole::Contact => &mut self.contact_page_url,
            PageRole::About => &mut self.about_page_url,
        };
        if slot.is_none() {
            *slot = Some(url.to_string());
        }
    }
}
