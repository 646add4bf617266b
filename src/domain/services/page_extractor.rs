// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::signals::{DomainSignals, ExtractedContact, PageRole};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// 页面角色的URL模式表
///
/// 每种角色在一次爬取内只保留第一个命中的URL。
const ROLE_PATTERNS: &[(PageRole, &[&str])] = &[
    (
        PageRole::Team,
        &["/team", "/about-us/team", "/people", "/our-team", "/staff"],
    ),
    (PageRole::Contact, &["/contact", "/contact-us", "/get-in-touch"]),
    (PageRole::About, &["/about", "/about-us", "/company"]),
];

/// 社交平台的主机名模式表
const SOCIAL_PATTERNS: &[(&str, &str)] = &[
    ("linkedin", "linkedin.com"),
    ("twitter", "twitter.com"),
    ("facebook", "facebook.com"),
    ("instagram", "instagram.com"),
];

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap());

/// 团队成员容器的类名启发式
const MEMBER_CLASS_HINTS: &[&str] = &["team", "member", "employee", "staff", "profile"];

/// 提取服务
///
/// 对单个已抓取页面进行角色分类并提取联系信号。
pub struct PageExtractor;

impl PageExtractor {
    /// 分类并提取一个页面
    ///
    /// 页面角色按URL判定；邮箱、电话和社交链接在所有页面上提取；
    /// 结构化联系人仅在团队页上提取。
    ///
    /// # 参数
    ///
    /// * `html_content` - 页面原始HTML
    /// * `current_url` - 当前页面URL
    /// * `signals` - 被累积填充的域信号
    pub fn classify_and_extract(html_content: &str, current_url: &str, signals: &mut DomainSignals) {
        let document = Html::parse_document(html_content);
        let url_lower = current_url.to_lowercase();

        for (role, patterns) in ROLE_PATTERNS {
            if signals.role_url(*role).is_none()
                && patterns.iter().any(|p| url_lower.contains(p))
            {
                signals.tag_role(*role, current_url);
            }
        }

        Self::extract_contact_info(&document, signals);
        Self::extract_social_links(&document, signals);

        if signals.role_url(PageRole::Team) == Some(current_url) {
            Self::extract_team_members(&document, signals);
        }
    }

    /// 从页面文本中提取邮箱与电话号码
    fn extract_contact_info(document: &Html, signals: &mut DomainSignals) {
        let content: String = document.root_element().text().collect::<Vec<_>>().join(" ");

        for m in EMAIL_REGEX.find_iter(&content) {
            signals.emails.insert(m.as_str().to_lowercase());
        }

        for m in PHONE_REGEX.find_iter(&content) {
            signals.phone_numbers.insert(m.as_str().to_string());
        }
    }

    /// 提取社交平台链接，每个平台只保留首个命中
    fn extract_social_links(document: &Html, signals: &mut DomainSignals) {
        let selector = Selector::parse("a[href]").expect("static selector");

        for element in document.select(&selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            let href_lower = href.to_lowercase();
            for (platform, pattern) in SOCIAL_PATTERNS {
                if href_lower.contains(pattern) {
                    signals
                        .social_links
                        .entry(platform.to_string())
                        .or_insert_with(|| href.to_string());
                    break;
                }
            }
        }
    }

    /// 从团队页中提取结构化联系人
    ///
    /// 没有可识别姓名的容器被跳过而不是报错。
    fn extract_team_members(document: &Html, signals: &mut DomainSignals) {
        let primary =
            Selector::parse(".team-member, .employee, .staff, .person, .profile").expect("static selector");

        let mut containers: Vec<ElementRef> = document.select(&primary).collect();

        if containers.is_empty() {
            // Fall back to generic containers whose class mentions a member keyword
            let generic = Selector::parse("div, li").expect("static selector");
            containers = document
                .select(&generic)
                .filter(|el| {
                    el.value().attr("class").is_some_and(|class| {
                        let class_lower = class.to_lowercase();
                        MEMBER_CLASS_HINTS.iter().any(|hint| class_lower.contains(hint))
                    })
                })
                .collect();
        }

        let name_selector = Selector::parse("h2, h3, h4, strong, b").expect("static selector");
        let title_selector = Selector::parse("p").expect("static selector");
        let mailto_selector = Selector::parse("a[href^=\"mailto:\"]").expect("static selector");

        for container in containers {
            let name = container
                .select(&name_selector)
                .next()
                .map(|el| el.text().collect::<Vec<_>>().join(" ").trim().to_string())
                .unwrap_or_default();

            if name.is_empty() {
                continue;
            }

            let title = container
                .select(&title_selector)
                .map(|el| el.text().collect::<Vec<_>>().join(" ").trim().to_string())
                .find(|text| !text.is_empty() && *text != name && text.len() < 100);

            let email = container
                .select(&mailto_selector)
                .next()
                .and_then(|el| el.value().attr("href"))
                .map(|href| href.trim_start_matches("mailto:").trim().to_lowercase());

            if let Some(email) = &email {
                signals.emails.insert(email.clone());
            }

            let mut parts = name.splitn(2, ' ');
            let first_name = parts.next().unwrap_or_default().to_string();
            let last_name = parts.next().unwrap_or_default().to_string();

            signals.contacts.push(ExtractedContact {
                first_name,
                last_name,
                title,
                company: signals.company.clone(),
                email,
                source: "website".to_string(),
            });
        }
    }
}
