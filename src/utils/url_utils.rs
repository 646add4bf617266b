// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 将可能为相对路径的URL转换为绝对路径URL
pub fn resolve_url(base_url: &Url, path: &str) -> Result<Url, ParseError> {
    base_url.join(path)
}

/// 将裸域名规范化为可抓取的种子URL
///
/// 没有协议前缀的输入统一补上 `https://`。
pub fn normalize_seed(seed: &str) -> Result<Url, ParseError> {
    if seed.starts_with("http://") || seed.starts_with("https://") {
        Url::parse(seed)
    } else {
        Url::parse(&format!("https://{}", seed))
    }
}

/// 判断URL的主机名是否属于目标域
pub fn is_same_domain(url: &Url, domain: &str) -> bool {
    url.host_str()
        .map(|host| host.eq_ignore_ascii_case(domain))
        .unwrap_or(false)
}

/// 从域名推导默认公司名
///
/// 取域名的第一个标签并将首字母大写，例如 `acme.com` -> `Acme`。
pub fn company_name_from_domain(domain: &str) -> String {
    let label = domain.split('.').next().unwrap_or(domain);
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
