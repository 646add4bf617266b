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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含爬虫、并发控制和回调投递等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 爬虫配置
    pub crawler: CrawlerSettings,
    /// 并发控制配置
    pub concurrency: ConcurrencySettings,
    /// 回调配置
    pub callback: CallbackSettings,
}

/// 爬虫配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerSettings {
    /// 单次爬取的默认最大页面数
    pub default_max_pages: usize,
    /// 单个请求的默认超时时间（秒）
    pub default_timeout_secs: u64,
    /// 整个爬取任务的墙钟预算（秒）
    pub crawl_budget_secs: u64,
    /// 同一爬取内相邻请求之间的最小礼貌延迟（毫秒）
    pub min_fetch_delay_ms: u64,
    /// 同一爬取内相邻请求之间的最大礼貌延迟（毫秒）
    pub max_fetch_delay_ms: u64,
}

/// 并发控制配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ConcurrencySettings {
    /// 全局并发出站请求上限
    pub max_concurrent_fetches: usize,
    /// 单个目标域的并发请求上限
    pub per_domain_limit: usize,
}

/// 回调配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackSettings {
    /// 回调签名密钥
    pub secret: String,
    /// 回调投递超时时间（秒）
    pub timeout_secs: u64,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Default Crawler settings
            .set_default("crawler.default_max_pages", 20)?
            .set_default("crawler.default_timeout_secs", 30)?
            .set_default("crawler.crawl_budget_secs", 300)?
            .set_default("crawler.min_fetch_delay_ms", 250)?
            .set_default("crawler.max_fetch_delay_ms", 750)?
            // Default Concurrency settings
            .set_default("concurrency.max_concurrent_fetches", 10)?
            .set_default("concurrency.per_domain_limit", 2)?
            // Default Callback settings
            .set_default("callback.secret", "your-secret-key")?
            .set_default("callback.timeout_secs", 10)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("LEADSCOUT").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
