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

use crate::config::settings::CrawlerSettings;
use crate::domain::models::signals::DomainSignals;
use crate::domain::services::page_extractor::PageExtractor;
use crate::engines::traits::{FetchRequest, PageFetcher};
use crate::infrastructure::fetch_limiter::FetchLimiter;
use crate::utils::url_utils;
use rand::Rng;
use scraper::{Html, Selector};
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;

/// 单次爬取任务的参数
#[derive(Debug, Clone)]
pub struct CrawlTask {
    /// 起始URL
    pub seed: String,
    /// 目标域名；只有主机名等于该域的链接才会入队
    pub domain: String,
    /// 公司名称
    pub company_name: String,
    /// 最大页面数
    pub max_pages: usize,
    /// 单个请求的超时时间
    pub timeout: Duration,
    /// 整个爬取的墙钟预算
    pub budget: Duration,
}

/// URL前沿
///
/// 显式工作队列加去重集合；一个URL最多入队一次，
/// 因此循环链接不会导致无界增长。
struct Frontier {
    queue: VecDeque<String>,
    seen: HashSet<String>,
}

impl Frontier {
    fn new(seed: String) -> Self {
        let mut seen = HashSet::new();
        seen.insert(seed.clone());
        Self {
            queue: VecDeque::from([seed]),
            seen,
        }
    }

    fn pop(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    /// 入队一个尚未见过的URL
    fn push(&mut self, url: String) {
        if self.seen.insert(url.clone()) {
            self.queue.push_back(url);
        }
    }
}

/// 域内广度优先爬虫
///
/// 一次爬取内串行处理前沿，页面顺序决定角色分类的首个命中；
/// 多个爬取之间只共享出站请求限流器。
pub struct FrontierCrawler {
    fetcher: Arc<dyn PageFetcher>,
    limiter: Arc<FetchLimiter>,
    settings: CrawlerSettings,
}

impl FrontierCrawler {
    /// 创建新的爬虫实例
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        limiter: Arc<FetchLimiter>,
        settings: CrawlerSettings,
    ) -> Self {
        Self {
            fetcher,
            limiter,
            settings,
        }
    }

    /// 执行一次域内爬取
    ///
    /// 单页失败只跳过该页；种子完全不可达时返回全空的信号集，
    /// 从不向调用方抛出硬错误。
    ///
    /// # 参数
    ///
    /// * `task` - 爬取任务参数
    ///
    /// # 返回值
    ///
    /// 本次爬取积累的域信号，可能为空
    pub async fn crawl(&self, task: &CrawlTask) -> DomainSignals {
        info!(domain = %task.domain, max_pages = task.max_pages, "Starting website crawl");

        let mut signals = DomainSignals::new(&task.company_name, &task.domain);
        let mut frontier = Frontier::new(task.seed.clone());
        let mut visited: HashSet<String> = HashSet::new();
        let started = Instant::now();

        while let Some(current_url) = frontier.pop() {
            if visited.len() >= task.max_pages {
                break;
            }
            if started.elapsed() >= task.budget {
                info!(domain = %task.domain, "Crawl budget expired, returning partial signals");
                break;
            }

            if !visited.insert(current_url.clone()) {
                continue;
            }

            if visited.len() > 1 {
                self.politeness_delay().await;
            }

            let request = FetchRequest {
                url: current_url.clone(),
                timeout: task.timeout,
            };

            let page = {
                let _permits = self.limiter.acquire(&task.domain).await;
                self.fetcher.fetch(&request).await
            };

            let page = match page {
                Ok(page) => page,
                Err(e) => {
                    // A failed page stays visited but contributes no signals
                    if e.is_transient() {
                        warn!(url = %current_url, error = %e, "Transient fetch failure, skipping page");
                    } else {
                        debug!(url = %current_url, error = %e, "Page not fetchable, skipping");
                    }
                    continue;
                }
            };

            let links = Self::process_page(&page.content, &current_url, &task.domain, &mut signals);
            debug!(url = %current_url, discovered = links.len(), "Processed page");

            for link in links {
                frontier.push(link);
            }
        }

        info!(
            domain = %task.domain,
            pages = visited.len(),
            emails = signals.emails.len(),
            contacts = signals.contacts.len(),
            "Website crawl complete"
        );

        signals
    }

    /// 提取并过滤页面中的站内链接
    ///
    /// 同时将页面交给提取器累积信号。单独拆出同步函数，
    /// 避免跨越悬挂点持有HTML文档。
    fn process_page(
        html_content: &str,
        current_url: &str,
        domain: &str,
        signals: &mut DomainSignals,
    ) -> Vec<String> {
        PageExtractor::classify_and_extract(html_content, current_url, signals);

        let Ok(base) = Url::parse(current_url) else {
            return Vec::new();
        };

        let document = Html::parse_document(html_content);
        let selector = Selector::parse("a[href]").expect("static selector");
        let mut links = Vec::new();

        for element in document.select(&selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            // Ignore fragment identifiers, mailto and javascript links
            if href.starts_with('#') || href.starts_with("mailto:") || href.starts_with("javascript:")
            {
                continue;
            }

            if let Ok(url) = url_utils::resolve_url(&base, href) {
                if (url.scheme() == "http" || url.scheme() == "https")
                    && url_utils::is_same_domain(&url, domain)
                {
                    // Remove fragment to improve deduplication
                    let mut url_clean = url;
                    url_clean.set_fragment(None);
                    links.push(url_clean.to_string());
                }
            }
        }

        links
    }

    /// 同一爬取内相邻请求之间的随机礼貌延迟
    async fn politeness_delay(&self) {
        let min = self.settings.min_fetch_delay_ms;
        let max = self.settings.max_fetch_delay_ms.max(min);
        let delay_ms = if max > min {
            rand::rng().random_range(min..=max)
        } else {
            min
        };
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
    }
}

#[cfg(test)]
#[path = "crawler_test.rs"]
mod tests;
