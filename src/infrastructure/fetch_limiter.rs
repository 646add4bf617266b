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

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// 抓取并发限流器
///
/// 一个全局信号量限制进程内的总并发抓取数，每个域名再有一个独立的
/// 信号量限制对单一站点的并发，避免对目标站点造成压力。
#[derive(Clone, Debug)]
pub struct FetchLimiter {
    /// 全局并发信号量
    global: Arc<Semaphore>,
    /// 存储每个域名的信号量
    per_domain: DashMap<String, Arc<Semaphore>>,
    /// 每域名默认并发数
    domain_permits: usize,
}

impl FetchLimiter {
    /// 创建一个新的FetchLimiter实例
    ///
    /// # 参数
    ///
    /// * `global_permits` - 进程内总并发许可数
    /// * `domain_permits` - 每个域名的并发许可数
    ///
    /// # 返回值
    ///
    /// 返回新的FetchLimiter实例
    pub fn new(global_permits: usize, domain_permits: usize) -> Self {
        Self {
            global: Arc::new(Semaphore::new(global_permits)),
            per_domain: DashMap::new(),
            domain_permits,
        }
    }

    /// 获取一次抓取所需的许可
    ///
    /// 先获取全局许可，再获取域名许可；两个许可都随返回值释放。
    ///
    /// # 参数
    ///
    /// * `domain` - 目标域名
    ///
    /// # 返回值
    ///
    /// 返回全局与域名两个信号量许可
    pub async fn acquire(&self, domain: &str) -> (OwnedSemaphorePermit, OwnedSemaphorePermit) {
        // Semaphores are never closed, acquire cannot fail
        let global = self.global.clone().acquire_owned().await.unwrap();
        let domain = self
            .get_or_create(domain)
            .acquire_owned()
            .await
            .unwrap();
        (global, domain)
    }

    /// 获取或创建指定域名的信号量
    fn get_or_create(&self, domain: &str) -> Arc<Semaphore> {
        self.per_domain
            .entry(domain.to_lowercase())
            .or_insert_with(|| Arc::new(Semaphore::new(self.domain_permits)))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_per_domain_limit_enforced() {
        let limiter = FetchLimiter::new(10, 1);
        let held = limiter.acquire("example.com").await;

        // Same domain is exhausted, a different domain still has permits
        assert!(tokio::time::timeout(
            std::time::Duration::from_millis(50),
            limiter.acquire("example.com")
        )
        .await
        .is_err());
        let _other = limiter.acquire("other.com").await;

        drop(held);
        let _again = limiter.acquire("example.com").await;
    }

    #[tokio::test]
    async fn test_global_limit_spans_domains() {
        let limiter = FetchLimiter::new(1, 5);
        let _held = limiter.acquire("a.com").await;
        assert!(tokio::time::timeout(
            std::time::Duration::from_millis(50),
            limiter.acquire("b.com")
        )
        .await
        .is_err());
    }

    #[tokio::test]
    async fn test_domain_is_case_insensitive() {
        let limiter = FetchLimiter::new(10, 1);
        let _held = limiter.acquire("Example.COM").await;
        assert!(tokio::time::timeout(
            std::time::Duration::from_millis(50),
            limiter.acquire("example.com")
        )
        .await
        .is_err());
    }
}
