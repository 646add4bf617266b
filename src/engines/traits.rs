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

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 非成功状态码
    #[error("Unexpected status code: {0}")]
    BadStatus(u16),
}

impl FetchError {
    /// 判断错误是否为瞬时错误
    ///
    /// 瞬时错误（超时、连接失败、服务端错误）值得告警；缺页之类的
    /// 确定性失败只需调试日志。两者都只跳过当前页面。
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::RequestFailed(e) => {
                e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
            }
            FetchError::BadStatus(status) => *status >= 500 || *status == 429,
        }
    }
}

/// 抓取请求
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// 目标URL
    pub url: String,
    /// 超时时间
    pub timeout: Duration,
}

/// 抓取到的页面
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// 页面URL
    pub url: String,
    /// HTTP状态码
    pub status_code: u16,
    /// 原始HTML内容
    pub content: String,
}

/// 页面抓取引擎特质
///
/// 爬虫的唯一悬挂点；其余阶段均为纯内存计算。
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 执行一次HTTP GET抓取
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchedPage, FetchError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
