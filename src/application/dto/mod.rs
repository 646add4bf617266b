// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 抓取管线请求
pub mod pipeline_request;

/// 邮箱推断请求
pub mod predict_request;

pub use pipeline_request::CrawlPipelineRequest;
pub use predict_request::PredictRequest;
