// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 基础设施层
//!
//! 并发控制与外部回调投递。

/// 抓取并发限流
pub mod fetch_limiter;

/// 结果回调投递
pub mod callback;
