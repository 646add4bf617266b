// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基于reqwest的抓取引擎
pub mod reqwest_engine;

/// 引擎特质与共享类型
pub mod traits;
