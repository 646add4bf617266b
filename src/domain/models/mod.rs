// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 线索（潜在客户）属性与评分解释
pub mod lead;

/// 邮箱格式与预测结果
pub mod prediction;

/// 域级抓取信号
pub mod signals;
