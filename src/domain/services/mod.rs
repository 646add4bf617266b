// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 候选邮箱生成与排序
pub mod candidate_generator;

/// 域内广度优先爬虫
pub mod crawler;

/// 邮箱语法校验
pub mod email_verifier;

/// 线索质量评分
pub mod lead_scorer;

/// 页面分类与信号提取
pub mod page_extractor;

/// 邮箱命名约定分析
pub mod pattern_analyzer;
