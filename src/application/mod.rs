// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 应用层
//!
//! 请求 DTO 与线索发现管线的编排逻辑。

/// 请求与响应DTO
pub mod dto;

/// 线索发现管线
pub mod pipeline;
