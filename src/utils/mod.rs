// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 遥测工具
pub mod telemetry;

/// URL工具
pub mod url_utils;
