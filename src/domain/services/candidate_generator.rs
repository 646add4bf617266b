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

use crate::domain::models::prediction::{EmailFormat, PredictedEmail};

/// 每降一个排名，置信度乘以该衰减系数
const CONFIDENCE_DECAY: f64 = 0.8;

/// 候选邮箱生成器
///
/// 按给定格式列表逐一生成候选地址，置信度随排名几何衰减。
/// 返回顺序与输入格式列表一致，不做二次排序。
pub struct CandidateGenerator;

impl CandidateGenerator {
    /// 生成候选邮箱
    ///
    /// 姓名先做规范化：小写并去除 `[a-z0-9]` 以外的字符。
    /// 空姓名产生退化但格式合法的候选，由调用方负责预先校验。
    ///
    /// # 参数
    ///
    /// * `first_name` - 名
    /// * `last_name` - 姓
    /// * `domain` - 邮箱域名
    /// * `formats` - 已排序的格式列表
    /// * `base_confidence` - 上游分析的置信度
    ///
    /// # 返回值
    ///
    /// 与格式列表同序的候选邮箱列表
    pub fn generate(
        first_name: &str,
        last_name: &str,
        domain: &str,
        formats: &[EmailFormat],
        base_confidence: f64,
    ) -> Vec<PredictedEmail> {
        let first = Self::normalize_name(first_name);
        let last = Self::normalize_name(last_name);

        formats
            .iter()
            .enumerate()
            .map(|(rank, format)| {
                let local_part = format.local_part(&first, &last);
                let confidence = base_confidence * CONFIDENCE_DECAY.powi(rank as i32);
                PredictedEmail {
                    email: format!("{}@{}", local_part, domain),
                    format: *format,
                    confidence: (confidence * 100.0).round() / 100.0,
                }
            })
            .collect()
    }

    /// 规范化姓名为小写字母数字
    fn normalize_name(name: &str) -> String {
        name.to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect()
    }
}
