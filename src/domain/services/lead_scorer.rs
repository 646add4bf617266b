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

use crate::domain::models::lead::{LeadAttributes, LeadScoreExplanation, ScoreFactor};
use serde_json::json;
use std::collections::BTreeMap;

/// 所有线索的基础分
const BASE_SCORE: i32 = 60;

/// 职位关键词表，按资历降序排列；首个子串命中生效
const TITLE_SCORES: &[(&str, i32)] = &[
    ("ceo", 20),
    ("cto", 18),
    ("coo", 18),
    ("cfo", 16),
    ("vp", 15),
    ("head", 14),
    ("director", 13),
    ("manager", 10),
    ("lead", 8),
    ("senior", 6),
    ("engineer", 5),
    ("developer", 5),
    ("specialist", 4),
    ("coordinator", 3),
    ("assistant", 2),
];

/// 公司规模区间表，精确匹配
const SIZE_SCORES: &[(&str, i32)] = &[
    ("1-10", 2),
    ("11-50", 5),
    ("51-200", 10),
    ("201-500", 15),
    ("501-1000", 18),
    ("1001+", 20),
];

/// 行业关键词表，按加分降序排列；任一关键词子串命中生效
const INDUSTRY_SCORES: &[(&[&str], i32)] = &[
    (&["tech", "software"], 10),
    (&["finance", "banking"], 8),
    (&["health", "medical"], 7),
    (&["education"], 5),
];

/// 联系方式完整性加分
const CONTACT_POINTS: i32 = 5;

/// 重要性超过该阈值的因子才生成解释语句
const REASON_THRESHOLD: f64 = 0.2;

/// 线索质量评分器
///
/// 确定性的纯函数：相同输入总是产生相同的评分与解释文本。
pub struct LeadScorer;

impl LeadScorer {
    /// 对一条线索评分
    ///
    /// 从基础分出发，叠加四条互不重叠的规则，最终钳制在 [0,100]。
    ///
    /// # 参数
    ///
    /// * `lead` - 线索属性记录
    ///
    /// # 返回值
    ///
    /// 评分与按重要性排列的可读解释
    pub fn score(lead: &LeadAttributes) -> LeadScoreExplanation {
        let mut score = BASE_SCORE;
        let mut factors: BTreeMap<String, ScoreFactor> = BTreeMap::new();

        // 1. Title seniority, first matching keyword wins
        if let Some(title) = &lead.title {
            let title_lower = title.to_lowercase();
            if let Some((_, points)) = TITLE_SCORES
                .iter()
                .find(|(keyword, _)| title_lower.contains(keyword))
            {
                score += points;
                factors.insert(
                    "title".to_string(),
                    ScoreFactor {
                        value: json!(title),
                        importance: 0.3,
                    },
                );
            }
        }

        // 2. Company size bucket, exact match
        if let Some(size) = &lead.company_size {
            if let Some((_, points)) = SIZE_SCORES.iter().find(|(bucket, _)| bucket == size) {
                score += points;
                factors.insert(
                    "company_size".to_string(),
                    ScoreFactor {
                        value: json!(size),
                        importance: 0.25,
                    },
                );
            }
        }

        // 3. Industry keyword, substring match
        if let Some(industry) = &lead.industry {
            let industry_lower = industry.to_lowercase();
            if let Some((_, points)) = INDUSTRY_SCORES
                .iter()
                .find(|(keywords, _)| keywords.iter().any(|k| industry_lower.contains(k)))
            {
                score += points;
            }
            factors.insert(
                "industry".to_string(),
                ScoreFactor {
                    value: json!(industry),
                    importance: 0.2,
                },
            );
        }

        // 4. Contact completeness
        if lead.email.is_some() {
            score += CONTACT_POINTS;
            factors.insert(
                "has_email".to_string(),
                ScoreFactor {
                    value: json!(true),
                    importance: 0.15,
                },
            );
        }
        if lead.linkedin_url.is_some() {
            score += CONTACT_POINTS;
            factors.insert(
                "has_linkedin".to_string(),
                ScoreFactor {
                    value: json!(true),
                    importance: 0.1,
                },
            );
        }

        let score = score.clamp(0, 100) as u8;
        let reasons = Self::build_reasons(score, lead, &factors);

        LeadScoreExplanation {
            score,
            reasons,
            factors,
        }
    }

    /// 由分数区间和主要因子生成解释语句
    fn build_reasons(
        score: u8,
        lead: &LeadAttributes,
        factors: &BTreeMap<String, ScoreFactor>,
    ) -> Vec<String> {
        let mut reasons = Vec::new();

        if score >= 80 {
            reasons.push("High-value lead based on role and company profile".to_string());
        } else if score >= 60 {
            reasons.push("Good potential lead with moderate fit".to_string());
        } else {
            reasons.push("Average fit with target criteria".to_string());
        }

        // One templated sentence per significant factor, ordered by importance
        let mut significant: Vec<(&String, &ScoreFactor)> = factors
            .iter()
            .filter(|(_, factor)| factor.importance > REASON_THRESHOLD)
            .collect();
        significant.sort_by(|a, b| {
            b.1.importance
                .partial_cmp(&a.1.importance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        for (name, _) in significant {
            match name.as_str() {
                "title" => {
                    if let Some(title) = &lead.title {
                        reasons.push(format!("Decision-making role: {}", title));
                    }
                }
                "company_size" => {
                    if let Some(size) = &lead.company_size {
                        reasons.push(format!("Company size ({}) matches target profile", size));
                    }
                }
                _ => {}
            }
        }

        reasons
    }
}
