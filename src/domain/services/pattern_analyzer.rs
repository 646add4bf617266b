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

use crate::domain::models::prediction::{EmailFormat, EmailPatternAnalysis};
use std::collections::HashMap;

/// 无分隔符的纯字母本地部分超过该长度时按 `lastfirst` 归类
///
/// 可调启发式常量，并非承重逻辑。
const LASTFIRST_LEN_THRESHOLD: usize = 10;

/// 邮箱命名约定分析器
///
/// 对一个域已知的邮箱集合做结构归纳，推断主导的本地部分命名约定。
pub struct PatternAnalyzer;

impl PatternAnalyzer {
    /// 分析已知邮箱，推断命名约定
    ///
    /// 空输入返回固定先验；过滤后没有属于目标域的邮箱时同样
    /// 退回先验，但样本数记为过滤前的数量。
    ///
    /// # 参数
    ///
    /// * `known_emails` - 已知邮箱集合
    /// * `domain` - 目标域名
    ///
    /// # 返回值
    ///
    /// 命名约定分析结果，置信度取值范围 [0,1]
    pub fn analyze<'a, I>(known_emails: I, domain: &str) -> EmailPatternAnalysis
    where
        I: IntoIterator<Item = &'a str>,
    {
        let emails: Vec<&str> = known_emails.into_iter().collect();
        if emails.is_empty() {
            return EmailPatternAnalysis::default_prior(0);
        }

        // Comparison happens on lowercased emails, so lowercase the domain too
        let suffix = format!("@{}", domain.to_lowercase());
        let mut counts: HashMap<EmailFormat, usize> = HashMap::new();
        let mut sample_size = 0usize;

        for email in &emails {
            // Only emails from the target domain carry signal
            if !email.to_lowercase().ends_with(&suffix) {
                continue;
            }
            sample_size += 1;

            let local_part = email.split('@').next().unwrap_or_default().to_lowercase();
            let format = Self::classify_local_part(&local_part);
            *counts.entry(format).or_insert(0) += 1;
        }

        if counts.is_empty() {
            return EmailPatternAnalysis::default_prior(emails.len());
        }

        // Order formats by descending frequency, ties broken by tag for determinism
        let mut sorted: Vec<(EmailFormat, usize)> = counts.into_iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.to_string().cmp(&b.0.to_string())));

        let total: usize = sorted.iter().map(|(_, count)| count).sum();
        let (primary_format, mode_count) = sorted[0];

        EmailPatternAnalysis {
            primary_format,
            formats: sorted.into_iter().map(|(format, _)| format).collect(),
            confidence: mode_count as f64 / total as f64,
            sample_size,
        }
    }

    /// 按结构归类单个本地部分
    fn classify_local_part(local_part: &str) -> EmailFormat {
        if local_part.contains('.') {
            let parts: Vec<&str> = local_part.split('.').collect();
            if parts.len() == 2 {
                if parts[0].len() == 1 && parts[1].len() > 1 {
                    EmailFormat::InitialDotLast
                } else if parts[0].len() > 1 && parts[1].len() == 1 {
                    EmailFormat::FirstDotInitial
                } else {
                    EmailFormat::FirstDotLast
                }
            } else if parts.last().is_some_and(|last| last.len() == 1) {
                EmailFormat::FirstDotLastDotInitial
            } else {
                EmailFormat::FirstDotLast
            }
        } else if local_part.contains('_') {
            EmailFormat::FirstUnderscoreLast
        } else if local_part.len() > 3 && local_part.chars().all(|c| c.is_ascii_alphabetic()) {
            if local_part.len() <= LASTFIRST_LEN_THRESHOLD {
                EmailFormat::FirstLast
            } else {
                // Long concatenated strings are assumed to be reversed full names
                EmailFormat::LastFirst
            }
        } else if local_part.len() <= 6 {
            EmailFormat::FirstOnly
        } else {
            EmailFormat::InitialLast
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_returns_fixed_prior() {
        let analysis = PatternAnalyzer::analyze([], "acme.com");

        assert_eq!(analysis.primary_format, EmailFormat::FirstDotLast);
        assert_eq!(
            analysis.formats,
            vec![EmailFormat::FirstDotLast, EmailFormat::FirstLast]
        );
        assert_eq!(analysis.confidence, 0.3);
        assert_eq!(analysis.sample_size, 0);

        // The prior does not depend on the domain string
        let other = PatternAnalyzer::analyze([], "whatever.example");
        assert_eq!(other, analysis);
    }

    #[test]
    fn test_uniform_first_dot_last_sample() {
        let emails: Vec<String> = (0..10)
            .map(|i| format!("user{}.name{}@acme.com", i, i))
            .collect();
        let analysis = PatternAnalyzer::analyze(emails.iter().map(String::as_str), "acme.com");

        assert_eq!(analysis.primary_format, EmailFormat::FirstDotLast);
        assert_eq!(analysis.confidence, 1.0);
        assert_eq!(analysis.sample_size, 10);
    }

    #[test]
    fn test_mixed_formats_ordered_by_frequency() {
        let emails = [
            "jane.doe@acme.com",
            "john.smith@acme.com",
            "sam.hill@acme.com",
            "kim_lee@acme.com",
        ];
        let analysis = PatternAnalyzer::analyze(emails, "acme.com");

        assert_eq!(analysis.primary_format, EmailFormat::FirstDotLast);
        assert_eq!(
            analysis.formats,
            vec![EmailFormat::FirstDotLast, EmailFormat::FirstUnderscoreLast]
        );
        assert_eq!(analysis.confidence, 0.75);
        assert_eq!(analysis.sample_size, 4);
    }

    #[test]
    fn test_domain_matching_is_case_insensitive() {
        let emails = ["Jane.Doe@ACME.com", "john.smith@acme.com"];
        let analysis = PatternAnalyzer::analyze(emails, "Acme.COM");

        assert_eq!(analysis.primary_format, EmailFormat::FirstDotLast);
        assert_eq!(analysis.confidence, 1.0);
        assert_eq!(analysis.sample_size, 2);
    }

    #[test]
    fn test_no_domain_matches_falls_back_with_prefilter_count() {
        let emails = ["jane.doe@other.com", "info@partner.net"];
        let analysis = PatternAnalyzer::analyze(emails, "acme.com");

        assert_eq!(analysis.primary_format, EmailFormat::FirstDotLast);
        assert_eq!(analysis.confidence, 0.3);
        assert_eq!(analysis.sample_size, 2);
    }

    #[test]
    fn test_local_part_classification() {
        assert_eq!(
            PatternAnalyzer::classify_local_part("jane.doe"),
            EmailFormat::FirstDotLast
        );
        assert_eq!(
            PatternAnalyzer::classify_local_part("j.doe"),
            EmailFormat::InitialDotLast
        );
        assert_eq!(
            PatternAnalyzer::classify_local_part("jane.d"),
            EmailFormat::FirstDotInitial
        );
        assert_eq!(
            PatternAnalyzer::classify_local_part("jane.doe.j"),
            EmailFormat::FirstDotLastDotInitial
        );
        assert_eq!(
            PatternAnalyzer::classify_local_part("jane_doe"),
            EmailFormat::FirstUnderscoreLast
        );
        assert_eq!(
            PatternAnalyzer::classify_local_part("janedoe"),
            EmailFormat::FirstLast
        );
        assert_eq!(
            PatternAnalyzer::classify_local_part("vanderbiltjane"),
            EmailFormat::LastFirst
        );
        assert_eq!(
            PatternAnalyzer::classify_local_part("jane"),
            EmailFormat::FirstLast
        );
        assert_eq!(
            PatternAnalyzer::classify_local_part("jd1"),
            EmailFormat::FirstOnly
        );
        assert_eq!(
            PatternAnalyzer::classify_local_part("jdoe2024x"),
            EmailFormat::InitialLast
        );
    }

    #[test]
    fn test_confidence_always_within_unit_interval() {
        let samples: [&[&str]; 4] = [
            &[],
            &["a@acme.com"],
            &["jane.doe@acme.com", "x_y@acme.com", "q@other.org"],
            &["mixedUP.Case@ACME.com"],
        ];
        for emails in samples {
            let analysis = PatternAnalyzer::analyze(emails.iter().copied(), "acme.com");
            assert!(analysis.confidence >= 0.0 && analysis.confidence <= 1.0);
            assert!(EmailFormat::ALL.contains(&analysis.primary_format));
        }
    }
}
