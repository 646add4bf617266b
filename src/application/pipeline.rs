// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::{CrawlPipelineRequest, PredictRequest};
use crate::config::settings::Settings;
use crate::domain::models::lead::{LeadAttributes, LeadScoreExplanation};
use crate::domain::models::prediction::{EmailPatternAnalysis, PredictedEmail};
use crate::domain::models::signals::DomainSignals;
use crate::domain::services::candidate_generator::CandidateGenerator;
use crate::domain::services::crawler::{CrawlTask, FrontierCrawler};
use crate::domain::services::email_verifier::{EmailValidation, EmailVerifier};
use crate::domain::services::lead_scorer::LeadScorer;
use crate::domain::services::pattern_analyzer::PatternAnalyzer;
use crate::engines::traits::PageFetcher;
use crate::infrastructure::callback::CallbackNotifier;
use crate::infrastructure::fetch_limiter::FetchLimiter;
use crate::utils::url_utils;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

/// 管线错误
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// 请求参数校验失败
    #[error("请求参数校验失败: {0}")]
    Validation(#[from] validator::ValidationErrors),
    /// 种子URL无法解析
    #[error("种子URL无法解析: {0}")]
    InvalidSeed(#[from] url::ParseError),
}

/// 一条已评分的线索
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredLead {
    /// 线索属性
    pub attributes: LeadAttributes,
    /// 评分与解释
    pub explanation: LeadScoreExplanation,
}

/// 一次管线运行的完整结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOutcome {
    /// 本次运行的任务标识
    pub task_id: Uuid,
    /// 目标公司名
    pub company: String,
    /// 目标域名
    pub domain: String,
    /// 抓取积累的域信号
    pub signals: DomainSignals,
    /// 邮箱命名约定分析
    pub format_analysis: EmailPatternAnalysis,
    /// 目标联系人的候选邮箱，未提供姓名时为空
    pub predictions: Vec<PredictedEmail>,
    /// 抓取到的联系人及其质量评分
    pub leads: Vec<ScoredLead>,
}

/// 线索发现管线
///
/// 编排爬取、命名约定分析、候选邮箱生成与质量评分四个阶段，
/// 并在调用方提供回调地址时投递最终结果。
pub struct LeadPipeline {
    settings: Settings,
    crawler: FrontierCrawler,
    notifier: CallbackNotifier,
}

impl LeadPipeline {
    /// 创建新的管线实例
    ///
    /// # 参数
    ///
    /// * `settings` - 应用配置
    /// * `fetcher` - 页面抓取引擎
    ///
    /// # 返回值
    ///
    /// 返回新的管线实例
    pub fn new(settings: Settings, fetcher: Arc<dyn PageFetcher>) -> Self {
        let limiter = Arc::new(FetchLimiter::new(
            settings.concurrency.max_concurrent_fetches,
            settings.concurrency.per_domain_limit,
        ));
        let crawler = FrontierCrawler::new(fetcher, limiter, settings.crawler.clone());
        let notifier = CallbackNotifier::new(
            settings.callback.secret.clone(),
            settings.callback.timeout_secs,
        );
        Self {
            settings,
            crawler,
            notifier,
        }
    }

    /// 运行完整的线索发现管线
    ///
    /// 校验失败的请求在任何网络请求发出之前被拒绝。抓取阶段对
    /// 单页失败保持宽容；回调投递失败只记录告警，不影响返回值。
    ///
    /// # 参数
    ///
    /// * `request` - 抓取管线请求
    ///
    /// # 返回值
    ///
    /// 本次运行的完整结果
    pub async fn run(&self, request: &CrawlPipelineRequest) -> Result<PipelineOutcome, PipelineError> {
        request.validate()?;

        let task_id = Uuid::new_v4();
        let seed = match &request.seed_url {
            Some(url) => url.clone(),
            None => url_utils::normalize_seed(&request.domain)?.to_string(),
        };
        let company_name = request
            .company_name
            .clone()
            .unwrap_or_else(|| url_utils::company_name_from_domain(&request.domain));

        let task = CrawlTask {
            seed,
            domain: request.domain.clone(),
            company_name: company_name.clone(),
            max_pages: request
                .max_pages
                .unwrap_or(self.settings.crawler.default_max_pages),
            timeout: Duration::from_secs(
                request
                    .timeout_seconds
                    .unwrap_or(self.settings.crawler.default_timeout_secs),
            ),
            budget: Duration::from_secs(self.settings.crawler.crawl_budget_secs),
        };

        info!(task_id = %task_id, domain = %task.domain, "Lead pipeline started");

        let signals = self.crawler.crawl(&task).await;
        let format_analysis =
            PatternAnalyzer::analyze(signals.emails.iter().map(String::as_str), &request.domain);

        let predictions = match (&request.first_name, &request.last_name) {
            (Some(first), Some(last)) => CandidateGenerator::generate(
                first,
                last,
                &request.domain,
                &format_analysis.formats,
                format_analysis.confidence,
            ),
            _ => Vec::new(),
        };

        let linkedin_url = signals.social_links.get("linkedin").cloned();
        let leads = signals
            .contacts
            .iter()
            .map(|contact| {
                let attributes = LeadAttributes {
                    first_name: contact.first_name.clone(),
                    last_name: contact.last_name.clone(),
                    title: contact.title.clone(),
                    company: Some(contact.company.clone()),
                    email: contact.email.clone(),
                    linkedin_url: linkedin_url.clone(),
                    company_domain: Some(request.domain.clone()),
                    ..Default::default()
                };
                let explanation = LeadScorer::score(&attributes);
                ScoredLead {
                    attributes,
                    explanation,
                }
            })
            .collect();

        let outcome = PipelineOutcome {
            task_id,
            company: company_name,
            domain: request.domain.clone(),
            signals,
            format_analysis,
            predictions,
            leads,
        };

        if let Some(callback_url) = &request.callback_url {
            match serde_json::to_value(&outcome) {
                Ok(payload) => {
                    if let Err(e) = self.notifier.deliver(callback_url, &payload, task_id).await {
                        warn!(task_id = %task_id, error = %e, "Callback delivery failed");
                    }
                }
                Err(e) => warn!(task_id = %task_id, error = %e, "Failed to serialize outcome"),
            }
        }

        info!(
            task_id = %task_id,
            contacts = outcome.leads.len(),
            emails = outcome.signals.emails.len(),
            "Lead pipeline finished"
        );
        Ok(outcome)
    }

    /// 不抓取，直接推断候选邮箱
    ///
    /// # 参数
    ///
    /// * `request` - 邮箱推断请求
    ///
    /// # 返回值
    ///
    /// 命名约定分析与按置信度排列的候选邮箱
    pub fn predict(
        &self,
        request: &PredictRequest,
    ) -> Result<(EmailPatternAnalysis, Vec<PredictedEmail>), PipelineError> {
        request.validate()?;

        // Caller-supplied samples are untrusted; malformed and disposable
        // addresses carry no naming-convention signal
        let samples: Vec<&str> = request
            .known_emails
            .iter()
            .map(String::as_str)
            .filter(|email| {
                let validation = EmailVerifier::verify(email);
                validation.valid && !validation.disposable
            })
            .collect();

        let analysis = PatternAnalyzer::analyze(samples, &request.company_domain);
        let predictions = CandidateGenerator::generate(
            &request.first_name,
            &request.last_name,
            &request.company_domain,
            &analysis.formats,
            analysis.confidence,
        );
        Ok((analysis, predictions))
    }

    /// 对单条线索评分
    pub fn score(&self, lead: &LeadAttributes) -> LeadScoreExplanation {
        LeadScorer::score(lead)
    }

    /// 校验单个邮箱的语法与域名类别
    pub fn verify_email(&self, email: &str) -> EmailValidation {
        EmailVerifier::verify(email)
    }

    /// 为一批线索回填候选邮箱
    ///
    /// 按公司域名分组，同组内已有的真实邮箱作为该组的命名样本。
    /// 只回填 `email` 缺失的记录，已有邮箱的记录原样保留。
    ///
    /// # 参数
    ///
    /// * `leads` - 待回填的线索列表
    ///
    /// # 返回值
    ///
    /// 回填后的线索列表，顺序与输入一致
    pub fn predict_batch(&self, mut leads: Vec<LeadAttributes>) -> Vec<LeadAttributes> {
        let mut samples_by_domain: HashMap<String, Vec<String>> = HashMap::new();
        for lead in &leads {
            if let (Some(domain), Some(email)) = (&lead.company_domain, &lead.email) {
                samples_by_domain
                    .entry(domain.clone())
                    .or_default()
                    .push(email.clone());
            }
        }

        for lead in &mut leads {
            if lead.email.is_some() {
                continue;
            }
            let Some(domain) = lead.company_domain.clone() else {
                continue;
            };
            if lead.first_name.is_empty() || lead.last_name.is_empty() {
                continue;
            }

            let known = samples_by_domain
                .get(&domain)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let analysis =
                PatternAnalyzer::analyze(known.iter().map(String::as_str), &domain);
            let predictions = CandidateGenerator::generate(
                &lead.first_name,
                &lead.last_name,
                &domain,
                &analysis.formats,
                analysis.confidence,
            );
            if let Some(best) = predictions.first() {
                lead.predicted_email = Some(best.email.clone());
                lead.email_confidence = Some(best.confidence);
            }
        }

        leads
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
