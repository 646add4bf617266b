// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use leadscout::application::dto::CrawlPipelineRequest;
use leadscout::application::pipeline::LeadPipeline;
use leadscout::config::settings::{
    CallbackSettings, ConcurrencySettings, CrawlerSettings, Settings,
};
use leadscout::engines::reqwest_engine::ReqwestFetcher;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 测试用配置：无礼貌延迟，预算宽松
pub fn test_settings() -> Settings {
    Settings {
        crawler: CrawlerSettings {
            default_max_pages: 20,
            default_timeout_secs: 5,
            crawl_budget_secs: 60,
            min_fetch_delay_ms: 0,
            max_fetch_delay_ms: 0,
        },
        concurrency: ConcurrencySettings {
            max_concurrent_fetches: 10,
            per_domain_limit: 2,
        },
        callback: CallbackSettings {
            secret: "integration-test-secret".to_string(),
            timeout_secs: 5,
        },
    }
}

/// 使用真实 Reqwest 引擎的管线
pub fn real_pipeline() -> LeadPipeline {
    LeadPipeline::new(test_settings(), Arc::new(ReqwestFetcher))
}

/// 在 MockServer 上挂载一个带循环链接的三页小站
///
/// 首页 -> 团队页 -> 联系页，联系页再链回首页。
pub async fn mount_company_site(server: &MockServer) {
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body>
                <a href="{base}/team">Our Team</a>
                <a href="{base}/contact">Contact Us</a>
                <a href="https://elsewhere.example/partner">Partner</a>
            </body></html>"#
        )))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/team"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body>
                <div class="team-member">
                    <h3>John Smith</h3>
                    <p>Chief Executive Officer</p>
                    <a href="mailto:john.smith@acme.com">Email John</a>
                </div>
                <div class="team-member">
                    <h3>Mary Jones</h3>
                    <p>VP of Engineering</p>
                </div>
            </body></html>"#,
        ))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body>
                <p>Reach us at info@acme.com or call (555) 123-4567.</p>
                <a href="https://linkedin.com/company/acme">LinkedIn</a>
                <a href="{base}/">Home</a>
            </body></html>"#
        )))
        .mount(server)
        .await;
}

/// 指向 MockServer 的管线请求
pub fn request_for(server: &MockServer) -> CrawlPipelineRequest {
    let uri = server.uri();
    // Domain matching compares host names only, ports are ignored
    let host = uri
        .trim_start_matches("http://")
        .split(':')
        .next()
        .unwrap_or_default()
        .to_string();
    CrawlPipelineRequest {
        domain: host,
        seed_url: Some(format!("{uri}/")),
        company_name: Some("Acme".to_string()),
        first_name: None,
        last_name: None,
        max_pages: None,
        timeout_seconds: None,
        callback_url: None,
    }
}
