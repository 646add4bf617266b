// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{mount_company_site, real_pipeline, request_for};
use leadscout::domain::models::prediction::EmailFormat;
use leadscout::domain::models::signals::PageRole;
use wiremock::MockServer;

#[tokio::test]
async fn test_crawl_discovers_contacts_and_signals() {
    let server = MockServer::start().await;
    mount_company_site(&server).await;

    let pipeline = real_pipeline();
    let outcome = pipeline.run(&request_for(&server)).await.unwrap();

    // Both team members were extracted from the team page
    assert_eq!(outcome.leads.len(), 2);
    let john = outcome
        .leads
        .iter()
        .find(|l| l.attributes.first_name == "John")
        .unwrap();
    assert_eq!(john.attributes.last_name, "Smith");
    assert_eq!(
        john.attributes.title.as_deref(),
        Some("Chief Executive Officer")
    );
    assert_eq!(
        john.attributes.email.as_deref(),
        Some("john.smith@acme.com")
    );
    let mary = outcome
        .leads
        .iter()
        .find(|l| l.attributes.first_name == "Mary")
        .unwrap();
    assert!(mary.attributes.email.is_none());

    // Page roles were tagged during the crawl
    assert!(outcome.signals.role_url(PageRole::Team).is_some());
    assert!(outcome.signals.role_url(PageRole::Contact).is_some());

    // Contact page signals
    assert!(outcome.signals.emails.contains("info@acme.com"));
    assert!(outcome.signals.phone_numbers.contains("(555) 123-4567"));
    assert_eq!(
        outcome.signals.social_links.get("linkedin").map(String::as_str),
        Some("https://linkedin.com/company/acme")
    );

    // Every lead carries the score explanation
    for lead in &outcome.leads {
        assert!(lead.explanation.score >= 60);
        assert!(!lead.explanation.reasons.is_empty());
    }
}

#[tokio::test]
async fn test_predictions_generated_when_target_named() {
    let server = MockServer::start().await;
    mount_company_site(&server).await;

    let pipeline = real_pipeline();
    let mut request = request_for(&server);
    request.first_name = Some("Jane".to_string());
    request.last_name = Some("Doe".to_string());

    let outcome = pipeline.run(&request).await.unwrap();

    // Collected emails belong to acme.com, not the mock host, so the
    // analysis falls back to the conventional prior
    assert_eq!(
        outcome.format_analysis.primary_format,
        EmailFormat::FirstDotLast
    );
    assert!(!outcome.predictions.is_empty());
    assert!(outcome.predictions[0]
        .email
        .starts_with("jane.doe@"));
    // Confidence is non-increasing down the candidate list
    for pair in outcome.predictions.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }
}

#[tokio::test]
async fn test_repeated_crawls_yield_identical_signals() {
    let server = MockServer::start().await;
    mount_company_site(&server).await;

    let pipeline = real_pipeline();
    let request = request_for(&server);

    let first = pipeline.run(&request).await.unwrap();
    let second = pipeline.run(&request).await.unwrap();

    assert_eq!(
        serde_json::to_string(&first.signals).unwrap(),
        serde_json::to_string(&second.signals).unwrap()
    );
}

#[tokio::test]
async fn test_unreachable_site_yields_empty_outcome() {
    let pipeline = real_pipeline();
    let request = leadscout::application::dto::CrawlPipelineRequest {
        domain: "nonexistent.invalid".to_string(),
        seed_url: None,
        company_name: None,
        first_name: None,
        last_name: None,
        max_pages: Some(3),
        timeout_seconds: Some(2),
        callback_url: None,
    };

    let outcome = pipeline.run(&request).await.unwrap();
    assert!(outcome.leads.is_empty());
    assert!(outcome.signals.emails.is_empty());
    assert_eq!(outcome.company, "Nonexistent");
}
