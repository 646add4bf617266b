// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{mount_company_site, real_pipeline, request_for};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_outcome_delivered_to_callback() {
    let site = MockServer::start().await;
    mount_company_site(&site).await;

    let receiver = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/leads/done"))
        .and(header_exists("X-Leadscout-Signature"))
        .and(header_exists("X-Leadscout-Timestamp"))
        .and(header_exists("X-Leadscout-Event-ID"))
        .and(body_partial_json(json!({ "company": "Acme" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&receiver)
        .await;

    let pipeline = real_pipeline();
    let mut request = request_for(&site);
    request.callback_url = Some(format!("{}/leads/done", receiver.uri()));

    let outcome = pipeline.run(&request).await.unwrap();
    assert_eq!(outcome.company, "Acme");

    // MockServer verifies the expected delivery on drop
}

#[tokio::test]
async fn test_callback_failure_does_not_fail_pipeline() {
    let site = MockServer::start().await;
    mount_company_site(&site).await;

    let receiver = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&receiver)
        .await;

    let pipeline = real_pipeline();
    let mut request = request_for(&site);
    request.callback_url = Some(receiver.uri());

    let outcome = pipeline.run(&request).await.unwrap();
    assert_eq!(outcome.leads.len(), 2);
}
