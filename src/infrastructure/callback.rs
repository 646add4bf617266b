// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::{anyhow, Result};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::Duration;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// 管线结果回调投递器
///
/// 将管线结果以带签名的 JSON POST 投递到调用方指定的回调地址。
pub struct CallbackNotifier {
    /// HTTP 客户端
    client: reqwest::Client,
    /// 签名密钥
    secret: String,
}

impl CallbackNotifier {
    /// 创建新的回调投递器
    ///
    /// # 参数
    ///
    /// * `secret` - 签名密钥
    /// * `timeout_secs` - 单次投递的超时秒数
    pub fn new(secret: String, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_default();

        Self { client, secret }
    }

    /// 为负载生成签名
    fn generate_signature(&self, payload: &str, timestamp: i64) -> String {
        let message = format!("{}.{}", timestamp, payload);
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(message.as_bytes());
        let result = mac.finalize();
        hex::encode(result.into_bytes())
    }

    /// 投递一次管线结果
    ///
    /// # 参数
    ///
    /// * `callback_url` - 回调地址
    /// * `payload` - 序列化后的结果负载
    /// * `event_id` - 本次投递的唯一标识
    ///
    /// # 返回值
    ///
    /// 投递成功返回 `Ok(())`，否则返回含状态码与响应体的错误
    pub async fn deliver(
        &self,
        callback_url: &str,
        payload: &serde_json::Value,
        event_id: Uuid,
    ) -> Result<()> {
        let timestamp = chrono::Utc::now().timestamp();
        let payload_str = serde_json::to_string(payload)?;
        let signature = self.generate_signature(&payload_str, timestamp);

        let response = self
            .client
            .post(callback_url)
            .header("Content-Type", "application/json")
            .header("X-Leadscout-Signature", signature)
            .header("X-Leadscout-Timestamp", timestamp.to_string())
            .header("X-Leadscout-Event-ID", event_id.to_string())
            .json(payload)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(anyhow!(
                "Callback delivery failed with status {}: {}",
                status,
                body
            ))
        }
    }
}
