//! Route 53 HTTP 请求方法

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::Route53Provider;
use super::types::ErrorBody;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

impl Route53Provider {
    // ==================== 辅助方法 ====================

    /// 统一处理 Route 53 响应错误
    pub(crate) fn handle_response_error(
        &self,
        status: u16,
        response_text: &str,
        ctx: ErrorContext,
    ) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        // 尝试解析结构化错误
        if let Ok(body) = quick_xml::de::from_str::<ErrorBody>(response_text) {
            if let Some(error) = body.error {
                return Err(self.map_error(
                    RawApiError::with_code(error.code, error.message.unwrap_or_default()),
                    ctx,
                ));
            }
            if let Some(messages) = body.messages {
                return Err(self.map_error(
                    RawApiError::with_code("InvalidChangeBatch", messages.items.join("; ")),
                    ctx,
                ));
            }
        }

        // 回退到通用错误
        Err(self.unknown_error(RawApiError::new(format!(
            "HTTP {status}: {}",
            truncate_for_log(response_text)
        ))))
    }

    /// 序列化 XML 请求体
    fn to_xml<B: Serialize>(&self, body: &B) -> Result<String> {
        let xml = quick_xml::se::to_string(body).map_err(|e| ProviderError::SerializationError {
            provider: self.provider_name().to_string(),
            detail: e.to_string(),
        })?;
        Ok(format!("{XML_DECLARATION}{xml}"))
    }

    // ==================== 请求方法 ====================

    /// 执行签名的 POST 请求
    pub(crate) async fn post_xml<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        ctx: ErrorContext,
    ) -> Result<T> {
        let payload = self.to_xml(body)?;
        log::debug!("Request Body: {}", truncate_for_log(&payload));

        let amz_date = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
        let content_type = "text/xml";

        let headers = vec![
            ("Content-Type".to_string(), content_type.to_string()),
            ("Host".to_string(), self.host.clone()),
            ("X-Amz-Date".to_string(), amz_date.clone()),
        ];

        let authorization = self.sign("POST", path, "", &headers, &payload, &amz_date);
        let url = format!("{}{path}", self.endpoint);

        let request = self
            .client
            .post(&url)
            .header("Content-Type", content_type)
            .header("Host", &self.host)
            .header("X-Amz-Date", &amz_date)
            .header("Authorization", authorization)
            .body(payload);

        let (status, response_text) = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            "POST",
            &url,
            self.max_retries,
        )
        .await?;

        self.handle_response_error(status, &response_text, ctx)?;
        HttpUtils::parse_xml(&response_text, self.provider_name())
    }
}
