//! Dynect HTTP 请求方法

use reqwest::RequestBuilder;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::{sanitize_for_log, truncate_for_log};

use super::session::DynSession;
use super::types::DynResponse;
use super::DynectProvider;

impl DynectProvider {
    // ==================== 辅助方法 ====================

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn with_auth(request: RequestBuilder, session: Option<&DynSession>) -> RequestBuilder {
        let request = request.header("Content-Type", "application/json");
        match session {
            Some(s) => request.header("Auth-Token", s.token()),
            None => request,
        }
    }

    /// 发送请求并解析 Dynect 信封
    async fn send(
        &self,
        request: RequestBuilder,
        method: &str,
        url: &str,
    ) -> Result<(u16, DynResponse)> {
        let (status, response_text) = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            method,
            url,
            self.max_retries,
        )
        .await?;

        if (200..300).contains(&status) {
            let envelope = HttpUtils::parse_json(&response_text, self.provider_name())?;
            return Ok((status, envelope));
        }

        match serde_json::from_str::<DynResponse>(&response_text) {
            Ok(envelope) => Ok((status, envelope)),
            // 非 JSON 的错误页（网关、维护页等）
            Err(_) => {
                log::error!(
                    "[dynect] Unexpected response body: {}",
                    sanitize_for_log(&response_text)
                );
                Err(self.unknown_error(RawApiError::new(format!(
                    "HTTP {status}: {}",
                    truncate_for_log(&response_text)
                ))))
            }
        }
    }

    /// 将 failure 信封映射为统一错误
    fn envelope_error(&self, status: u16, envelope: &DynResponse, ctx: ErrorContext) -> ProviderError {
        let raw = match envelope.error_message() {
            Some(msg) => {
                let info = msg.info.clone().unwrap_or_default();
                match &msg.err_cd {
                    Some(code) => RawApiError::with_code(code.clone(), info),
                    None => RawApiError::new(info),
                }
            }
            None => RawApiError::new(format!("HTTP {status}: status {}", envelope.status)),
        };
        self.map_error(raw, ctx)
    }

    /// 处理信封状态：success 直接返回 data，incomplete 轮询 `/Job/`
    async fn finish(
        &self,
        status: u16,
        envelope: DynResponse,
        session: Option<&DynSession>,
        ctx: ErrorContext,
    ) -> Result<serde_json::Value> {
        match envelope.status.as_str() {
            "success" => Ok(envelope.data),
            "incomplete" => match (session, envelope.job_id) {
                (Some(session), Some(job_id)) => self.wait_for_job(session, job_id, ctx).await,
                _ => Err(self.unknown_error(RawApiError::new(
                    "incomplete response without a job to poll",
                ))),
            },
            _ => Err(self.envelope_error(status, &envelope, ctx)),
        }
    }

    /// 轮询异步任务直到完成
    async fn wait_for_job(
        &self,
        session: &DynSession,
        job_id: u64,
        ctx: ErrorContext,
    ) -> Result<serde_json::Value> {
        let url = self.url(&format!("/Job/{job_id}/"));

        let attempts = self.job_poll_attempts;
        for attempt in 1..=attempts {
            tokio::time::sleep(self.job_poll_interval).await;
            let request = Self::with_auth(self.client.get(&url), Some(session));
            let (status, envelope) = self.send(request, "GET", &url).await?;

            match envelope.status.as_str() {
                "success" => return Ok(envelope.data),
                "incomplete" => {
                    log::debug!("[dynect] Job {job_id} still running (poll {attempt}/{attempts})");
                }
                _ => return Err(self.envelope_error(status, &envelope, ctx)),
            }
        }

        Err(ProviderError::Timeout {
            provider: self.provider_name().to_string(),
            detail: format!("job {job_id} did not complete after {attempts} polls"),
        })
    }

    fn decode<T: DeserializeOwned>(&self, data: serde_json::Value) -> Result<T> {
        serde_json::from_value(data).map_err(|e| {
            log::error!("[dynect] Failed to decode response data: {e}");
            self.parse_error(e)
        })
    }

    // ==================== 请求方法 ====================

    /// 执行 GET 请求
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        session: &DynSession,
        path: &str,
        ctx: ErrorContext,
    ) -> Result<T> {
        let url = self.url(path);
        let request = Self::with_auth(self.client.get(&url), Some(session));
        let (status, envelope) = self.send(request, "GET", &url).await?;
        let data = self.finish(status, envelope, Some(session), ctx).await?;
        self.decode(data)
    }

    /// 执行 POST 请求（登录时没有会话）
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        session: Option<&DynSession>,
        path: &str,
        body: &B,
        ctx: ErrorContext,
    ) -> Result<T> {
        let payload = serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
            provider: self.provider_name().to_string(),
            detail: e.to_string(),
        })?;
        log::debug!("Request Body: {}", sanitize_for_log(&payload));

        let url = self.url(path);
        let request = Self::with_auth(self.client.post(&url), session).body(payload);
        let (status, envelope) = self.send(request, "POST", &url).await?;
        let data = self.finish(status, envelope, session, ctx).await?;
        self.decode(data)
    }

    /// 执行 DELETE 请求
    pub(crate) async fn delete(
        &self,
        session: &DynSession,
        path: &str,
        ctx: ErrorContext,
    ) -> Result<()> {
        let url = self.url(path);
        let request = Self::with_auth(self.client.delete(&url), Some(session));
        let (status, envelope) = self.send(request, "DELETE", &url).await?;
        self.finish(status, envelope, Some(session), ctx).await?;
        Ok(())
    }
}
