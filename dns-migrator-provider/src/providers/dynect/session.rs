//! Dynect 会话管理
//!
//! 每个公开操作都显式打开一个会话，结束后无论成败都关闭它。

use crate::error::Result;
use crate::traits::ErrorContext;

use super::DynectProvider;
use super::types::{SessionData, SessionRequest};

/// An open Dynect API session.
///
/// Obtained from [`DynectProvider::open_session`] and consumed by
/// [`DynectProvider::close_session`].
pub(crate) struct DynSession {
    token: String,
}

impl DynSession {
    pub(crate) fn token(&self) -> &str {
        &self.token
    }
}

impl DynectProvider {
    /// 登录并获取会话 token
    pub(crate) async fn open_session(&self) -> Result<DynSession> {
        let body = SessionRequest {
            customer_name: &self.customer,
            user_name: &self.username,
            password: &self.password,
        };

        let data: SessionData = self
            .post(None, "/Session/", &body, ErrorContext::default())
            .await?;

        log::debug!(
            "[dynect] Session opened for {}/{} (API {})",
            self.customer,
            self.username,
            data.version.as_deref().unwrap_or("unknown")
        );

        Ok(DynSession { token: data.token })
    }

    /// 注销会话；失败只记录日志，不覆盖操作本身的结果
    pub(crate) async fn close_session(&self, session: DynSession) {
        match self
            .delete(&session, "/Session/", ErrorContext::default())
            .await
        {
            Ok(()) => log::debug!("[dynect] Session closed"),
            Err(e) => log::warn!("[dynect] Failed to close session: {e}"),
        }
    }
}
