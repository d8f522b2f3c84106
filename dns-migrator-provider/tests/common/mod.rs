//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use dns_migrator_provider::{
    SourceCredentials, SourceProvider, TargetCredentials, TargetProvider, create_source_provider,
    create_target_provider,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
///
/// 只打印错误部分，`Ok` 的值不要求实现 `Debug`。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        let err = res.as_ref().err();
        assert!(err.is_none(), "expected Ok(..), got Err({err:?})");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        let err = res.as_ref().err();
        assert!(err.is_none(), "{}: {err:?}", format_args!($($msg)+));
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 源端测试上下文 - 封装 Provider 和测试 zone
pub struct SourceContext {
    pub provider: Arc<dyn SourceProvider>,
    pub zone: String,
}

impl SourceContext {
    /// 创建 Dynect 测试上下文
    pub fn dynect() -> Option<Self> {
        let customer = env::var("DYNECT_CUSTOMER").ok()?;
        let username = env::var("DYNECT_USERNAME").ok()?;
        let password = env::var("DYNECT_PASSWORD").ok()?;
        let zone = env::var("TEST_ZONE").ok()?;

        let credentials = SourceCredentials::Dynect {
            customer,
            username,
            password,
        };
        let provider = create_source_provider(credentials, 1).ok()?;

        Some(Self { provider, zone })
    }
}

/// 目标端测试上下文
pub struct TargetContext {
    pub provider: Arc<dyn TargetProvider>,
}

impl TargetContext {
    /// 创建 Route 53 测试上下文
    pub fn route53() -> Option<Self> {
        let access_key_id = env::var("AWS_ACCESS_KEY_ID").ok()?;
        let secret_access_key = env::var("AWS_SECRET_ACCESS_KEY").ok()?;

        let credentials = TargetCredentials::Route53 {
            access_key_id,
            secret_access_key,
        };
        let provider = create_target_provider(credentials, 1).ok()?;

        Some(Self { provider })
    }
}
