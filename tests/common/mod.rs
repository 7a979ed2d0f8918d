//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::time::Duration;

use porkbun_dns_provider::{PorkbunProvider, Record, RecordData};

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

pub const TEST_ZONE: &str = "example.com";

/// Builds a provider pointed at a mock server.
pub fn mock_provider(base_url: &str) -> PorkbunProvider {
    PorkbunProvider::builder("pk1_test".to_string(), "sk1_test".to_string())
        .base_url(base_url)
        .build()
}

/// Builds a provider from the live-test environment variables.
pub fn live_provider() -> PorkbunProvider {
    let api_key = std::env::var("PORKBUN_API_KEY").expect("PORKBUN_API_KEY not set");
    let secret = std::env::var("PORKBUN_SECRET_API_KEY").expect("PORKBUN_SECRET_API_KEY not set");
    PorkbunProvider::new(api_key, secret)
}

pub fn record(name: &str, ttl_secs: u64, data: RecordData) -> Record {
    Record {
        id: None,
        name: name.to_string(),
        ttl: Duration::from_secs(ttl_secs),
        data,
    }
}

pub fn a_record(name: &str, address: &str) -> Record {
    record(
        name,
        600,
        RecordData::A {
            address: address.parse().expect("invalid IPv4 literal"),
        },
    )
}

pub fn txt_record(name: &str, text: &str) -> Record {
    record(
        name,
        600,
        RecordData::TXT {
            text: text.to_string(),
        },
    )
}
