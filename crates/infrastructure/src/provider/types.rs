//! Wire shapes of the Cloudflare API v4 DNS records endpoints.

use dns_failover_domain::RemoteDnsRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
    pub result: Option<T>,
    pub result_info: Option<ResultInfo>,
}

impl<T> Envelope<T> {
    pub fn first_error(&self) -> Option<String> {
        self.errors.first().map(|e| match e.code {
            Some(code) => format!("{} (code {})", e.message, code),
            None => e.message.clone(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiMessage {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResultInfo {
    #[serde(default)]
    pub total_pages: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CloudflareRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub ttl: u32,
    #[serde(default)]
    pub proxied: bool,
}

impl From<CloudflareRecord> for RemoteDnsRecord {
    fn from(record: CloudflareRecord) -> Self {
        Self {
            id: record.id,
            fqdn: record.name,
            record_type: record.record_type,
            content: record.content,
            ttl: record.ttl,
            proxied: record.proxied,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RecordBody<'a> {
    #[serde(rename = "type")]
    pub record_type: &'a str,
    pub name: &'a str,
    pub content: &'a str,
    pub ttl: u32,
    pub proxied: bool,
}
