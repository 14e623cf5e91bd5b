use super::types::{CloudflareRecord, Envelope, RecordBody};
use async_trait::async_trait;
use dns_failover_application::ports::DnsProvider;
use dns_failover_domain::config::ProviderConfig;
use dns_failover_domain::{DomainError, NewDnsRecord, RemoteDnsRecord};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument};

const PER_PAGE: u32 = 100;

/// Cloudflare API v4 client scoped to one zone.
///
/// Authenticates with the account email and global API key on every request.
pub struct CloudflareDnsProvider {
    http: reqwest::Client,
    records_url: String,
}

impl CloudflareDnsProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, DomainError> {
        let mut headers = HeaderMap::new();
        let email = HeaderValue::from_str(&config.account_email).map_err(|e| {
            DomainError::ConfigError(format!("invalid provider account email: {}", e))
        })?;
        let mut key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| DomainError::ConfigError(format!("invalid provider API key: {}", e)))?;
        key.set_sensitive(true);
        headers.insert("X-Auth-Email", email);
        headers.insert("X-Auth-Key", key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DomainError::Provider(format!("failed to build HTTP client: {}", e)))?;

        let records_url = format!(
            "{}/zones/{}/dns_records",
            config.api_base.trim_end_matches('/'),
            config.zone_id
        );

        Ok(Self { http, records_url })
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.records_url, id)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Envelope<T>, DomainError> {
        let response = request.send().await.map_err(|e| {
            error!(error = %e, "Cloudflare request failed");
            DomainError::Provider(format!("request failed: {}", e))
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Provider(format!("failed to read response: {}", e)))?;

        let envelope: Option<Envelope<T>> = serde_json::from_str(&body).ok();

        match envelope {
            Some(envelope) if status.is_success() && envelope.success => Ok(envelope),
            Some(envelope) => {
                let reason = envelope
                    .first_error()
                    .unwrap_or_else(|| format!("HTTP {}", status));
                error!(status = %status, reason = %reason, "Cloudflare API rejected request");
                Err(DomainError::Provider(reason))
            }
            None if status.is_success() => Err(DomainError::Provider(format!(
                "unexpected response body (HTTP {})",
                status
            ))),
            None => {
                error!(status = %status, "Cloudflare API returned non-JSON error");
                Err(DomainError::Provider(format!("HTTP {}", status)))
            }
        }
    }
}

#[async_trait]
impl DnsProvider for CloudflareDnsProvider {
    #[instrument(skip(self))]
    async fn list_records(&self) -> Result<Vec<RemoteDnsRecord>, DomainError> {
        let mut records = Vec::new();
        let mut page = 1u32;

        loop {
            let request = self.http.get(&self.records_url).query(&[
                ("page", page.to_string()),
                ("per_page", PER_PAGE.to_string()),
            ]);
            let envelope: Envelope<Vec<CloudflareRecord>> = self.send(request).await?;

            let batch = envelope.result.unwrap_or_default();
            records.extend(batch.into_iter().map(RemoteDnsRecord::from));

            let total_pages = envelope.result_info.map(|i| i.total_pages).unwrap_or(1);
            if page >= total_pages {
                break;
            }
            page += 1;
        }

        debug!(records = records.len(), pages = page, "Zone records listed");
        Ok(records)
    }

    #[instrument(skip(self, record), fields(fqdn = %record.fqdn, record_type = %record.record_type))]
    async fn create_record(&self, record: &NewDnsRecord) -> Result<(), DomainError> {
        let body = RecordBody {
            record_type: record.record_type.as_str(),
            name: &record.fqdn,
            content: &record.content,
            ttl: record.ttl,
            proxied: record.proxied,
        };
        let _: Envelope<serde_json::Value> =
            self.send(self.http.post(&self.records_url).json(&body)).await?;
        debug!("Record created");
        Ok(())
    }

    #[instrument(skip(self, record), fields(id = %record.id, fqdn = %record.fqdn))]
    async fn update_record(&self, record: &RemoteDnsRecord) -> Result<(), DomainError> {
        let body = RecordBody {
            record_type: &record.record_type,
            name: &record.fqdn,
            content: &record.content,
            ttl: record.ttl,
            proxied: record.proxied,
        };
        let _: Envelope<serde_json::Value> = self
            .send(self.http.put(self.record_url(&record.id)).json(&body))
            .await?;
        debug!("Record updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_record(&self, id: &str) -> Result<(), DomainError> {
        let _: Envelope<serde_json::Value> =
            self.send(self.http.delete(self.record_url(id))).await?;
        debug!("Record deleted");
        Ok(())
    }
}
