use dns_failover_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use tracing::debug;

const HEADER_LEN: usize = 12;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub is_response: bool,

    pub rcode: ResponseCode,

    pub answer_count: usize,
}

impl DnsResponse {
    /// A reply to `query_id` that reports success.
    pub fn answers_query(&self, query_id: u16) -> bool {
        self.is_response && self.id == query_id && self.rcode == ResponseCode::NoError
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        if response_bytes.len() < HEADER_LEN {
            return Err(DomainError::Probe(format!(
                "DNS response too short: {} bytes",
                response_bytes.len()
            )));
        }

        let message = Message::from_vec(response_bytes)
            .map_err(|e| DomainError::Probe(format!("Failed to parse DNS response: {}", e)))?;

        // Header fields read straight off the wire.
        let id = u16::from_be_bytes([response_bytes[0], response_bytes[1]]);
        let is_response = response_bytes[2] & 0x80 != 0;
        let rcode = message.response_code();
        let answer_count = message.answers().len();

        debug!(id, rcode = ?rcode, answers = answer_count, "DNS response parsed");

        Ok(DnsResponse {
            id,
            is_response,
            rcode,
            answer_count,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
