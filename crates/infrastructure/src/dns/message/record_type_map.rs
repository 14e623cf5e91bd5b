//! Mapping between `dns_failover_domain::RecordType` and `hickory_proto::rr::RecordType`

use dns_failover_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::CAA => HickoryRecordType::CAA,
        }
    }
}
