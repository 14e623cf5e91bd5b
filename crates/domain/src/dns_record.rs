mod record_type;
mod remote_record;

pub use record_type::{DeclaredRecordType, RecordType};
pub use remote_record::{NewDnsRecord, RemoteDnsRecord};

/// Compares two domain names the way DNS does: ASCII case-insensitive,
/// with an optional trailing root dot.
pub fn fqdn_eq(a: &str, b: &str) -> bool {
    a.trim_end_matches('.')
        .eq_ignore_ascii_case(b.trim_end_matches('.'))
}
