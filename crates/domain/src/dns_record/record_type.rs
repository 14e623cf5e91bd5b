use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Record types a changeset directive may manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    TXT,
    MX,
    SRV,
    NS,
    PTR,
    CAA,
}

impl RecordType {
    pub const ALL: [RecordType; 9] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::CNAME,
        RecordType::TXT,
        RecordType::MX,
        RecordType::SRV,
        RecordType::NS,
        RecordType::PTR,
        RecordType::CAA,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::TXT => "TXT",
            RecordType::MX => "MX",
            RecordType::SRV => "SRV",
            RecordType::NS => "NS",
            RecordType::PTR => "PTR",
            RecordType::CAA => "CAA",
        }
    }

    /// True when a provider-side type string names this record type.
    pub fn matches(&self, provider_type: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(provider_type.trim())
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "CNAME" => Ok(RecordType::CNAME),
            "TXT" => Ok(RecordType::TXT),
            "MX" => Ok(RecordType::MX),
            "SRV" => Ok(RecordType::SRV),
            "NS" => Ok(RecordType::NS),
            "PTR" => Ok(RecordType::PTR),
            "CAA" => Ok(RecordType::CAA),
            _ => Err(format!("Unknown record type: {}", s)),
        }
    }
}

/// The record type as written in a stored changeset.
///
/// Unknown type names survive loading so that only the directive carrying
/// them fails when the changeset is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeclaredRecordType {
    Supported(RecordType),
    Unsupported(Arc<str>),
}

impl DeclaredRecordType {
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<RecordType>() {
            Ok(rt) => DeclaredRecordType::Supported(rt),
            Err(_) => DeclaredRecordType::Unsupported(Arc::from(raw)),
        }
    }

    pub fn supported(&self) -> Option<RecordType> {
        match self {
            DeclaredRecordType::Supported(rt) => Some(*rt),
            DeclaredRecordType::Unsupported(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DeclaredRecordType::Supported(rt) => rt.as_str(),
            DeclaredRecordType::Unsupported(raw) => raw,
        }
    }
}

impl From<RecordType> for DeclaredRecordType {
    fn from(rt: RecordType) -> Self {
        DeclaredRecordType::Supported(rt)
    }
}

impl fmt::Display for DeclaredRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DeclaredRecordType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DeclaredRecordType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(DeclaredRecordType::parse(&raw))
    }
}
