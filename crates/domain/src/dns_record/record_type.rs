use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    NS,
    SOA,
    TXT,
    PTR,
    SRV,
    CAA,

    // DNSSEC records
    DS,
    DNSKEY,
    RRSIG,
    NSEC,
    NSEC3,

    /// Query-only meta type; never appears on a record line.
    ANY,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::NS => "NS",
            RecordType::SOA => "SOA",
            RecordType::TXT => "TXT",
            RecordType::PTR => "PTR",
            RecordType::SRV => "SRV",
            RecordType::CAA => "CAA",
            RecordType::DS => "DS",
            RecordType::DNSKEY => "DNSKEY",
            RecordType::RRSIG => "RRSIG",
            RecordType::NSEC => "NSEC",
            RecordType::NSEC3 => "NSEC3",
            RecordType::ANY => "ANY",
        }
    }

    /// Record types whose payload starts with a numeric preference field.
    pub fn has_priority(&self) -> bool {
        matches!(self, RecordType::MX)
    }

    /// Record types whose data is a domain name (or starts with one), compared
    /// case-insensitively and without the root dot.
    pub fn carries_names(&self) -> bool {
        matches!(
            self,
            RecordType::NS
                | RecordType::CNAME
                | RecordType::PTR
                | RecordType::MX
                | RecordType::SRV
                | RecordType::SOA
        )
    }

    /// Record types carrying the extended signature layout
    /// (type covered, algorithm, labels, TTLs, validity window, key tag, signer).
    pub fn is_signature(&self) -> bool {
        matches!(self, RecordType::RRSIG)
    }

    pub fn is_dnssec(&self) -> bool {
        matches!(
            self,
            RecordType::DS
                | RecordType::DNSKEY
                | RecordType::RRSIG
                | RecordType::NSEC
                | RecordType::NSEC3
        )
    }

    pub fn all() -> &'static [RecordType] {
        &[
            RecordType::A,
            RecordType::AAAA,
            RecordType::CNAME,
            RecordType::MX,
            RecordType::NS,
            RecordType::SOA,
            RecordType::TXT,
            RecordType::PTR,
            RecordType::SRV,
            RecordType::CAA,
            RecordType::DS,
            RecordType::DNSKEY,
            RecordType::RRSIG,
            RecordType::NSEC,
            RecordType::NSEC3,
            RecordType::ANY,
        ]
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
        Self::all()
            .iter()
            .copied()
            .find(|rt| rt.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown record type: {}", s))
    }
}

impl From<RecordType> for String {
    fn from(rt: RecordType) -> Self {
        rt.as_str().to_string()
    }
}

impl TryFrom<String> for RecordType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("a".parse::<RecordType>().unwrap(), RecordType::A);
        assert_eq!("Mx".parse::<RecordType>().unwrap(), RecordType::MX);
        assert_eq!(" rrsig ".parse::<RecordType>().unwrap(), RecordType::RRSIG);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        assert!("UNKNOWN".parse::<RecordType>().is_err());
        assert!("".parse::<RecordType>().is_err());
    }

    #[test]
    fn test_display_matches_token() {
        for rt in RecordType::all() {
            assert_eq!(rt.to_string().parse::<RecordType>().unwrap(), *rt);
        }
    }

    #[test]
    fn test_priority_and_signature_layouts() {
        assert!(RecordType::MX.has_priority());
        assert!(!RecordType::A.has_priority());
        assert!(RecordType::RRSIG.is_signature());
        assert!(!RecordType::DNSKEY.is_signature());
        assert!(RecordType::DNSKEY.is_dnssec());
    }
}
