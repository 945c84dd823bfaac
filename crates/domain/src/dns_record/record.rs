use super::RecordType;
use serde::{Deserialize, Serialize};

/// Named sub-fields of a signature record (RRSIG layout).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureFields {
    pub type_covered: String,
    pub algorithm: u8,
    pub labels: u8,
    pub original_ttl: u32,
    pub expiration: String,
    pub inception: String,
    pub key_tag: u16,
    pub signer_name: String,
    /// Base64 signature, whitespace-separated chunks joined together.
    pub signature: String,
}

/// DNS record as reported by the resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Owner name, trailing dot stripped
    pub name: String,
    /// Time to live in seconds
    pub ttl: u32,
    /// Record type
    pub record_type: RecordType,
    /// Record data. For priority-bearing records this is the target host only.
    pub value: String,
    /// Preference field of MX-style records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<SignatureFields>,
}

impl DnsRecord {
    pub fn new(
        name: impl Into<String>,
        ttl: u32,
        record_type: RecordType,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ttl,
            record_type,
            value: value.into(),
            priority: None,
            signature: None,
        }
    }

    pub fn with_priority(mut self, priority: u16) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_signature(mut self, signature: SignatureFields) -> Self {
        self.signature = Some(signature);
        self
    }

    /// Value used when comparing answers across servers, priority prefixed
    /// when present. Name-valued data is case-folded with the trailing dot
    /// removed; anything else (TXT, CAA, keys) is only trimmed.
    pub fn normalized_value(&self) -> String {
        let value = if self.record_type.carries_names() {
            self.value.trim().trim_end_matches('.').to_ascii_lowercase()
        } else {
            self.value.trim().to_string()
        };
        match self.priority {
            Some(p) => format!("{} {}", p, value),
            None => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dns_record_creation() {
        let record = DnsRecord::new("example.com", 300, RecordType::A, "192.0.2.1");

        assert_eq!(record.name, "example.com");
        assert_eq!(record.record_type, RecordType::A);
        assert_eq!(record.ttl, 300);
        assert!(record.priority.is_none());
        assert!(record.signature.is_none());
    }

    #[test]
    fn test_normalized_value() {
        let a = DnsRecord::new("example.com", 300, RecordType::NS, "NS1.Example.COM.");
        assert_eq!(a.normalized_value(), "ns1.example.com");

        let mx = DnsRecord::new("example.com", 300, RecordType::MX, "mail.example.com")
            .with_priority(10);
        assert_eq!(mx.normalized_value(), "10 mail.example.com");
    }

    #[test]
    fn test_opaque_values_keep_case() {
        let txt = DnsRecord::new("example.com", 300, RecordType::TXT, " \"V=SPF1 -ALL\" ");
        assert_eq!(txt.normalized_value(), "\"V=SPF1 -ALL\"");

        let caa = DnsRecord::new("example.com", 300, RecordType::CAA, "0 issue \"CA.example.\"");
        assert_eq!(caa.normalized_value(), "0 issue \"CA.example.\"");
    }
}
