use digger_domain::{DnsRecord, RecordType, SignatureFields};
use thiserror::Error;

const MIN_RECORD_FIELDS: usize = 5;
const MIN_SIGNATURE_PAYLOAD: usize = 8;

/// Why a resolver output line could not become a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordLineError {
    #[error("expected at least 5 fields, found {0}")]
    TooFewFields(usize),

    #[error("invalid TTL: {0}")]
    InvalidTtl(String),

    #[error("unknown class: {0}")]
    UnknownClass(String),

    #[error("unknown record type: {0}")]
    UnknownType(String),

    #[error("invalid priority: {0}")]
    InvalidPriority(String),

    #[error("priority present but value missing")]
    MissingValue,
}

/// Parse `name ttl class type value...` into a record.
pub fn parse_record_line(line: &str) -> Result<DnsRecord, RecordLineError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_RECORD_FIELDS {
        return Err(RecordLineError::TooFewFields(fields.len()));
    }

    let name = strip_root(fields[0]);
    let ttl: u32 = fields[1]
        .parse()
        .map_err(|_| RecordLineError::InvalidTtl(fields[1].to_string()))?;

    if !matches!(fields[2], "IN" | "CH" | "HS") {
        return Err(RecordLineError::UnknownClass(fields[2].to_string()));
    }

    let record_type: RecordType = fields[3]
        .parse()
        .map_err(|_| RecordLineError::UnknownType(fields[3].to_string()))?;

    let payload = &fields[4..];

    if record_type.has_priority() {
        let priority: u16 = payload[0]
            .parse()
            .map_err(|_| RecordLineError::InvalidPriority(payload[0].to_string()))?;
        let exchange = payload.get(1).ok_or(RecordLineError::MissingValue)?;
        return Ok(
            DnsRecord::new(name, ttl, record_type, strip_root(exchange)).with_priority(priority),
        );
    }

    let value = strip_root(rest_after(line, 4));
    let record = DnsRecord::new(name, ttl, record_type, value);

    if record_type.is_signature() {
        if let Some(signature) = signature_fields(payload) {
            return Ok(record.with_signature(signature));
        }
    }

    Ok(record)
}

/// Named RRSIG sub-fields; `None` when the payload is short or a numeric field
/// does not parse, in which case only the generic value is kept.
fn signature_fields(payload: &[&str]) -> Option<SignatureFields> {
    if payload.len() < MIN_SIGNATURE_PAYLOAD {
        return None;
    }

    Some(SignatureFields {
        type_covered: payload[0].to_string(),
        algorithm: payload[1].parse().ok()?,
        labels: payload[2].parse().ok()?,
        original_ttl: payload[3].parse().ok()?,
        expiration: payload[4].to_string(),
        inception: payload[5].to_string(),
        key_tag: payload[6].parse().ok()?,
        signer_name: strip_root(payload[7]).to_string(),
        signature: payload[8..].concat(),
    })
}

/// Text following the first `n` whitespace-separated fields, trimmed.
fn rest_after(line: &str, n: usize) -> &str {
    let mut rest = line.trim_start();
    for _ in 0..n {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        rest = rest[end..].trim_start();
    }
    rest.trim_end()
}

pub(crate) fn strip_root(value: &str) -> &str {
    match value.strip_suffix('.') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => value,
    }
}
