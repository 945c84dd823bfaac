pub mod record;
pub mod record_type;

pub use record::{DnsRecord, SignatureFields};
pub use record_type::RecordType;
