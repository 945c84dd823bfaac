//! Digger Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod query_result;
pub mod query_spec;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{DnsRecord, RecordType, SignatureFields};
pub use errors::DomainError;
pub use query_result::{ComparisonResult, QueryResult, QueryStatus};
pub use query_spec::{QueryFlags, QuerySpec};
pub use validators::{validate_domain, validate_query, validate_server};
