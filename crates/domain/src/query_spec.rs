use super::RecordType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Resolver switches attached to a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFlags {
    /// Reverse lookup: `domain` holds an IP address.
    #[serde(default)]
    pub reverse: bool,
    #[serde(default)]
    pub trace: bool,
    /// Minimal output, one answer value per line.
    #[serde(default)]
    pub short_form: bool,
    #[serde(default)]
    pub dnssec: bool,
}

/// One lookup request: domain + record type + optional server + flags.
/// Uses `Arc<str>` so a spec can be fanned out across many runs cheaply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<Arc<str>>,
    #[serde(default)]
    pub flags: QueryFlags,
}

impl QuerySpec {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            server: None,
            flags: QueryFlags::default(),
        }
    }

    pub fn with_server(mut self, server: impl Into<Arc<str>>) -> Self {
        self.server = Some(server.into());
        self
    }

    pub fn with_flags(mut self, flags: QueryFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Label identifying this spec inside an orchestration run.
    pub fn target_label(&self) -> String {
        match &self.server {
            Some(server) => format!("{}@{}", self.domain, server),
            None => self.domain.to_string(),
        }
    }
}

impl fmt::Display for QuerySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.target_label(), self.record_type)
    }
}
