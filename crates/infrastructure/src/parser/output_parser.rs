use super::classify::status_from_token;
use super::record_line::{parse_record_line, strip_root};
use digger_domain::{DnsRecord, QuerySpec, QueryStatus, RecordType};
use tracing::{debug, warn};

const ANSWER_HEADER: &str = "ANSWER SECTION";
const AUTHORITY_HEADER: &str = "AUTHORITY SECTION";
const ADDITIONAL_HEADER: &str = "ADDITIONAL SECTION";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Answer,
    Authority,
    Additional,
}

impl Section {
    fn from_header(line: &str) -> Option<Self> {
        if line.contains(ANSWER_HEADER) {
            Some(Section::Answer)
        } else if line.contains(AUTHORITY_HEADER) {
            Some(Section::Authority)
        } else if line.contains(ADDITIONAL_HEADER) {
            Some(Section::Additional)
        } else {
            None
        }
    }
}

/// Everything the parser could extract from one resolver run's stdout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedOutput {
    /// Status from the header line, `None` when absent or unrecognized.
    pub status: Option<QueryStatus>,
    pub answer: Vec<DnsRecord>,
    pub authority: Vec<DnsRecord>,
    pub additional: Vec<DnsRecord>,
    pub query_time_ms: Option<u64>,
    pub server: Option<String>,
    /// Lines skipped as malformed.
    pub warnings: usize,
}

impl ParsedOutput {
    fn push(&mut self, section: Section, record: DnsRecord) {
        match section {
            Section::Answer => self.answer.push(record),
            Section::Authority => self.authority.push(record),
            Section::Additional => self.additional.push(record),
            Section::None => {}
        }
    }
}

/// Line-oriented parser for resolver output.
pub struct OutputParser;

impl OutputParser {
    pub fn parse(output: &str, spec: &QuerySpec) -> ParsedOutput {
        let parsed = if spec.flags.short_form {
            Self::parse_short(output, spec)
        } else {
            Self::parse_sections(output)
        };

        debug!(
            query = %spec,
            answer = parsed.answer.len(),
            authority = parsed.authority.len(),
            additional = parsed.additional.len(),
            warnings = parsed.warnings,
            "Resolver output parsed"
        );
        parsed
    }

    fn parse_sections(output: &str) -> ParsedOutput {
        let mut parsed = ParsedOutput::default();

        // minimal and trace output carry no headers: every record is an answer
        let has_headers = output
            .lines()
            .any(|line| line.trim_start().starts_with(';') && Section::from_header(line).is_some());
        let mut section = if has_headers {
            Section::None
        } else {
            Section::Answer
        };

        for line in output.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if line.starts_with(';') {
                if let Some(next) = Section::from_header(line) {
                    section = next;
                } else {
                    Self::read_metadata(line, &mut parsed);
                }
                continue;
            }

            if section == Section::None {
                continue;
            }

            match parse_record_line(line) {
                Ok(record) => parsed.push(section, record),
                Err(e) => {
                    warn!(line = %line, error = %e, "Skipping malformed resolver output line");
                    parsed.warnings += 1;
                }
            }
        }

        parsed
    }

    fn parse_short(output: &str, spec: &QuerySpec) -> ParsedOutput {
        let mut parsed = ParsedOutput::default();
        let record_type = if spec.flags.reverse {
            RecordType::PTR
        } else {
            spec.record_type
        };

        for line in output.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            let record = if record_type.has_priority() {
                let mut fields = line.split_whitespace();
                let priority = fields.next().and_then(|p| p.parse::<u16>().ok());
                match (priority, fields.next()) {
                    (Some(priority), Some(exchange)) => {
                        DnsRecord::new(spec.domain.to_string(), 0, record_type, strip_root(exchange))
                            .with_priority(priority)
                    }
                    _ => {
                        warn!(line = %line, "Skipping short-form line without priority and value");
                        parsed.warnings += 1;
                        continue;
                    }
                }
            } else {
                DnsRecord::new(spec.domain.to_string(), 0, record_type, strip_root(line))
            };
            parsed.answer.push(record);
        }

        parsed
    }

    fn read_metadata(line: &str, parsed: &mut ParsedOutput) {
        if parsed.status.is_none() {
            if let Some(rest) = after(line, "status:") {
                parsed.status = rest.split_whitespace().next().and_then(status_from_token);
            }
        }

        if let Some(rest) = after(line, "Query time:") {
            parsed.query_time_ms = rest
                .split_whitespace()
                .next()
                .and_then(|ms| ms.parse().ok());
        }

        if let Some(rest) = after(line, "SERVER:") {
            let server = rest
                .split(|c: char| c == '#' || c.is_whitespace())
                .next()
                .unwrap_or_default();
            if !server.is_empty() {
                parsed.server = Some(server.to_string());
            }
        }
    }
}

fn after<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.find(marker)
        .map(|idx| line[idx + marker.len()..].trim_start())
}
