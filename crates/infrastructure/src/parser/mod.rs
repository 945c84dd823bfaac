pub mod classify;
pub mod output_parser;
pub mod record_line;

pub use classify::{classify, status_from_token};
pub use output_parser::{OutputParser, ParsedOutput};
pub use record_line::{parse_record_line, RecordLineError};
