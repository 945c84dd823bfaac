pub mod parser;
pub mod resolver;

pub use parser::{OutputParser, ParsedOutput};
pub use resolver::{AvailabilityCache, DigExecutor};
