pub mod availability;
pub mod command;
pub mod executor;

pub use availability::AvailabilityCache;
pub use command::build_args;
pub use executor::DigExecutor;
