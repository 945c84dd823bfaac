pub mod query_executor;

pub use query_executor::QueryExecutor;
