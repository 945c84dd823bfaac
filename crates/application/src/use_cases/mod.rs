pub mod submit_batch;
pub mod submit_comparison;
pub mod submit_query;

pub use submit_batch::SubmitBatchUseCase;
pub use submit_comparison::{ComparisonReport, SubmitComparisonUseCase};
pub use submit_query::SubmitQueryUseCase;
