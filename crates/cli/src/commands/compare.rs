use super::{print_json, run::drive};
use crate::di::UseCases;
use clap::Args;
use digger_domain::{QueryFlags, RecordType};
use tracing::{info, warn};

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Domain to look up on every server
    pub domain: String,

    /// Servers to compare; repeat for each one
    #[arg(short = 's', long = "server", required = true)]
    pub servers: Vec<String>,

    /// Record type
    #[arg(short = 't', long = "type", default_value = "A")]
    pub record_type: RecordType,

    /// Request DNSSEC records
    #[arg(long)]
    pub dnssec: bool,
}

pub async fn run(use_cases: &UseCases, args: CompareArgs) -> anyhow::Result<()> {
    let flags = QueryFlags {
        dnssec: args.dnssec,
        ..QueryFlags::default()
    };

    let handle = use_cases
        .comparison
        .execute(&args.domain, args.record_type, &args.servers, flags)
        .await?;
    let report = drive(handle).await;

    if report.comparison.discrepancy_found {
        warn!(domain = %args.domain, "Servers returned different answers");
    }
    info!(
        state = ?report.state,
        successes = report.comparison.successes(),
        failures = report.comparison.failures(),
        "Comparison finished"
    );
    print_json(&report)
}
