use super::print_json;
use crate::di::UseCases;
use clap::Args;
use digger_domain::{QueryFlags, QuerySpec, RecordType};
use tracing::warn;

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Domain to look up (an IP address with --reverse)
    pub domain: String,

    /// Record type
    #[arg(short = 't', long = "type", default_value = "A")]
    pub record_type: RecordType,

    /// Server to ask instead of the system resolver
    #[arg(short, long)]
    pub server: Option<String>,

    #[command(flatten)]
    pub flags: FlagArgs,
}

#[derive(Args, Debug, Default, Clone, Copy)]
pub struct FlagArgs {
    /// Reverse lookup of an IP address
    #[arg(short = 'x', long)]
    pub reverse: bool,

    /// Follow delegation from the root
    #[arg(long)]
    pub trace: bool,

    /// Terse output, one answer per line
    #[arg(long)]
    pub short: bool,

    /// Request DNSSEC records
    #[arg(long)]
    pub dnssec: bool,
}

impl From<FlagArgs> for QueryFlags {
    fn from(args: FlagArgs) -> Self {
        QueryFlags {
            reverse: args.reverse,
            trace: args.trace,
            short_form: args.short,
            dnssec: args.dnssec,
        }
    }
}

pub async fn run(use_cases: &UseCases, args: QueryArgs) -> anyhow::Result<()> {
    let mut spec = QuerySpec::new(args.domain, args.record_type).with_flags(args.flags.into());
    if let Some(server) = args.server {
        spec = spec.with_server(server);
    }

    let result = use_cases.query.execute(spec).await?;
    if !result.is_success() {
        warn!(
            query = %result.spec,
            status = %result.status,
            "{}",
            result.status.summary()
        );
    }

    print_json(&result)
}
