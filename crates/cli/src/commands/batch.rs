use super::{print_json, run::drive};
use crate::di::UseCases;
use anyhow::{anyhow, Context};
use clap::Args;
use digger_application::services::DispatchMode;
use digger_domain::{QuerySpec, RecordType};
use tokio::io::AsyncReadExt;
use tracing::info;

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// File with one query per line (`domain [TYPE] [@server]`), or `-` for stdin
    pub input: String,

    /// Run one query at a time
    #[arg(long)]
    pub sequential: bool,

    /// Initial number of queries in flight
    #[arg(short, long)]
    pub concurrency: Option<usize>,
}

pub async fn run(use_cases: &UseCases, args: BatchArgs) -> anyhow::Result<()> {
    let content = read_input(&args.input).await?;
    let specs = parse_batch(&content)?;

    let mode = if args.sequential {
        DispatchMode::Sequential
    } else {
        DispatchMode::BoundedParallel
    };

    let handle = use_cases.batch.execute(specs, mode, args.concurrency).await?;
    let report = drive(handle).await;

    info!(
        state = ?report.state,
        successes = report.stats.successes,
        failures = report.stats.failures,
        "Batch finished"
    );
    print_json(&report)
}

async fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut content = String::new();
        tokio::io::stdin()
            .read_to_string(&mut content)
            .await
            .context("Failed to read batch from stdin")?;
        Ok(content)
    } else {
        tokio::fs::read_to_string(input)
            .await
            .with_context(|| format!("Failed to read batch file {}", input))
    }
}

/// One spec per non-empty line; `#` starts a comment line.
fn parse_batch(content: &str) -> anyhow::Result<Vec<QuerySpec>> {
    let mut specs = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let domain = fields
            .next()
            .ok_or_else(|| anyhow!("line {}: missing domain", idx + 1))?;

        let mut record_type = RecordType::A;
        let mut server = None;
        for field in fields {
            if let Some(s) = field.strip_prefix('@') {
                server = Some(s);
            } else {
                record_type = field
                    .parse()
                    .map_err(|e: String| anyhow!("line {}: {}", idx + 1, e))?;
            }
        }

        let mut spec = QuerySpec::new(domain, record_type);
        if let Some(server) = server {
            spec = spec.with_server(server);
        }
        specs.push(spec);
    }

    Ok(specs)
}
