pub mod batch;
pub mod compare;
pub mod query;
mod run;

use serde_json::to_string_pretty;

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", to_string_pretty(value)?);
    Ok(())
}
