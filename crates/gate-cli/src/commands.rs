use anyhow::{Context, Result};
use comfy_table::Table;

use gate_cli::pipeline::{VerifyReport, run_verify};
use gate_client::{GateConfig, GiskardClient};
use gate_model::credit_schema;

use crate::cli::VerifyArgs;
use crate::summary::apply_table_style;

/// Run the verification pipeline against the real service.
///
/// Configuration is validated before any artifact or network work so a
/// misconfigured environment fails with one message naming every missing
/// variable.
pub fn run_verify_command(args: &VerifyArgs) -> Result<VerifyReport> {
    let config = GateConfig::from_env().context("load gate configuration")?;
    let client = GiskardClient::new(&config).context("build service client")?;
    run_verify(&client, &config, &args.model_root)
}

/// Print the declared dataset schema.
pub fn run_columns() -> Result<()> {
    let schema = credit_schema();
    let mut table = Table::new();
    table.set_header(vec!["Column", "Kind", "Role"]);
    apply_table_style(&mut table);
    for (name, kind) in schema.columns() {
        let role = if name == schema.target() {
            "target"
        } else {
            "feature"
        };
        table.add_row(vec![name, kind.as_str(), role]);
    }
    println!("{table}");
    Ok(())
}
