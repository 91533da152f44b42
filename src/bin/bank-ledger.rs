use std::fs::File;

use anyhow::{Context, Result};
use bank_ledger::{bin_utils::Service, processor::LedgerProcessError, transfer::Transfer};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let filename = args
        .next()
        .context("Expected a file name as the first argument")?;
    let transfer = match args.next() {
        Some(fee) => Transfer::new(
            fee.parse()
                .with_context(|| format!("Invalid fee `{fee}`, expected a non-negative integer"))?,
        ),
        None => Transfer::default(),
    };
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        transfer,
        error_printer: Box::new(|line, err| {
            match err {
                LedgerProcessError::Declined { .. } => {
                    // declined transfers are expected outcomes, the library already logs them
                }
                err => eprintln!("Error at line {line}: {err}"),
            }
        }),
    };
    service.run()
}
