use std::io::Write;

use crate::{account::AccountId, transaction::Amount};
use anyhow::Context;
use csv::Writer;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AccountRow {
    pub account: AccountId,
    pub balance: Amount,
    pub locked: bool,
    pub transactions: usize,
}

pub fn print_accounts<W>(
    output: &mut W,
    accounts: impl Iterator<Item = AccountRow>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for row in accounts {
        writer
            .serialize(&row)
            .with_context(|| format!("Failed to write account {} to CSV", row.account))?;
    }
    writer.flush().context("Failed to flush account CSV")
}
