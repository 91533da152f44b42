//! Replays a CSV ledger script against [`InMemoryLedgerProcessor`] and prints
//! the final state of every account.

use std::io::{Read, Write};

use crate::{
    processor::{
        LedgerProcessError, LedgerProcessor, in_memory_processor::InMemoryLedgerProcessor,
    },
    transfer::Transfer,
};
use anyhow::{Context, Result};
use csv_parser::CsvLedgerParser;
use csv_printer::{AccountRow, print_accounts};
pub mod csv_parser;
pub mod csv_printer;

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub transfer: Transfer,
    pub error_printer: Box<dyn FnMut(u64, LedgerProcessError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvLedgerParser::new(self.input);

        let mut processor = InMemoryLedgerProcessor::with_transfer(self.transfer);

        for (line, row) in parser {
            let row = row.with_context(|| format!("Malformed row at line {line}"))?;
            if let Err(err) = processor.process_command(
                row.account,
                row.kind,
                row.counterparty,
                row.amount,
                row.description,
            ) {
                (self.error_printer)(line, err);
            }
        }

        let mut accounts: Vec<_> = processor
            .accounts
            .values()
            .map(|acc| AccountRow {
                account: acc.id(),
                balance: acc.balance(),
                locked: acc.is_locked(),
                transactions: acc.transaction_history().len(),
            })
            .collect();
        accounts.sort_by_key(|row| row.account);

        print_accounts(self.output, accounts.into_iter())
    }
}
