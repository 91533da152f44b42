use std::io::Read;

use crate::{account::AccountId, command::LedgerCommandKind, transaction::Amount};
use csv::{DeserializeRecordsIntoIter, Trim};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LedgerRow {
    #[serde(rename = "type")]
    pub kind: LedgerCommandKind,
    pub account: AccountId,
    pub counterparty: Option<AccountId>,
    pub amount: Option<Amount>,
    pub description: Option<String>,
}

/// Parses ledger commands in CSV format, yielding each row with its line number.
pub struct CsvLedgerParser<R> {
    iter: DeserializeRecordsIntoIter<R, LedgerRow>,
}

impl<R> CsvLedgerParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvLedgerParser<R>
where
    R: Read,
{
    type Item = (u64, csv::Result<LedgerRow>);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row))
    }
}
