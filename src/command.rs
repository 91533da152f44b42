use serde::Deserialize;
use thiserror::Error;

use crate::{
    account::{Account, AccountId},
    transaction::{Amount, TransactionRecord},
};

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LedgerCommandKind {
    Open,
    Record,
    Adjust,
    Transfer,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerCommandError {
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: LedgerCommandKind },
    #[error("Counterparty is required for {kind:?}")]
    CounterpartyRequired { kind: LedgerCommandKind },
    #[error("Account {id} must exist for {kind:?}")]
    ExistingAccountRequired {
        id: AccountId,
        kind: LedgerCommandKind,
    },
    #[error("Account {id} is already open")]
    DuplicateAccount { id: AccountId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommand {
    Open {
        id: AccountId,
        balance: Amount,
    },
    Record {
        id: AccountId,
        record: TransactionRecord,
    },
    Adjust {
        id: AccountId,
        diff: Amount,
    },
    Transfer {
        from: AccountId,
        to: AccountId,
        sum: Amount,
    },
}

impl LedgerCommand {
    /// `account` is the current state of the account with id `id`, if any.
    pub fn parse_command(
        account: Option<&Account>,
        id: AccountId,
        kind: LedgerCommandKind,
        counterparty: Option<AccountId>,
        amount: Option<Amount>,
        description: Option<String>,
    ) -> Result<Self, LedgerCommandError> {
        let amount = amount.ok_or(LedgerCommandError::AmountRequired { kind });
        match kind {
            LedgerCommandKind::Open if account.is_some() => {
                Err(LedgerCommandError::DuplicateAccount { id })
            }
            LedgerCommandKind::Open => Ok(Self::Open {
                id,
                balance: amount?,
            }),
            _ if account.is_none() => {
                Err(LedgerCommandError::ExistingAccountRequired { id, kind })
            }
            LedgerCommandKind::Record => Ok(Self::Record {
                id,
                record: TransactionRecord::new(amount?, description.unwrap_or_default()),
            }),
            LedgerCommandKind::Adjust => Ok(Self::Adjust { id, diff: amount? }),
            LedgerCommandKind::Transfer => {
                let to = counterparty.ok_or(LedgerCommandError::CounterpartyRequired { kind })?;
                Ok(Self::Transfer {
                    from: id,
                    to,
                    sum: amount?,
                })
            }
        }
    }
}
