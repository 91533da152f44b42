use thiserror::Error;

use crate::{
    account::{AccountError, AccountId},
    command::{LedgerCommandError, LedgerCommandKind},
    transaction::Amount,
    transfer::TransferError,
};

pub mod in_memory_processor;

#[derive(Debug, Error)]
pub enum LedgerProcessError {
    #[error(transparent)]
    CommandErr(#[from] LedgerCommandError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
    #[error(transparent)]
    TransferErr(#[from] TransferError),
    #[error("Counterparty account {id} does not exist")]
    UnknownCounterparty { id: AccountId },
    #[error("Transfer of {sum} from account {from} to account {to} was declined")]
    Declined {
        from: AccountId,
        to: AccountId,
        sum: Amount,
    },
}

pub trait LedgerProcessor {
    fn process_command(
        &mut self,
        id: AccountId,
        kind: LedgerCommandKind,
        counterparty: Option<AccountId>,
        amount: Option<Amount>,
        description: Option<String>,
    ) -> Result<(), LedgerProcessError>;
}
