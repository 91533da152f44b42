use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    account::{Account, AccountError, AccountId},
    transaction::{Amount, TransactionRecord},
};

pub const MIN_TRANSFER_SUM: Amount = 100;
pub const DEFAULT_FEE: u32 = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransferError {
    #[error("Cannot transfer to self (account {id})")]
    SelfTransfer { id: AccountId },
    #[error("Transfer sum must not be negative, got {sum}")]
    NegativeSum { sum: Amount },
    #[error("Sum {sum} is below minimum transfer amount of {}", MIN_TRANSFER_SUM)]
    BelowMinimum { sum: Amount },
    #[error("Sum {sum} plus fee {fee} exceeds the largest representable amount")]
    SumOverflow { sum: Amount, fee: u32 },
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

/// The side of an account a [`Transfer`] needs to see.
///
/// [`Account`] is the only implementation shipped with the crate.
pub trait TransferParty {
    fn id(&self) -> AccountId;
    fn balance(&self) -> Amount;
    fn add_transaction(&mut self, record: TransactionRecord) -> Result<(), AccountError>;
    fn lock(&mut self) -> Result<(), AccountError>;
    fn unlock(&mut self) -> Result<(), AccountError>;
}

impl TransferParty for Account {
    fn id(&self) -> AccountId {
        Account::id(self)
    }

    fn balance(&self) -> Amount {
        Account::balance(self)
    }

    fn add_transaction(&mut self, record: TransactionRecord) -> Result<(), AccountError> {
        Account::add_transaction(self, record)
    }

    fn lock(&mut self) -> Result<(), AccountError> {
        Account::lock(self)
    }

    fn unlock(&mut self) -> Result<(), AccountError> {
        Account::unlock(self)
    }
}

/// Moves funds between two accounts, charging the source a fixed fee.
#[derive(Debug, Clone)]
pub struct Transfer {
    fee: u32,
}

impl Default for Transfer {
    fn default() -> Self {
        Self { fee: DEFAULT_FEE }
    }
}

impl Transfer {
    pub fn new(fee: u32) -> Self {
        Self { fee }
    }

    pub fn fee(&self) -> u32 {
        self.fee
    }

    pub fn set_fee(&mut self, fee: u32) {
        self.fee = fee;
    }

    /// Checks a transfer request without touching either account.
    ///
    /// Returns `Ok(false)` when the fee would eat the whole transferable sum.
    pub fn validate(
        &self,
        from_id: AccountId,
        to_id: AccountId,
        sum: Amount,
    ) -> Result<bool, TransferError> {
        if from_id == to_id {
            return Err(TransferError::SelfTransfer { id: from_id });
        }
        if sum < 0 {
            return Err(TransferError::NegativeSum { sum });
        }
        if sum < MIN_TRANSFER_SUM {
            return Err(TransferError::BelowMinimum { sum });
        }
        Ok(Amount::from(self.fee) * 2 < sum)
    }

    /// Transfers `sum` from `from` to `to`.
    ///
    /// Both accounts are locked source first. The destination is credited
    /// before the source is checked for funds; when the source cannot cover
    /// `sum + fee` the credit is reversed and `Ok(false)` is returned. The
    /// destination history keeps both the credit and its reversal.
    ///
    /// A credit that would overflow the destination balance fails before
    /// anything is recorded. Both accounts are unlocked on every path past
    /// locking.
    pub fn make(
        &self,
        from: &mut impl TransferParty,
        to: &mut impl TransferParty,
        sum: Amount,
    ) -> Result<bool, TransferError> {
        if !self.validate(from.id(), to.id(), sum)? {
            debug!(
                from = from.id(),
                to = to.id(),
                sum,
                fee = self.fee,
                "fee too high for transfer"
            );
            return Ok(false);
        }

        from.lock()?;
        if let Err(err) = to.lock() {
            from.unlock()?;
            return Err(err.into());
        }

        let outcome = self.apply(from, to, sum);

        to.unlock()?;
        from.unlock()?;
        outcome
    }

    fn apply(
        &self,
        from: &mut impl TransferParty,
        to: &mut impl TransferParty,
        sum: Amount,
    ) -> Result<bool, TransferError> {
        let (from_id, to_id) = (from.id(), to.id());
        let debit = sum
            .checked_add(Amount::from(self.fee))
            .ok_or(TransferError::SumOverflow { sum, fee: self.fee })?;

        let credit = TransactionRecord::new(sum, format!("transfer from account {from_id}"));
        debug!(to = to_id, record = %credit, "crediting destination");
        to.add_transaction(credit)?;
        debug!(to = to_id, balance = to.balance(), "destination credited");

        if from.balance() < debit {
            let reversal =
                TransactionRecord::new(-sum, format!("rollback of transfer from account {from_id}"));
            warn!(
                from = from_id,
                to = to_id,
                balance = from.balance(),
                record = %reversal,
                "insufficient funds, transfer rolled back"
            );
            to.add_transaction(reversal)?;
            return Ok(false);
        }

        let charge = TransactionRecord::new(
            -debit,
            format!("transfer to account {to_id} (fee {})", self.fee),
        );
        info!(from = from_id, to = to_id, record = %charge, "transfer completed");
        from.add_transaction(charge)?;
        Ok(true)
    }
}
