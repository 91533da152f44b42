use thiserror::Error;

use crate::transaction::{Amount, TransactionRecord};

pub type AccountId = u32;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    #[default]
    Unlocked,
    Locked,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Account {id} is already locked")]
    AlreadyLocked { id: AccountId },
    #[error("Account {id} is not locked")]
    NotLocked { id: AccountId },
    #[error("Applying {diff} to account {id} would overflow its balance")]
    BalanceOverflow { id: AccountId, diff: Amount },
}

#[derive(Debug)]
pub struct Account {
    id: AccountId,
    balance: Amount,
    lock: LockState,
    history: Vec<TransactionRecord>,
}

impl Account {
    pub fn new(id: AccountId, balance: Amount) -> Self {
        Self {
            id,
            balance,
            lock: LockState::Unlocked,
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn is_locked(&self) -> bool {
        self.lock == LockState::Locked
    }

    fn checked_balance(&self, diff: Amount) -> Result<Amount, AccountError> {
        self.balance
            .checked_add(diff)
            .ok_or(AccountError::BalanceOverflow { id: self.id, diff })
    }

    /// Adjusts the balance without leaving a trace in the history.
    /// Lock state is not consulted.
    pub fn change_balance(&mut self, diff: Amount) -> Result<(), AccountError> {
        self.balance = self.checked_balance(diff)?;
        Ok(())
    }

    /// Appends `record` to the history and applies its amount.
    /// Nothing is recorded if the balance would overflow.
    ///
    /// Callers are expected to hold the lock while recording, but this is
    /// not checked here.
    pub fn add_transaction(&mut self, record: TransactionRecord) -> Result<(), AccountError> {
        self.balance = self.checked_balance(record.amount())?;
        self.history.push(record);
        Ok(())
    }

    pub fn lock(&mut self) -> Result<(), AccountError> {
        match self.lock {
            LockState::Unlocked => {
                self.lock = LockState::Locked;
                Ok(())
            }
            LockState::Locked => Err(AccountError::AlreadyLocked { id: self.id }),
        }
    }

    pub fn unlock(&mut self) -> Result<(), AccountError> {
        match self.lock {
            LockState::Locked => {
                self.lock = LockState::Unlocked;
                Ok(())
            }
            LockState::Unlocked => Err(AccountError::NotLocked { id: self.id }),
        }
    }

    pub fn transaction_history(&self) -> &[TransactionRecord] {
        &self.history
    }
}
