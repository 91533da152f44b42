use std::collections::HashMap;

use tracing::debug;

use crate::{
    account::{Account, AccountId},
    command::{LedgerCommand, LedgerCommandKind},
    transaction::Amount,
    transfer::{Transfer, TransferError},
};

use super::{LedgerProcessError, LedgerProcessor};

#[derive(Default)]
pub struct InMemoryLedgerProcessor {
    pub accounts: HashMap<AccountId, Account>,
    pub transfer: Transfer,
}

impl InMemoryLedgerProcessor {
    pub fn with_transfer(transfer: Transfer) -> Self {
        Self {
            accounts: HashMap::new(),
            transfer,
        }
    }

    fn make_transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        sum: Amount,
    ) -> Result<(), LedgerProcessError> {
        if from == to {
            return Err(TransferError::SelfTransfer { id: from }.into());
        }
        // the source account was looked up while parsing the command
        let [Some(from_acc), Some(to_acc)] = self.accounts.get_disjoint_mut([&from, &to]) else {
            return Err(LedgerProcessError::UnknownCounterparty { id: to });
        };
        if self.transfer.make(from_acc, to_acc, sum)? {
            Ok(())
        } else {
            Err(LedgerProcessError::Declined { from, to, sum })
        }
    }
}

impl LedgerProcessor for InMemoryLedgerProcessor {
    fn process_command(
        &mut self,
        id: AccountId,
        kind: LedgerCommandKind,
        counterparty: Option<AccountId>,
        amount: Option<Amount>,
        description: Option<String>,
    ) -> Result<(), LedgerProcessError> {
        let cmd = LedgerCommand::parse_command(
            self.accounts.get(&id),
            id,
            kind,
            counterparty,
            amount,
            description,
        )?;
        debug!(?cmd, "processing command");
        match cmd {
            LedgerCommand::Open { id, balance } => {
                self.accounts.insert(id, Account::new(id, balance));
            }
            LedgerCommand::Record { id, record } => {
                // presence checked while parsing
                if let Some(acc) = self.accounts.get_mut(&id) {
                    acc.lock()?;
                    let recorded = acc.add_transaction(record);
                    acc.unlock()?;
                    recorded?;
                }
            }
            LedgerCommand::Adjust { id, diff } => {
                if let Some(acc) = self.accounts.get_mut(&id) {
                    acc.change_balance(diff)?;
                }
            }
            LedgerCommand::Transfer { from, to, sum } => self.make_transfer(from, to, sum)?,
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{account::AccountError, command::LedgerCommandError};

    use super::*;

    fn open(processor: &mut InMemoryLedgerProcessor, id: AccountId, balance: Amount) {
        processor
            .process_command(id, LedgerCommandKind::Open, None, Some(balance), None)
            .unwrap();
    }

    #[test]
    fn process_some_commands() {
        let mut processor = InMemoryLedgerProcessor::default();
        open(&mut processor, 1, 1000);
        open(&mut processor, 2, 500);
        assert_eq!(processor.accounts.len(), 2);

        processor
            .process_command(
                1,
                LedgerCommandKind::Record,
                None,
                Some(-200),
                Some("rent".to_string()),
            )
            .unwrap();
        processor
            .process_command(2, LedgerCommandKind::Adjust, None, Some(50), None)
            .unwrap();
        processor
            .process_command(1, LedgerCommandKind::Transfer, Some(2), Some(300), None)
            .unwrap();

        let a1 = processor.accounts.get(&1).unwrap();
        assert_eq!(a1.balance(), 1000 - 200 - 301);
        assert_eq!(a1.transaction_history().len(), 2);
        assert!(!a1.is_locked());

        let a2 = processor.accounts.get(&2).unwrap();
        assert_eq!(a2.balance(), 500 + 50 + 300);
        assert_eq!(a2.transaction_history().len(), 1);

        let err = processor
            .process_command(1, LedgerCommandKind::Open, None, Some(10), None)
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerProcessError::CommandErr(LedgerCommandError::DuplicateAccount { id: 1 })
        ));
    }

    #[test]
    fn declined_and_invalid_transfers() {
        let mut processor = InMemoryLedgerProcessor::with_transfer(Transfer::new(1));
        open(&mut processor, 1, 1000);
        open(&mut processor, 2, 500);

        let err = processor
            .process_command(1, LedgerCommandKind::Transfer, Some(2), Some(10000), None)
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerProcessError::Declined {
                from: 1,
                to: 2,
                sum: 10000
            }
        ));
        assert_eq!(processor.accounts[&1].balance(), 1000);
        assert_eq!(processor.accounts[&2].balance(), 500);

        let err = processor
            .process_command(1, LedgerCommandKind::Transfer, Some(1), Some(500), None)
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerProcessError::TransferErr(TransferError::SelfTransfer { id: 1 })
        ));

        let err = processor
            .process_command(1, LedgerCommandKind::Transfer, Some(2), Some(-5), None)
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerProcessError::TransferErr(TransferError::NegativeSum { sum: -5 })
        ));

        let err = processor
            .process_command(1, LedgerCommandKind::Transfer, Some(9), Some(500), None)
            .unwrap_err();
        assert!(matches!(err, LedgerProcessError::UnknownCounterparty { id: 9 }));
        assert_eq!(processor.accounts[&1].balance(), 1000);
    }

    #[test]
    fn overflowing_commands_are_rejected() {
        let mut processor = InMemoryLedgerProcessor::default();
        open(&mut processor, 1, Amount::MAX);

        let err = processor
            .process_command(1, LedgerCommandKind::Adjust, None, Some(1), None)
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerProcessError::AccountErr(AccountError::BalanceOverflow { id: 1, diff: 1 })
        ));

        let err = processor
            .process_command(
                1,
                LedgerCommandKind::Record,
                None,
                Some(7),
                Some("interest".to_string()),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerProcessError::AccountErr(AccountError::BalanceOverflow { id: 1, diff: 7 })
        ));

        let acc = &processor.accounts[&1];
        assert_eq!(acc.balance(), Amount::MAX);
        assert!(acc.transaction_history().is_empty());
        // the failed record released its lock
        assert!(!acc.is_locked());
    }
}
