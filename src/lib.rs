/// Immutable amount plus description entries kept in an account history.
pub mod transaction;

/// Account balance, history and the cooperative lock flag.
pub mod account;

/// Funds transfer between two accounts with a fee and rollback on
/// insufficient funds.
pub mod transfer;

/// Ledger commands parsed from raw input rows, later executed by [`processor`].
pub mod command;

/// Ledger processor interface, plus "in memory" implementation.
/// Owns the accounts and routes commands to them.
pub mod processor;

/// CSV replay of ledger commands. Lives in the library so that the
/// integration tests can drive it directly.
pub mod bin_utils;
