use std::fmt;

pub type Amount = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    amount: Amount,
    description: String,
}

impl TransactionRecord {
    pub fn new(amount: Amount, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+} ({})", self.amount, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_records() {
        let record = TransactionRecord::new(500, "Salary");
        assert_eq!(record.amount(), 500);
        assert_eq!(record.description(), "Salary");

        let record = TransactionRecord::new(-300, "Groceries");
        assert_eq!(record.amount(), -300);

        let record = TransactionRecord::new(0, "");
        assert_eq!(record.amount(), 0);
        assert_eq!(record.description(), "");
    }

    #[test]
    fn display_shows_sign() {
        assert_eq!(TransactionRecord::new(25, "tip").to_string(), "+25 (tip)");
        assert_eq!(TransactionRecord::new(-7, "fee").to_string(), "-7 (fee)");
    }
}
