use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Transfer,
    Payment,
}

impl TransactionType {
    pub const ALL: [TransactionType; 4] = [
        TransactionType::Deposit,
        TransactionType::Withdrawal,
        TransactionType::Transfer,
        TransactionType::Payment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
            TransactionType::Transfer => "transfer",
            TransactionType::Payment => "payment",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransactionType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new(format!(
                    "Invalid transaction type '{}'. \
                     Must be one of: deposit, withdrawal, transfer, payment",
                    s
                ))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 3] = [
        TransactionStatus::Completed,
        TransactionStatus::Pending,
        TransactionStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransactionStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new(format!(
                    "Invalid transaction status '{}'. Must be one of: completed, pending, failed",
                    s
                ))
            })
    }
}

/// A stored mobile-money transaction. The `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: u64,
    pub sender: String,
    pub receiver: String,
    pub timestamp: String, // ISO-8601, kept verbatim
    pub status: TransactionStatus,
    pub description: String,
}

impl Transaction {
    pub fn new(id: i64, draft: NewTransaction) -> Self {
        Transaction {
            id,
            kind: draft.kind,
            amount: draft.amount,
            sender: draft.sender,
            receiver: draft.receiver,
            timestamp: draft.timestamp,
            status: draft.status,
            description: draft.description,
        }
    }

    /// Overwrites the fields present in `patch`. The id never changes.
    pub fn apply(&mut self, patch: TransactionPatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(sender) = patch.sender {
            self.sender = sender;
        }
        if let Some(receiver) = patch.receiver {
            self.receiver = receiver;
        }
        if let Some(timestamp) = patch.timestamp {
            self.timestamp = timestamp;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}

/// Every field of a transaction except the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub kind: TransactionType,
    pub amount: u64,
    pub sender: String,
    pub receiver: String,
    pub timestamp: String,
    pub status: TransactionStatus,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionPatch {
    pub kind: Option<TransactionType>,
    pub amount: Option<u64>,
    pub sender: Option<String>,
    pub receiver: Option<String>,
    pub timestamp: Option<String>,
    pub status: Option<TransactionStatus>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction {
            id: 3,
            kind: TransactionType::Transfer,
            amount: 5000,
            sender: "250788111111".into(),
            receiver: "250788222222".into(),
            timestamp: "2024-02-01T08:30:00".into(),
            status: TransactionStatus::Pending,
            description: "Rent".into(),
        }
    }

    #[test]
    fn enum_names_round_trip_through_from_str() {
        for kind in TransactionType::ALL {
            assert_eq!(kind.as_str().parse::<TransactionType>().unwrap(), kind);
        }
        for status in TransactionStatus::ALL {
            assert_eq!(status.as_str().parse::<TransactionStatus>().unwrap(), status);
        }
        assert!("Deposit".parse::<TransactionType>().is_err());
        assert!("done".parse::<TransactionStatus>().is_err());
    }

    #[test]
    fn serializes_kind_as_type_field() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["type"], "transfer");
        assert_eq!(value["status"], "pending");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn apply_overwrites_only_present_fields() {
        let before = sample();
        let mut after = before.clone();
        after.apply(TransactionPatch {
            amount: Some(999),
            ..Default::default()
        });

        assert_eq!(after.amount, 999);
        assert_eq!(
            Transaction {
                amount: before.amount,
                ..after.clone()
            },
            before
        );
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let before = sample();
        let mut after = before.clone();
        after.apply(TransactionPatch::default());
        assert_eq!(after, before);
    }
}
