use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::errors::ValidationError;
use crate::schema::{Transaction, TransactionStatus, TransactionType};

#[derive(Debug, Deserialize)]
struct XmlDocument {
    #[serde(rename = "transaction", default)]
    transactions: Vec<XmlTransaction>,
}

/// A `<transaction id="..">` element exactly as it appears in the export.
#[derive(Debug, Deserialize)]
struct XmlTransaction {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "type")]
    kind: String,
    amount: String,
    sender: String,
    receiver: String,
    timestamp: String,
    status: String,
    #[serde(default)]
    description: String,
}

impl TryFrom<XmlTransaction> for Transaction {
    type Error = ValidationError;

    fn try_from(raw: XmlTransaction) -> Result<Self, Self::Error> {
        let id = raw
            .id
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| {
                ValidationError::new(format!("Invalid transaction id attribute '{}'", raw.id))
            })?;
        let amount = raw.amount.trim().parse::<u64>().map_err(|_| {
            ValidationError::new(format!(
                "Transaction {}: amount '{}' is not a non-negative integer",
                id, raw.amount
            ))
        })?;
        let in_record =
            |e: ValidationError| ValidationError::new(format!("Transaction {}: {}", id, e));
        let kind = raw
            .kind
            .trim()
            .parse::<TransactionType>()
            .map_err(in_record)?;
        let status = raw
            .status
            .trim()
            .parse::<TransactionStatus>()
            .map_err(in_record)?;

        Ok(Transaction {
            id,
            kind,
            amount,
            sender: raw.sender,
            receiver: raw.receiver,
            timestamp: raw.timestamp,
            status,
            description: raw.description,
        })
    }
}

impl Transaction {
    /// Parses an SMS export document. Records that fail the field checks are
    /// logged and skipped; a malformed document is an error.
    pub fn parse_xml(content: &str) -> anyhow::Result<Vec<Transaction>> {
        let document: XmlDocument =
            quick_xml::de::from_str(content).context("Invalid transaction XML document")?;

        let mut transactions = Vec::with_capacity(document.transactions.len());
        for raw in document.transactions {
            match Transaction::try_from(raw) {
                Ok(transaction) => transactions.push(transaction),
                Err(e) => {
                    log::error!("Skipping transaction record: {}", e);
                    continue;
                }
            }
        }
        Ok(transactions)
    }

    pub async fn load_from_xml<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Transaction>> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read `{}`", path.display()))?;
        let transactions = Transaction::parse_xml(&content)
            .with_context(|| format!("Failed to parse `{}`", path.display()))?;
        log::debug!(
            "Loaded {} transactions from {}",
            transactions.len(),
            path.display()
        );
        Ok(transactions)
    }
}
