use serde_json::{Map, Value};

use crate::errors::ValidationError;
use crate::schema::{NewTransaction, TransactionPatch, TransactionStatus, TransactionType};

/// Fields a create payload must carry. `id` is never accepted from clients.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "type",
    "amount",
    "sender",
    "receiver",
    "timestamp",
    "status",
    "description",
];

fn as_object(payload: &Value) -> Result<&Map<String, Value>, ValidationError> {
    payload
        .as_object()
        .ok_or_else(|| ValidationError::new("Request body must be a JSON object"))
}

fn string_field(
    fields: &Map<String, Value>,
    name: &str,
) -> Result<Option<String>, ValidationError> {
    match fields.get(name) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::new(format!("Field '{}' must be a string", name))),
    }
}

fn amount_field(fields: &Map<String, Value>) -> Result<Option<u64>, ValidationError> {
    match fields.get("amount") {
        None => Ok(None),
        Some(Value::Number(n)) if n.as_u64().is_some() => Ok(n.as_u64()),
        Some(_) => Err(ValidationError::new("Field 'amount' must be a non-negative integer")),
    }
}

fn kind_field(fields: &Map<String, Value>) -> Result<Option<TransactionType>, ValidationError> {
    string_field(fields, "type")?
        .map(|s| s.parse::<TransactionType>())
        .transpose()
}

fn status_field(
    fields: &Map<String, Value>,
) -> Result<Option<TransactionStatus>, ValidationError> {
    string_field(fields, "status")?
        .map(|s| s.parse::<TransactionStatus>())
        .transpose()
}

impl NewTransaction {
    /// Checks a create payload: object shape, every required field present,
    /// enum membership and a non-negative integer amount.
    pub fn from_json(payload: &Value) -> Result<Self, ValidationError> {
        let fields = as_object(payload)?;

        let missing: Vec<&str> = REQUIRED_FIELDS
            .into_iter()
            .filter(|name| !fields.contains_key(*name))
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::new(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let patch = TransactionPatch::from_fields(fields)?;
        match patch {
            TransactionPatch {
                kind: Some(kind),
                amount: Some(amount),
                sender: Some(sender),
                receiver: Some(receiver),
                timestamp: Some(timestamp),
                status: Some(status),
                description: Some(description),
            } => Ok(NewTransaction {
                kind,
                amount,
                sender,
                receiver,
                timestamp,
                status,
                description,
            }),
            _ => Err(ValidationError::new("Transaction payload is incomplete")),
        }
    }
}

impl TransactionPatch {
    /// Checks an update payload. Any subset of fields is allowed; `id` and
    /// unknown keys are ignored.
    pub fn from_json(payload: &Value) -> Result<Self, ValidationError> {
        TransactionPatch::from_fields(as_object(payload)?)
    }

    fn from_fields(fields: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(TransactionPatch {
            kind: kind_field(fields)?,
            amount: amount_field(fields)?,
            sender: string_field(fields, "sender")?,
            receiver: string_field(fields, "receiver")?,
            timestamp: string_field(fields, "timestamp")?,
            status: status_field(fields)?,
            description: string_field(fields, "description")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "type": "deposit",
            "amount": 2500,
            "sender": "250788000001",
            "receiver": "250788000002",
            "timestamp": "2024-03-10T12:00:00",
            "status": "completed",
            "description": "Cash in"
        })
    }

    #[test]
    fn accepts_complete_payload() {
        let draft = NewTransaction::from_json(&full_payload()).unwrap();
        assert_eq!(draft.kind, TransactionType::Deposit);
        assert_eq!(draft.amount, 2500);
        assert_eq!(draft.status, TransactionStatus::Completed);
        assert_eq!(draft.description, "Cash in");
    }

    #[test]
    fn names_every_missing_field() {
        let err =
            NewTransaction::from_json(&json!({"type": "deposit", "amount": 1})).unwrap_err();
        assert_eq!(
            err.message(),
            "Missing required fields: sender, receiver, timestamp, status, description"
        );
    }

    #[test]
    fn rejects_non_object_body() {
        let err = NewTransaction::from_json(&json!([1, 2])).unwrap_err();
        assert_eq!(err.message(), "Request body must be a JSON object");
        assert!(TransactionPatch::from_json(&json!("text")).is_err());
    }

    #[test]
    fn rejects_values_outside_enumerations() {
        let mut payload = full_payload();
        payload["type"] = json!("airtime");
        let err = NewTransaction::from_json(&payload).unwrap_err();
        assert!(err.message().contains("Invalid transaction type 'airtime'"));

        let mut payload = full_payload();
        payload["status"] = json!("reversed");
        let err = NewTransaction::from_json(&payload).unwrap_err();
        assert!(err.message().contains("Invalid transaction status 'reversed'"));
    }

    #[test]
    fn amount_must_be_non_negative_integer() {
        for bad in [json!(-5), json!(12.5), json!("100"), json!(null)] {
            let mut payload = full_payload();
            payload["amount"] = bad;
            let err = NewTransaction::from_json(&payload).unwrap_err();
            assert_eq!(err.message(), "Field 'amount' must be a non-negative integer");
        }
    }

    #[test]
    fn string_fields_must_be_strings() {
        let mut payload = full_payload();
        payload["sender"] = json!(250788000001u64);
        let err = NewTransaction::from_json(&payload).unwrap_err();
        assert_eq!(err.message(), "Field 'sender' must be a string");
    }

    #[test]
    fn client_supplied_id_is_ignored() {
        let mut payload = full_payload();
        payload["id"] = json!(42);
        assert!(NewTransaction::from_json(&payload).is_ok());
    }

    #[test]
    fn patch_keeps_only_supplied_fields() {
        let patch =
            TransactionPatch::from_json(&json!({"amount": 999, "id": 1, "color": "red"})).unwrap();
        assert_eq!(
            patch,
            TransactionPatch {
                amount: Some(999),
                ..Default::default()
            }
        );
        assert_eq!(
            TransactionPatch::from_json(&json!({})).unwrap(),
            TransactionPatch::default()
        );
    }

    #[test]
    fn patch_applies_same_field_checks() {
        assert!(TransactionPatch::from_json(&json!({"status": "unknown"})).is_err());
        assert!(TransactionPatch::from_json(&json!({"amount": -1})).is_err());
        assert!(TransactionPatch::from_json(&json!({"description": 3})).is_err());
    }
}
