use actix_web::{HttpResponse, delete, get, post, put, web};
use common::{NewTransaction, Transaction, TransactionPatch};
use serde::Serialize;
use serde_json::Value;

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct TransactionList {
    transactions: Vec<Transaction>,
    count: usize,
}

#[derive(Debug, Serialize)]
struct DeleteConfirmation {
    message: String,
    status_code: u16,
}

/// Integer ids too large for the store cannot match a record, so they are
/// not found rather than malformed.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    if let Ok(id) = raw.parse::<i64>() {
        return Ok(id);
    }

    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        log::warn!("Transaction ID out of range: {}", raw);
        return Err(ApiError::RecordNotFound(raw.to_string()));
    }

    log::warn!("Invalid transaction ID in path: {}", raw);
    Err(ApiError::BadRequest("Invalid transaction ID format".to_string()))
}

fn parse_body(body: &[u8]) -> Result<Value, ApiError> {
    if body.is_empty() {
        return Err(ApiError::BadRequest("Invalid JSON data".to_string()));
    }
    serde_json::from_slice(body).map_err(|e| {
        log::warn!("Failed to parse JSON body: {}", e);
        ApiError::BadRequest("Invalid JSON data".to_string())
    })
}

#[get("/transactions")]
pub async fn list_transactions(app_state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let transactions = app_state.store.list().await;
    let count = transactions.len();

    Ok(HttpResponse::Ok().json(TransactionList {
        transactions,
        count,
    }))
}

#[get("/transactions/{id}")]
pub async fn get_transaction(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path)?;
    let transaction = app_state.store.get(id).await.map_err(|e| {
        log::warn!("Failed to get transaction {}: {}", id, e);
        ApiError::from(e)
    })?;

    Ok(HttpResponse::Ok().json(transaction))
}

#[post("/transactions")]
pub async fn create_transaction(
    body: web::Bytes,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let payload = parse_body(&body)?;
    let draft = NewTransaction::from_json(&payload)?;

    let created = app_state.store.create(draft).await?;
    log::info!("Transaction {} created", created.id);

    Ok(HttpResponse::Created().json(created))
}

#[put("/transactions/{id}")]
pub async fn update_transaction(
    path: web::Path<String>,
    body: web::Bytes,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path)?;
    let payload = parse_body(&body)?;
    let patch = TransactionPatch::from_json(&payload)?;

    let updated = app_state.store.update(id, patch).await.map_err(|e| {
        log::warn!("Failed to update transaction {}: {}", id, e);
        ApiError::from(e)
    })?;
    log::info!("Transaction {} updated", id);

    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/transactions/{id}")]
pub async fn delete_transaction(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path)?;
    app_state.store.delete(id).await.map_err(|e| {
        log::warn!("Failed to delete transaction {}: {}", id, e);
        ApiError::from(e)
    })?;
    log::info!("Transaction {} deleted", id);

    Ok(HttpResponse::Ok().json(DeleteConfirmation {
        message: format!("Transaction {} deleted successfully", id),
        status_code: 200,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_ids() {
        assert_eq!(parse_id("4").unwrap(), 4);
        assert_eq!(parse_id("-1").unwrap(), -1);
    }

    #[test]
    fn oversized_integer_ids_are_not_found() {
        for raw in ["99999999999999999999", "-99999999999999999999"] {
            match parse_id(raw) {
                Err(ApiError::RecordNotFound(id)) => assert_eq!(id, raw),
                other => panic!("expected RecordNotFound for {raw}, got {other:?}"),
            }
        }
    }

    #[test]
    fn non_integer_ids_are_bad_requests() {
        for raw in ["abc", "12a", "1.5", "-", ""] {
            assert!(matches!(parse_id(raw), Err(ApiError::BadRequest(_))));
        }
    }
}
