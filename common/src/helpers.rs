use std::path::Path;

use anyhow::Context;
use tokio::io::AsyncWriteExt;

use crate::schema::Transaction;

/// Writes the records as a pretty-printed JSON array, replacing the file.
pub async fn save_to_json<P: AsRef<Path>>(
    transactions: &[Transaction],
    file_path: P,
) -> anyhow::Result<()> {
    let path = file_path.as_ref();
    let data =
        serde_json::to_vec_pretty(transactions).context("Failed to serialize transactions")?;

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .await
        .with_context(|| format!("Failed to open `{}`", path.display()))?;
    file.write_all(&data)
        .await
        .with_context(|| format!("Failed to write to `{}`", path.display()))?;
    file.flush().await.context("Failed to flush JSON output")?;

    log::info!("Saved {} transactions to {}", transactions.len(), path.display());
    Ok(())
}
