use std::path::Path;

use anyhow::Context;
use common::{Authorizer, Transaction, TransactionStore};

pub struct AppState {
    pub store: TransactionStore,
    pub authorizer: Box<dyn Authorizer>,
}

impl AppState {
    pub fn new(store: TransactionStore, authorizer: impl Authorizer + 'static) -> Self {
        AppState {
            store,
            authorizer: Box::new(authorizer),
        }
    }

    /// Builds the store from the XML export. An unreadable or inconsistent
    /// export is logged and the service starts with no records.
    pub async fn load_store<P: AsRef<Path>>(xml_path: P) -> TransactionStore {
        let xml_path = xml_path.as_ref();
        let loaded = Transaction::load_from_xml(xml_path)
            .await
            .and_then(|transactions| {
                TransactionStore::from_records(transactions)
                    .context("Initial transaction records are inconsistent")
            });

        match loaded {
            Ok(store) => store,
            Err(e) => {
                log::error!(
                    "Failed to load transactions from `{}`: {:#}",
                    xml_path.display(),
                    e
                );
                TransactionStore::new()
            }
        }
    }
}
