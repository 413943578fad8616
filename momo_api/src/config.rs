use anyhow::Context;
use common::StaticCredentials;

use crate::state::AppState;

const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "password123";

pub struct AppConfig {
    pub transactions_xml: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let transactions_xml =
            lookup("TRANSACTIONS_XML").unwrap_or_else(|| "modified_sms_v2.xml".to_string());

        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("API_PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("API_PORT must be a valid port number, got `{}`", port))?,
            None => 8000,
        };

        let username = lookup("API_USERNAME").unwrap_or_else(|| DEFAULT_USERNAME.to_string());
        let password = lookup("API_PASSWORD").unwrap_or_else(|| DEFAULT_PASSWORD.to_string());

        Ok(Self {
            transactions_xml,
            host,
            port,
            username,
            password,
        })
    }

    pub fn uses_default_credentials(&self) -> bool {
        self.username == DEFAULT_USERNAME && self.password == DEFAULT_PASSWORD
    }

    pub async fn create_app_state(&self) -> AppState {
        let store = AppState::load_store(&self.transactions_xml).await;
        AppState::new(
            store,
            StaticCredentials::new(&self.username, &self.password),
        )
    }
}
