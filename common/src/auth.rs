use subtle::ConstantTimeEq;

/// Decides whether a username/password pair may use the API.
pub trait Authorizer: Send + Sync {
    fn is_authorized(&self, username: &str, password: &str) -> bool;
}

impl<F> Authorizer for F
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn is_authorized(&self, username: &str, password: &str) -> bool {
        self(username, password)
    }
}

/// A single configured username/password pair, compared byte for byte.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        StaticCredentials {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Authorizer for StaticCredentials {
    fn is_authorized(&self, username: &str, password: &str) -> bool {
        let username_ok = self.username.as_bytes().ct_eq(username.as_bytes());
        let password_ok = self.password.as_bytes().ct_eq(password.as_bytes());
        (username_ok & password_ok).into()
    }
}
