mod auth;
mod errors;
mod helpers;
mod schema;
mod search;
mod store;

pub use auth::*;
pub use errors::*;
pub use helpers::*;
pub use schema::*;
pub use search::*;
pub use store::*;
