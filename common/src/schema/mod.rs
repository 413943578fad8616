mod payload;
mod transaction;
mod xml;

pub use payload::*;
pub use transaction::*;
pub use xml::*;
