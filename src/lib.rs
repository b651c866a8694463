pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod fit;
pub mod interface;
pub mod models;

pub use catalog::BerryCatalog;
pub use engine::{blend, BlendMode, PoffinParams};
pub use error::{BlendError, Result};
pub use models::{Berry, BlendResult};
