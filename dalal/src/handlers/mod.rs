//! Request handlers, one module per concern.

pub mod health;
pub mod market;

pub use health::health;
pub use market::{historical, news, search, stock};
