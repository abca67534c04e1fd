pub mod aggregate;
pub mod arena;
pub mod engine;
pub mod error;
pub mod input;
pub mod ledger;
pub mod logging;
pub mod registry;

pub use engine::{replay, ComponentView, Engine, PairCounter};
pub use error::{Error, Result};
