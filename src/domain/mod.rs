//! Pure domain models (Transaction, Category, Budget, Settings, Snapshot) and
//! the summary types derived from them. No I/O, no storage interactions.

pub mod budget;
pub mod category;
pub mod common;
pub mod settings;
pub mod snapshot;
pub mod summary;
pub mod transaction;

pub use budget::*;
pub use category::*;
pub use common::*;
pub use settings::*;
pub use snapshot::*;
pub use summary::*;
pub use transaction::*;
