mod board;
pub use board::Board;

mod error;
pub use error::Error;

pub mod filter;
pub use filter::{Entry, Group, View};

mod reconcile;
pub use reconcile::reconcile;

mod source;
pub use source::StatusSource;

mod store;
pub use store::{Criteria, Generation, Phase, Scope, Store, ViewState};

#[cfg(test)]
mod fixtures;

pub type Result<T> = std::result::Result<T, Error>;
