pub mod store;

pub use store::{Store, StoreState};
