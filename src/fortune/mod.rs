pub mod log;
pub mod store;
pub mod teller;

pub use store::{MessageStore, StoreError};
pub use teller::FortuneTeller;
