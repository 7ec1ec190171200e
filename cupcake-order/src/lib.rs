pub mod model;
pub mod store;
pub mod wire;

pub use model::Order;
pub use store::OrderStore;
pub use wire::{decode, encode, DecodeError};
