pub mod pricing;
pub mod product;

pub use pricing::{quote, BASE_PRICE};
pub use product::{cake_type_name, CakeType, CatalogError, CAKE_TYPES};
