pub mod products;
pub mod schema;
pub mod store;

pub use products::{Product, ProductService};
pub use store::{NewStoreEntry, StoreEntry, StoreProduct, StoreService};
