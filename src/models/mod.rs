mod customer;
mod dataset;
mod product;

pub use customer::Customer;
pub use dataset::{CrmSection, DatasetDocument, InventorySection};
pub use product::Product;
