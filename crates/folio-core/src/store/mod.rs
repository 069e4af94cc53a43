pub mod contacts;
pub mod resource;

pub use contacts::ContactStore;
pub use resource::{Entity, ResourceStore};
