pub mod draft;
pub mod models;
pub mod store;
