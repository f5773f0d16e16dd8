pub mod accounts;
pub mod books;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod gateway;
pub mod store;
pub mod utils;
