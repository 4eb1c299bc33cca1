//! Domain types shared by the GoStock database and API crates.

pub mod connection;
pub mod error;
pub mod stock;
pub mod types;
