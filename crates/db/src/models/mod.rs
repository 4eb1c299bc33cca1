//! Database row models and DTOs.

pub mod stock;
