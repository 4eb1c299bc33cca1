pub mod demo;
pub mod stocks;
