pub mod adapters;
pub mod collector;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

#[cfg(test)]
pub mod test_helpers;
