//! hafind: list entity states from a Home Assistant instance
//!
//! A thin command-line client for the Home Assistant `/api/states` REST
//! endpoint: resolve configuration, fetch the state list, filter it by
//! domain, and print it as a table with a per-domain count summary.

pub mod cli;
pub mod client;
pub mod config;
pub mod entity;
