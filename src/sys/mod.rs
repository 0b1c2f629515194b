//! System Definitions (ABI).
//!
//! Códigos de erro que atravessam a fronteira entre o driver e o host.

pub mod error;

pub use error::Errno;
