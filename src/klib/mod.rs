//! Kernel Library (KLib).
//!
//! Utilitários agnósticos de hardware para uso interno.

#[cfg(feature = "self_test")]
pub mod test_framework;
