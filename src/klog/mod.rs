//! # Kernel Log (klog)
//!
//! Saída de diagnóstico do driver.
//!
//! ```text
//! kinfo!/kdebug!/kdev!  →  logging (prefixos + filtro por feature)
//!                               ↓
//!                          console (emit_str / emit_hex / emit_dec)
//!                               ↓
//!                          ConsoleSink instalado pelo host
//! ```
//!
//! Sem sink instalado as linhas são descartadas.

pub mod console;
pub mod logging;

pub use console::{install_sink, remove_sink, ConsoleSink};
