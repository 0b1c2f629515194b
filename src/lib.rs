//! PCD - Pseudo Character Device.
//!
//! Driver de dispositivo de caractere sobre um buffer fixo em memória,
//! junto com o host mínimo (DevFS) que o registra e roteia os descritores.
//!
//! ```text
//! klog     → macros de log (console sink)
//! sys      → Errno
//! klib     → framework de testes in-kernel (feature self_test)
//! fs       → DevFS: device numbers, FileOperations, registro, fds
//! drivers  → pcd: BoundedBuffer, PseudoCharDevice, PcdDriver
//! ```

#![cfg_attr(not(test), no_std)]

// Vec/Box/Arc/String
extern crate alloc;

// --- Infraestrutura ---
pub mod klog; // Logging (macros k*!)
pub mod klib; // Utilitários internos
pub mod sys; // Definições de Sistema (Erros)

// --- Subsistemas ---
pub mod drivers; // Drivers (PCD)
pub mod fs; // DevFS (/dev)

pub use drivers::pcd::{PcdConfig, PcdDriver, PcdError};
pub use fs::devfs::DevFS;
pub use sys::Errno;
