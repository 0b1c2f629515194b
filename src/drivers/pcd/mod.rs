//! # Pseudo Char Device (PCD)
//!
//! Dispositivo de caractere sintético: um buffer de [`DEV_MEM_SIZE`] bytes em
//! memória exposto como `/dev/pcd`.
//!
//! ```text
//! ┌──────────────┐  open/read/write/lseek/close  ┌──────────────────┐
//! │   DevFS      │ ────────────────────────────→ │ PseudoCharDevice │
//! │ (host, fds)  │                               │  └ BoundedBuffer │
//! └──────────────┘                               └──────────────────┘
//!        ↑  alloc_chrdev_region / cdev_add / class_create / device_create
//!        └──────────────────────── PcdDriver::init / exit
//! ```

pub mod buffer;
pub mod config;
pub mod device;
pub mod driver;
pub mod error;


pub use buffer::{AccessMode, BoundedBuffer};
pub use config::{PcdConfig, DEV_MEM_SIZE};
pub use device::PseudoCharDevice;
pub use driver::PcdDriver;
pub use error::{InitStep, PcdError, PcdResult};
