//! Testes da camada de drivers
//!
//! - `pcd.rs` - Semântica de lseek/read/write do /dev/pcd
//! - `lifecycle.rs` - init/exit e desfazer de registro parcial
//! - `devfs.rs` - O driver exercitado pelos descritores do DevFS
//! - `concurrency.rs` - Threads disputando o mesmo buffer
//! - `trace.rs` - Linhas de diagnóstico no console

#![cfg(test)]

pub mod devfs;

use crate::drivers::pcd::{AccessMode, BoundedBuffer, PseudoCharDevice, DEV_MEM_SIZE};
use crate::fs::devfs::{DeviceNumber, File, OpenFlags};

/// Device number usado pelos testes diretos do dispositivo
pub const TEST_DEV: DeviceNumber = DeviceNumber::new(254, 0);

/// Helper: dispositivo de capacidade `capacity`, já aberto
pub fn open_device(capacity: usize, mode: AccessMode) -> (PseudoCharDevice, File) {
    let buffer = BoundedBuffer::with_mode(capacity, mode).unwrap();
    let device = PseudoCharDevice::new(TEST_DEV, buffer);
    let mut file = File::new(TEST_DEV, OpenFlags::RDWR);
    device.open(&mut file).unwrap();
    (device, file)
}

/// Helper: dispositivo do tamanho padrão
pub fn open_default_device() -> (PseudoCharDevice, File) {
    open_device(DEV_MEM_SIZE, AccessMode::Shared)
}
