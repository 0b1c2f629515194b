//! DevFS - Device Filesystem
//!
//! Sistema de arquivos para dispositivos (/dev).
//!
//! # Módulos
//!
//! - `device` - Device numbers, classes e nós
//! - `operations` - Tabela de operações de arquivo, flags e whence
//! - `file` - Arquivo aberto (posição por abertura)
//! - `user_buf` - Cópia falível de/para o chamador
//! - `host` - Contrato de registro de char devices
//! - `registry` - Implementação em memória do host + tabela de descritores

pub mod device;
pub mod file;
pub mod host;
pub mod operations;
pub mod registry;
pub mod user_buf;

// Re-exports públicos
pub use device::{ClassId, DeviceNode, DeviceNumber};
pub use file::File;
pub use host::ChrdevHost;
pub use operations::{FileOperations, OpenFlags, SeekWhence};
pub use registry::{DeviceRegistry, OpenFile};
pub use user_buf::{UserSliceReader, UserSliceWriter};

use spin::{Mutex, MutexGuard};

use crate::sys::Errno;

/// DevFS - Device Filesystem
///
/// O registro só fica travado durante a busca do descritor; leituras e
/// escritas em descritores diferentes rodam sem lock global.
pub struct DevFS {
    /// Registro de dispositivos
    registry: Mutex<DeviceRegistry>,
}

impl DevFS {
    /// Cria uma nova instância de DevFS
    pub const fn new() -> Self {
        Self {
            registry: Mutex::new(DeviceRegistry::new()),
        }
    }

    /// Acesso ao registro (host dos drivers)
    pub fn registry(&self) -> MutexGuard<'_, DeviceRegistry> {
        self.registry.lock()
    }

    /// Abre um dispositivo por caminho
    pub fn open(&self, path: &str, flags: OpenFlags) -> Result<usize, Errno> {
        self.registry.lock().open(path, flags)
    }

    /// Fecha um dispositivo
    pub fn close(&self, fd: usize) -> Result<(), Errno> {
        self.registry.lock().close(fd)
    }

    /// Lê de um dispositivo
    pub fn read(&self, fd: usize, buf: &mut [u8]) -> Result<usize, Errno> {
        let file = self.registry.lock().file(fd)?;
        file.read(buf)
    }

    /// Escreve em um dispositivo
    pub fn write(&self, fd: usize, buf: &[u8]) -> Result<usize, Errno> {
        let file = self.registry.lock().file(fd)?;
        file.write(buf)
    }

    /// Reposiciona um descritor (`whence` cru: SEEK_SET/SEEK_CUR/SEEK_END)
    pub fn lseek(&self, fd: usize, offset: i64, whence: i32) -> Result<i64, Errno> {
        let file = self.registry.lock().file(fd)?;
        file.lseek(offset, whence)
    }
}

impl Default for DevFS {
    fn default() -> Self {
        Self::new()
    }
}
