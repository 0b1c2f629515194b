//! Arquivo aberto sobre um nó de dispositivo

use super::device::DeviceNumber;
use super::operations::OpenFlags;

/// Arquivo aberto (`struct file`)
///
/// Um por chamada a `open`; pertence a quem abriu. A posição é local ao
/// arquivo, nunca compartilhada entre aberturas do mesmo dispositivo.
#[derive(Debug)]
pub struct File {
    /// Dispositivo alvo
    dev: DeviceNumber,
    /// Flags de abertura
    flags: OpenFlags,
    /// Posição atual (`f_pos`)
    pub pos: i64,
}

impl File {
    /// Cria arquivo aberto na posição zero
    pub fn new(dev: DeviceNumber, flags: OpenFlags) -> Self {
        Self { dev, flags, pos: 0 }
    }

    pub fn dev(&self) -> DeviceNumber {
        self.dev
    }

    pub fn flags(&self) -> OpenFlags {
        self.flags
    }
}
