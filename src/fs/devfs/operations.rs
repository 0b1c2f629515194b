//! Device Operations - tabela de operações de arquivo
//!
//! Equivalente ao `struct file_operations`: o host roteia cada chamada feita
//! sobre um [`File`] aberto para a tabela registrada no device number dele.

use bitflags::bitflags;

use super::file::File;
use super::user_buf::{UserSliceReader, UserSliceWriter};
use crate::sys::Errno;

bitflags! {
    /// Flags para abertura de dispositivos.
    ///
    /// O modo de acesso ocupa os dois bits baixos (`O_ACCMODE`); leitura
    /// pura é o valor zero, exposto como [`OpenFlags::RDONLY`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OpenFlags: u32 {
        /// Apenas escrita
        const WRONLY = 0o1;
        /// Leitura e escrita
        const RDWR   = 0o2;
    }
}

impl OpenFlags {
    /// Apenas leitura
    pub const RDONLY: Self = Self::empty();
    /// Máscara do modo de acesso
    pub const ACCMODE: u32 = 0o3;

    /// Verifica se tem flag de leitura
    pub const fn can_read(&self) -> bool {
        let mode = self.bits() & Self::ACCMODE;
        mode == 0o0 || mode == 0o2
    }

    /// Verifica se tem flag de escrita
    pub const fn can_write(&self) -> bool {
        let mode = self.bits() & Self::ACCMODE;
        mode == 0o1 || mode == 0o2
    }
}

/// Seek whence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekWhence {
    /// Do início (`SEEK_SET`)
    Set,
    /// Da posição atual (`SEEK_CUR`)
    Cur,
    /// Do final (`SEEK_END`)
    End,
}

impl SeekWhence {
    pub const SEEK_SET: i32 = 0;
    pub const SEEK_CUR: i32 = 1;
    pub const SEEK_END: i32 = 2;

    /// Converte o `whence` cru de uma syscall; valor desconhecido é `EINVAL`
    pub const fn from_raw(whence: i32) -> Result<Self, Errno> {
        match whence {
            Self::SEEK_SET => Ok(SeekWhence::Set),
            Self::SEEK_CUR => Ok(SeekWhence::Cur),
            Self::SEEK_END => Ok(SeekWhence::End),
            _ => Err(Errno::EINVAL),
        }
    }

    pub const fn as_raw(self) -> i32 {
        match self {
            SeekWhence::Set => Self::SEEK_SET,
            SeekWhence::Cur => Self::SEEK_CUR,
            SeekWhence::End => Self::SEEK_END,
        }
    }
}

/// Operações de arquivo de um dispositivo de caractere.
///
/// Os métodos ausentes seguem o comportamento do kernel para entradas nulas
/// da tabela: open/release triviais, read/write/llseek rejeitados.
pub trait FileOperations: Send + Sync {
    /// Abre o dispositivo
    fn open(&self, _file: &mut File) -> Result<(), Errno> {
        Ok(())
    }

    /// Libera o arquivo (último close)
    fn release(&self, _file: &mut File) -> Result<(), Errno> {
        Ok(())
    }

    /// Lê até `count` bytes para `dst` a partir de `file.pos`
    fn read(
        &self,
        _file: &mut File,
        _dst: &mut UserSliceWriter<'_>,
        _count: usize,
    ) -> Result<usize, Errno> {
        Err(Errno::EINVAL)
    }

    /// Escreve até `count` bytes de `src` a partir de `file.pos`
    fn write(
        &self,
        _file: &mut File,
        _src: &mut UserSliceReader<'_>,
        _count: usize,
    ) -> Result<usize, Errno> {
        Err(Errno::EINVAL)
    }

    /// Reposiciona `file.pos`; retorna a nova posição
    fn llseek(&self, _file: &mut File, _offset: i64, _whence: SeekWhence) -> Result<i64, Errno> {
        Err(Errno::EINVAL)
    }
}
