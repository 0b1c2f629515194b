//! User buffers - transferência falível de/para a memória do chamador
//!
//! Modela `copy_to_user`/`copy_from_user`: o chamador entrega uma região de
//! tamanho conhecido e qualquer cópia além do que resta nela falha com
//! `EFAULT` antes de qualquer byte ser movido.

use crate::sys::Errno;

/// Destino de uma leitura (memória do chamador)
pub struct UserSliceWriter<'a> {
    buf: &'a mut [u8],
    written: usize,
}

impl<'a> UserSliceWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, written: 0 }
    }

    /// Bytes ainda acessíveis
    pub fn len(&self) -> usize {
        self.buf.len() - self.written
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes já copiados
    pub fn written(&self) -> usize {
        self.written
    }

    /// Verifica se `count` bytes cabem no destino (`access_ok`)
    pub fn check_access(&self, count: usize) -> Result<(), Errno> {
        if count > self.len() {
            return Err(Errno::EFAULT);
        }
        Ok(())
    }

    /// Copia `data` para o destino, avançando o cursor
    pub fn write_slice(&mut self, data: &[u8]) -> Result<(), Errno> {
        self.check_access(data.len())?;
        let start = self.written;
        self.buf[start..start + data.len()].copy_from_slice(data);
        self.written += data.len();
        Ok(())
    }
}

/// Origem de uma escrita (memória do chamador)
pub struct UserSliceReader<'a> {
    buf: &'a [u8],
    read: usize,
}

impl<'a> UserSliceReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, read: 0 }
    }

    /// Bytes ainda acessíveis
    pub fn len(&self) -> usize {
        self.buf.len() - self.read
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Verifica se `count` bytes podem ser lidos da origem
    pub fn check_access(&self, count: usize) -> Result<(), Errno> {
        if count > self.len() {
            return Err(Errno::EFAULT);
        }
        Ok(())
    }

    /// Preenche `data` a partir da origem, avançando o cursor
    pub fn read_slice(&mut self, data: &mut [u8]) -> Result<(), Errno> {
        self.check_access(data.len())?;
        let start = self.read;
        data.copy_from_slice(&self.buf[start..start + data.len()]);
        self.read += data.len();
        Ok(())
    }
}
