//! Testes para o módulo Filesystem
//!
//! # Como Executar os Testes
//!
//! ```bash
//! # Executar todos os testes de filesystem
//! cargo test --lib fs::tests
//!
//! # Executar testes de um módulo específico
//! cargo test --lib fs::tests::registry
//! ```
//!
//! # Estrutura dos Testes
//!
//! - `devfs.rs` - Device numbers, flags, whence, nós
//! - `registry.rs` - Registro (host) e tabela de descritores
//!
//! # Convenções
//!
//! - Prefixo `test_` para testes unitários

#![cfg(test)]

pub mod registry;

use alloc::sync::Arc;

use crate::fs::devfs::{
    DevFS, File, FileOperations, SeekWhence, UserSliceReader, UserSliceWriter,
};
use crate::sys::Errno;

/// Helper: Cria um DevFS para testes
pub fn create_test_devfs() -> DevFS {
    DevFS::new()
}

/// Dispositivo de teste: leitura devolve `0x5A`, escrita aceita tudo, lseek
/// aceita qualquer posição não negativa
pub struct EchoDevice;

impl FileOperations for EchoDevice {
    fn read(
        &self,
        file: &mut File,
        dst: &mut UserSliceWriter<'_>,
        count: usize,
    ) -> Result<usize, Errno> {
        for _ in 0..count {
            dst.write_slice(&[0x5A])?;
        }
        file.pos += count as i64;
        Ok(count)
    }

    fn write(
        &self,
        file: &mut File,
        src: &mut UserSliceReader<'_>,
        count: usize,
    ) -> Result<usize, Errno> {
        src.check_access(count)?;
        file.pos += count as i64;
        Ok(count)
    }

    fn llseek(&self, file: &mut File, offset: i64, whence: SeekWhence) -> Result<i64, Errno> {
        let target = match whence {
            SeekWhence::Set => offset,
            SeekWhence::Cur => file.pos + offset,
            SeekWhence::End => return Err(Errno::EINVAL),
        };
        if target < 0 {
            return Err(Errno::EINVAL);
        }
        file.pos = target;
        Ok(target)
    }
}

/// Helper: tabela de operações de teste
pub fn echo_ops() -> Arc<dyn FileOperations> {
    Arc::new(EchoDevice)
}
