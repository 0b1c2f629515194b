//! Bounded Buffer - memória do dispositivo
//!
//! Array de bytes de capacidade fixa, zerado na criação. Não cresce nem
//! encolhe.
//!
//! # Concorrência
//!
//! | Modo        | read/write/lseek concorrentes                          |
//! |-------------|--------------------------------------------------------|
//! | `Shared`    | Sem exclusão: o conteúdo pode intercalar entre chamadas |
//! | `Exclusive` | Um `spin::Mutex` por buffer serializa cada chamada      |
//!
//! Os bytes são `AtomicU8` com ordenação `Relaxed`: no modo `Shared` a corrida
//! fica restrita ao conteúdo, sem data race no sentido da linguagem.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU8, Ordering};

use spin::{Mutex, MutexGuard};

use super::error::{PcdError, PcdResult};
use crate::fs::devfs::{UserSliceReader, UserSliceWriter};

/// Tamanho do bloco intermediário de cópia
const COPY_CHUNK: usize = 64;

/// Disciplina de acesso ao buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// Sem lock (comportamento original do driver)
    Shared,
    /// Cada read/write/lseek sob o lock do buffer
    Exclusive,
}

impl AccessMode {
    /// Modo padrão, escolhido pela feature `exclusive_access`
    #[cfg(feature = "exclusive_access")]
    pub const DEFAULT: Self = AccessMode::Exclusive;
    #[cfg(not(feature = "exclusive_access"))]
    pub const DEFAULT: Self = AccessMode::Shared;
}

impl Default for AccessMode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Guarda de acesso; no modo `Shared` não segura nada
pub struct AccessGuard<'a> {
    _guard: Option<MutexGuard<'a, ()>>,
}

/// Buffer de capacidade fixa
pub struct BoundedBuffer {
    storage: Box<[AtomicU8]>,
    mode: AccessMode,
    lock: Mutex<()>,
}

impl BoundedBuffer {
    /// Cria um buffer zerado no modo de acesso padrão
    pub fn create(capacity: usize) -> PcdResult<Self> {
        Self::with_mode(capacity, AccessMode::DEFAULT)
    }

    /// Cria um buffer zerado com o modo de acesso dado
    pub fn with_mode(capacity: usize, mode: AccessMode) -> PcdResult<Self> {
        let mut storage = Vec::new();
        storage
            .try_reserve_exact(capacity)
            .map_err(|_| PcdError::Allocation)?;
        storage.resize_with(capacity, || AtomicU8::new(0));

        crate::kdebug!("(PCD) Buffer criado, bytes=", capacity);
        Ok(Self {
            storage: storage.into_boxed_slice(),
            mode,
            lock: Mutex::new(()),
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    /// Entra na seção de acesso; o lock (se houver) cai com a guarda
    pub fn access(&self) -> AccessGuard<'_> {
        let guard = match self.mode {
            AccessMode::Shared => None,
            AccessMode::Exclusive => Some(self.lock.lock()),
        };
        AccessGuard { _guard: guard }
    }

    /// Verifica se o lock exclusivo está tomado
    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// Copia `storage[offset..offset + count]` para o chamador.
    ///
    /// O destino é validado antes da cópia: falha não deixa cópia parcial.
    pub fn copy_out(
        &self,
        offset: usize,
        dst: &mut UserSliceWriter<'_>,
        count: usize,
    ) -> PcdResult<()> {
        let end = self.span_end(offset, count)?;
        dst.check_access(count).map_err(|_| PcdError::Fault)?;

        let mut chunk = [0u8; COPY_CHUNK];
        for cells in self.storage[offset..end].chunks(COPY_CHUNK) {
            let out = &mut chunk[..cells.len()];
            for (byte, cell) in out.iter_mut().zip(cells) {
                *byte = cell.load(Ordering::Relaxed);
            }
            dst.write_slice(out).map_err(|_| PcdError::Fault)?;
        }
        Ok(())
    }

    /// Copia `count` bytes do chamador para `storage[offset..]`.
    ///
    /// A origem é validada antes da cópia: falha não deixa cópia parcial.
    pub fn copy_in(
        &self,
        offset: usize,
        src: &mut UserSliceReader<'_>,
        count: usize,
    ) -> PcdResult<()> {
        let end = self.span_end(offset, count)?;
        src.check_access(count).map_err(|_| PcdError::Fault)?;

        let mut chunk = [0u8; COPY_CHUNK];
        for cells in self.storage[offset..end].chunks(COPY_CHUNK) {
            let input = &mut chunk[..cells.len()];
            src.read_slice(input).map_err(|_| PcdError::Fault)?;
            for (cell, byte) in cells.iter().zip(input.iter()) {
                cell.store(*byte, Ordering::Relaxed);
            }
        }
        Ok(())
    }

    /// Libera a memória do dispositivo
    pub fn destroy(self) {
        crate::kdebug!("(PCD) Buffer liberado, bytes=", self.capacity());
    }

    /// Fim de `[offset, offset + count)`, que precisa caber no buffer.
    ///
    /// O dispositivo já limita `count` à capacidade restante; aqui só chega
    /// uma faixa inválida por chamada direta ao buffer.
    fn span_end(&self, offset: usize, count: usize) -> PcdResult<usize> {
        offset
            .checked_add(count)
            .filter(|end| *end <= self.capacity())
            .ok_or(PcdError::InvalidArgument)
    }
}
