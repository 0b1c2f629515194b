//! Erros do driver PCD

use core::fmt;

use crate::sys::Errno;

/// Passo da inicialização do driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStep {
    /// Reserva do device number (`alloc_chrdev_region`)
    AllocRegion,
    /// Ligação da tabela de operações (`cdev_add`)
    AddCdev,
    /// Criação da classe (`class_create`)
    CreateClass,
    /// Publicação do nó em /dev (`device_create`)
    CreateDevice,
}

impl InitStep {
    pub const fn failure_message(self) -> &'static str {
        match self {
            InitStep::AllocRegion => "(PCD) Alloc chrdev failed",
            InitStep::AddCdev => "(PCD) Cdev add failed",
            InitStep::CreateClass => "(PCD) Class creation failed",
            InitStep::CreateDevice => "(PCD) Device create failed",
        }
    }
}

/// Erros do driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PcdError {
    /// Alvo de lseek fora de `[0, capacidade]`, posição negativa no arquivo
    /// ou faixa de cópia fora do buffer
    InvalidArgument,
    /// Cópia de/para o chamador falhou
    Fault,
    /// Escrita sem nenhum byte livre a partir da posição atual
    OutOfSpace,
    /// Não foi possível reservar o buffer
    Allocation,
    /// Falha num passo do registro (já desfeito)
    Registration { step: InitStep, errno: Errno },
}

impl PcdError {
    /// Errno devolvido ao chamador.
    ///
    /// Falta de espaço sai como `ENOMEM`, o código que o driver sempre
    /// devolveu para escrita no fim do buffer.
    pub const fn errno(self) -> Errno {
        match self {
            PcdError::InvalidArgument => Errno::EINVAL,
            PcdError::Fault => Errno::EFAULT,
            PcdError::OutOfSpace => Errno::ENOMEM,
            PcdError::Allocation => Errno::ENOMEM,
            PcdError::Registration { errno, .. } => errno,
        }
    }
}

impl From<PcdError> for Errno {
    fn from(err: PcdError) -> Self {
        err.errno()
    }
}

impl fmt::Display for PcdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PcdError::InvalidArgument => f.write_str("invalid seek target"),
            PcdError::Fault => f.write_str("bad address"),
            PcdError::OutOfSpace => f.write_str("no space left on the device"),
            PcdError::Allocation => f.write_str("device memory allocation failed"),
            PcdError::Registration { step, errno } => {
                write!(f, "registration failed at {:?}: {}", step, errno)
            }
        }
    }
}

pub type PcdResult<T> = Result<T, PcdError>;
