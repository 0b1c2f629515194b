//! Device - tipos base para dispositivos

use alloc::string::String;
use core::fmt;

/// Número major/minor de dispositivo
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceNumber {
    /// Major number (identifica o driver)
    pub major: u32,
    /// Minor number (identifica o dispositivo específico)
    pub minor: u32,
}

impl DeviceNumber {
    /// Bits reservados ao minor no formato interno do Linux (`MINORBITS`)
    pub const MINOR_BITS: u32 = 20;
    /// Máscara do minor
    pub const MINOR_MASK: u32 = (1 << Self::MINOR_BITS) - 1;

    /// Cria um novo device number
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Converte para u64 (formato Linux: major << 20 | minor)
    pub const fn as_u64(&self) -> u64 {
        ((self.major as u64) << Self::MINOR_BITS) | (self.minor as u64)
    }

    /// Cria a partir de u64
    pub const fn from_u64(dev: u64) -> Self {
        Self {
            major: (dev >> Self::MINOR_BITS) as u32,
            minor: (dev & Self::MINOR_MASK as u64) as u32,
        }
    }

    /// Device number `offset` minors adiante no mesmo major
    ///
    /// `None` se o minor resultante sair de [`Self::MINOR_MASK`].
    pub const fn offset(&self, offset: u32) -> Option<Self> {
        match self.minor.checked_add(offset) {
            Some(minor) if minor <= Self::MINOR_MASK => Some(Self::new(self.major, minor)),
            _ => None,
        }
    }

    /// Verifica se `dev` cai em `count` minors a partir de `self`
    pub const fn range_contains(&self, count: u32, dev: DeviceNumber) -> bool {
        dev.major == self.major && dev.minor >= self.minor && dev.minor - self.minor < count
    }

    /// Verifica se duas faixas de minors no mesmo major se sobrepõem
    pub const fn range_overlaps(
        &self,
        count: u32,
        other: DeviceNumber,
        other_count: u32,
    ) -> bool {
        if self.major != other.major {
            return false;
        }
        if self.minor <= other.minor {
            other.minor - self.minor < count
        } else {
            self.minor - other.minor < other_count
        }
    }
}

impl fmt::Display for DeviceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.major, self.minor)
    }
}

/// Identificador de uma classe de dispositivos (`/sys/class/<nome>`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassId(pub u32);

/// Nó de dispositivo de caractere publicado em /dev
pub struct DeviceNode {
    /// Nome do dispositivo (entrada em /dev)
    pub name: String,
    /// Classe dona do nó
    pub class: ClassId,
    /// Device number
    pub dev: DeviceNumber,
    /// Permissões (Unix mode)
    pub mode: u16,
}

impl DeviceNode {
    /// Cria um novo nó de dispositivo de caractere
    pub fn new(name: &str, class: ClassId, dev: DeviceNumber) -> Self {
        Self {
            name: String::from(name),
            class,
            dev,
            mode: 0o666, // rw-rw-rw- por padrão
        }
    }

    /// Define permissões customizadas
    pub fn with_mode(mut self, mode: u16) -> Self {
        self.mode = mode;
        self
    }
}

impl fmt::Debug for DeviceNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceNode")
            .field("name", &self.name)
            .field("class", &self.class.0)
            .field("major", &self.dev.major)
            .field("minor", &self.dev.minor)
            .field("mode", &format_args!("{:o}", self.mode))
            .finish()
    }
}
