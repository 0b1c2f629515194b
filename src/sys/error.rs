//! # Standard Error Codes (Errno)
//!
//! Códigos de erro devolvidos pelas operações de arquivo e pelo registro de
//! dispositivos. Numeração POSIX/Linux; valores negativos (`as_isize`) são o
//! formato de retorno das syscalls.

use core::fmt;

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Errno {
    ENOENT = 2,  // No such file or directory
    ENXIO = 6,   // No such device or address
    EBADF = 9,   // Bad file number
    ENOMEM = 12, // Out of memory
    EFAULT = 14, // Bad address
    EBUSY = 16,  // Device or resource busy
    EEXIST = 17, // File exists
    EINVAL = 22, // Invalid argument
    EMFILE = 24, // Too many open files
    ENOSPC = 28, // No space left on device
}

impl Errno {
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    pub fn as_isize(self) -> isize {
        -(self as i32) as isize
    }

    /// Mensagem curta no formato de `strerror`
    pub const fn description(self) -> &'static str {
        match self {
            Errno::ENOENT => "No such file or directory",
            Errno::ENXIO => "No such device or address",
            Errno::EBADF => "Bad file number",
            Errno::ENOMEM => "Out of memory",
            Errno::EFAULT => "Bad address",
            Errno::EBUSY => "Device or resource busy",
            Errno::EEXIST => "File exists",
            Errno::EINVAL => "Invalid argument",
            Errno::EMFILE => "Too many open files",
            Errno::ENOSPC => "No space left on device",
        }
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), *self as i32)
    }
}
