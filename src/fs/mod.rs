//! Sistemas de arquivos.
//!
//! Submódulos:
//! - `devfs`: Dispositivos de caractere (/dev), registro e descritores.

pub mod devfs;

#[cfg(test)]
mod tests;
