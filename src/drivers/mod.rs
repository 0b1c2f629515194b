//! # Driver Layer
//!
//! | Driver | Diretório | Dispositivo |
//! |--------|-----------|-------------|
//! | PCD    | `pcd/`    | `/dev/pcd` - buffer fixo em memória |

pub mod pcd;

#[cfg(test)]
mod tests;
