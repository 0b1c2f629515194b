//! Configuração do driver
//!
//! Tudo é fixado em tempo de compilação; [`PcdConfig`] só transporta os
//! valores até `PcdDriver::init`.

use super::buffer::AccessMode;

/// Capacidade do buffer do dispositivo, em bytes
pub const DEV_MEM_SIZE: usize = 512;

/// Nome da região de device numbers
pub const REGION_NAME: &str = "npcd_devices";

/// Nome da classe (`/sys/class/npcd_class`)
pub const CLASS_NAME: &str = "npcd_class";

/// Nome do nó (`/dev/pcd`)
pub const NODE_NAME: &str = "pcd";

/// Primeiro minor reservado
pub const BASE_MINOR: u32 = 0;

/// Quantidade de minors (um único dispositivo)
pub const MINOR_COUNT: u32 = 1;

/// Parâmetros de registro do driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcdConfig {
    pub region_name: &'static str,
    pub class_name: &'static str,
    pub node_name: &'static str,
    pub base_minor: u32,
    pub access_mode: AccessMode,
}

impl PcdConfig {
    pub const fn new() -> Self {
        Self {
            region_name: REGION_NAME,
            class_name: CLASS_NAME,
            node_name: NODE_NAME,
            base_minor: BASE_MINOR,
            access_mode: AccessMode::DEFAULT,
        }
    }

    pub const fn with_access_mode(mut self, access_mode: AccessMode) -> Self {
        self.access_mode = access_mode;
        self
    }

    pub const fn with_class_name(mut self, class_name: &'static str) -> Self {
        self.class_name = class_name;
        self
    }

    pub const fn with_node_name(mut self, node_name: &'static str) -> Self {
        self.node_name = node_name;
        self
    }
}

impl Default for PcdConfig {
    fn default() -> Self {
        Self::new()
    }
}
