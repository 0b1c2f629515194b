//! Ciclo de vida do driver (init/exit)
//!
//! ```text
//! init:  buffer → alloc_chrdev_region → cdev_add → class_create → device_create
//! falha: desfaz os passos concluídos, do último para o primeiro
//! exit:  device_destroy → class_destroy → cdev_del → unregister_chrdev_region
//! ```

use alloc::sync::Arc;

use super::buffer::BoundedBuffer;
use super::config::{PcdConfig, DEV_MEM_SIZE, MINOR_COUNT};
use super::device::PseudoCharDevice;
use super::error::{InitStep, PcdError, PcdResult};
use crate::fs::devfs::{ChrdevHost, ClassId, DeviceNumber, FileOperations};
use crate::sys::Errno;

/// Passos concluídos até o momento
#[derive(Default)]
struct Progress {
    region: Option<DeviceNumber>,
    cdev: Option<DeviceNumber>,
    class: Option<ClassId>,
}

impl Progress {
    /// Desfaz os passos concluídos em ordem reversa
    fn unwind<H>(&self, host: &mut H, step: InitStep, errno: Errno) -> PcdError
    where
        H: ChrdevHost + ?Sized,
    {
        crate::kerror!(step.failure_message());

        if let Some(class) = self.class {
            host.class_destroy(class);
        }
        if let Some(dev) = self.cdev {
            host.cdev_del(dev);
        }
        if let Some(dev) = self.region {
            host.unregister_chrdev_region(dev, MINOR_COUNT);
        }

        crate::kfail!("(PCD) Module insertion failed");
        PcdError::Registration { step, errno }
    }
}

/// Driver registrado
///
/// Dono do dispositivo (e do buffer dentro dele) do `init` ao `exit`.
#[must_use = "o driver precisa de exit() para liberar o registro"]
pub struct PcdDriver {
    config: PcdConfig,
    dev: DeviceNumber,
    class: ClassId,
    device: Arc<PseudoCharDevice>,
}

impl PcdDriver {
    /// Cria o buffer e registra o dispositivo no host
    pub fn init<H: ChrdevHost + ?Sized>(host: &mut H, config: PcdConfig) -> PcdResult<Self> {
        crate::kinfo!("(PCD) Inicializando driver...");

        let buffer = BoundedBuffer::with_mode(DEV_MEM_SIZE, config.access_mode)?;
        let mut progress = Progress::default();

        // 1) Device number dinâmico
        let dev = host
            .alloc_chrdev_region(config.base_minor, MINOR_COUNT, config.region_name)
            .map_err(|errno| progress.unwind(host, InitStep::AllocRegion, errno))?;
        progress.region = Some(dev);
        crate::kdev!(dev, "Device number allocated");

        // 2) Tabela de operações ligada ao device number
        let device = Arc::new(PseudoCharDevice::new(dev, buffer));
        let ops: Arc<dyn FileOperations> = device.clone();
        host.cdev_add(dev, MINOR_COUNT, ops)
            .map_err(|errno| progress.unwind(host, InitStep::AddCdev, errno))?;
        progress.cdev = Some(dev);
        crate::kdebug!("(PCD) cdev registrado");

        // 3) Classe em /sys/class
        let class = host
            .class_create(config.class_name)
            .map_err(|errno| progress.unwind(host, InitStep::CreateClass, errno))?;
        progress.class = Some(class);
        crate::kdebug!("(PCD) Classe criada, id=", class.0);

        // 4) Nó em /dev
        host.device_create(class, dev, config.node_name)
            .map_err(|errno| progress.unwind(host, InitStep::CreateDevice, errno))?;

        crate::kok!("(PCD) Module initialized");
        Ok(Self {
            config,
            dev,
            class,
            device,
        })
    }

    /// Remove o registro e destrói o buffer.
    ///
    /// Arquivos ainda abertos mantêm o dispositivo vivo; o buffer só é
    /// liberado quando o último deles for fechado.
    pub fn exit<H: ChrdevHost + ?Sized>(self, host: &mut H) {
        host.device_destroy(self.class, self.dev);
        host.class_destroy(self.class);
        host.cdev_del(self.dev);
        host.unregister_chrdev_region(self.dev, MINOR_COUNT);

        match Arc::try_unwrap(self.device) {
            Ok(device) => device.into_buffer().destroy(),
            Err(_) => {
                crate::kwarn!("(PCD) Arquivos ainda abertos, buffer liberado no último close")
            }
        }

        crate::kinfo!("(PCD) Module unloaded");
    }

    pub fn config(&self) -> &PcdConfig {
        &self.config
    }

    pub fn dev(&self) -> DeviceNumber {
        self.dev
    }

    pub fn class(&self) -> ClassId {
        self.class
    }

    pub fn device(&self) -> &Arc<PseudoCharDevice> {
        &self.device
    }
}
