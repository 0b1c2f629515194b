//! Device Registry - tabelas de dispositivos do host
//!
//! Implementa [`ChrdevHost`] em memória: regiões de device numbers, cdevs
//! (tabelas de operações ligadas a device numbers), classes e nós em /dev.
//! Também mantém a tabela de descritores que roteia open/read/write/lseek/close
//! para a tabela de operações do dispositivo.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use spin::Mutex;

use super::device::{ClassId, DeviceNode, DeviceNumber};
use super::file::File;
use super::host::ChrdevHost;
use super::operations::{FileOperations, OpenFlags, SeekWhence};
use super::user_buf::{UserSliceReader, UserSliceWriter};
use crate::sys::Errno;

/// Número máximo de nós em /dev
const MAX_DEVICES: usize = 256;

/// Número máximo de descritores abertos
const MAX_OPEN_FILES: usize = 64;

/// Faixa de majors dinâmicos (alocados de cima para baixo, como no Linux)
const DYNAMIC_MAJOR_FIRST: u32 = 254;
const DYNAMIC_MAJOR_LAST: u32 = 234;

/// Prefixo dos caminhos de dispositivo
const DEV_PREFIX: &str = "/dev/";

// Região de device numbers reservada
struct Region {
    dev: DeviceNumber,
    count: u32,
    name: String,
}

// Tabela de operações ligada a uma faixa de device numbers
struct Cdev {
    dev: DeviceNumber,
    count: u32,
    ops: Arc<dyn FileOperations>,
}

impl Cdev {
    fn covers(&self, dev: DeviceNumber) -> bool {
        self.dev.range_contains(self.count, dev)
    }

    fn overlaps(&self, dev: DeviceNumber, count: u32) -> bool {
        self.dev.range_overlaps(self.count, dev, count)
    }
}

/// Valida `count` minors a partir de `base_minor`: não vazio e dentro do
/// espaço de minors
fn check_minor_range(base_minor: u32, count: u32) -> Result<(), Errno> {
    let end = base_minor.checked_add(count).ok_or(Errno::EINVAL)?;
    if count == 0 || end > DeviceNumber::MINOR_MASK + 1 {
        return Err(Errno::EINVAL);
    }
    Ok(())
}

struct Class {
    id: ClassId,
    name: String,
}

/// Descritor aberto
///
/// O registro só é travado para achar o descritor; a operação em si roda sob
/// o lock do próprio arquivo, que protege apenas a posição dele.
pub struct OpenFile {
    file: Mutex<File>,
    ops: Arc<dyn FileOperations>,
}

impl OpenFile {
    /// Lê até `buf.len()` bytes
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, Errno> {
        let mut file = self.file.lock();
        if !file.flags().can_read() {
            return Err(Errno::EBADF);
        }
        let count = buf.len();
        let mut dst = UserSliceWriter::new(buf);
        self.ops.read(&mut file, &mut dst, count)
    }

    /// Escreve até `buf.len()` bytes
    pub fn write(&self, buf: &[u8]) -> Result<usize, Errno> {
        let mut file = self.file.lock();
        if !file.flags().can_write() {
            return Err(Errno::EBADF);
        }
        let mut src = UserSliceReader::new(buf);
        self.ops.write(&mut file, &mut src, buf.len())
    }

    /// lseek com `whence` cru
    pub fn lseek(&self, offset: i64, whence: i32) -> Result<i64, Errno> {
        let whence = SeekWhence::from_raw(whence)?;
        let mut file = self.file.lock();
        self.ops.llseek(&mut file, offset, whence)
    }

    /// Posição atual
    pub fn pos(&self) -> i64 {
        self.file.lock().pos
    }

    fn release(&self) -> Result<(), Errno> {
        let mut file = self.file.lock();
        self.ops.release(&mut file)
    }
}

/// Registro de dispositivos
pub struct DeviceRegistry {
    regions: Vec<Region>,
    cdevs: Vec<Cdev>,
    classes: Vec<Class>,
    nodes: Vec<DeviceNode>,
    files: Vec<Option<Arc<OpenFile>>>,
    next_class: u32,
}

impl DeviceRegistry {
    /// Cria um novo registro
    pub const fn new() -> Self {
        Self {
            regions: Vec::new(),
            cdevs: Vec::new(),
            classes: Vec::new(),
            nodes: Vec::new(),
            files: Vec::new(),
            next_class: 1,
        }
    }

    /// Busca um dispositivo por nome (`pcd` ou `/dev/pcd`)
    pub fn lookup(&self, path: &str) -> Option<DeviceNumber> {
        let name = path.strip_prefix(DEV_PREFIX).unwrap_or(path);
        self.nodes.iter().find(|n| n.name == name).map(|n| n.dev)
    }

    /// Busca o nó publicado para um device number
    pub fn node(&self, dev: DeviceNumber) -> Option<&DeviceNode> {
        self.nodes.iter().find(|n| n.dev == dev)
    }

    /// Nome da região que contém `dev`, se reservada
    pub fn region_name(&self, dev: DeviceNumber) -> Option<&str> {
        self.regions
            .iter()
            .find(|r| r.dev.range_contains(r.count, dev))
            .map(|r| r.name.as_str())
    }

    /// Verifica se há tabela de operações ligada a `dev`
    pub fn is_bound(&self, dev: DeviceNumber) -> bool {
        self.cdevs.iter().any(|c| c.covers(dev))
    }

    /// Busca uma classe por nome
    pub fn class_id(&self, name: &str) -> Option<ClassId> {
        self.classes.iter().find(|c| c.name == name).map(|c| c.id)
    }

    /// Número de regiões reservadas
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Número de tabelas de operações ligadas
    pub fn cdev_count(&self) -> usize {
        self.cdevs.len()
    }

    /// Número de nós publicados
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Número de descritores abertos
    pub fn open_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_some()).count()
    }

    /// Abre um dispositivo por caminho; retorna o descritor
    pub fn open(&mut self, path: &str, flags: OpenFlags) -> Result<usize, Errno> {
        let dev = self.lookup(path).ok_or(Errno::ENOENT)?;
        let ops = self
            .cdevs
            .iter()
            .find(|c| c.covers(dev))
            .map(|c| c.ops.clone())
            .ok_or(Errno::ENXIO)?;

        let fd = match self.files.iter().position(|f| f.is_none()) {
            Some(fd) => fd,
            None if self.files.len() < MAX_OPEN_FILES => {
                self.files.push(None);
                self.files.len() - 1
            }
            None => return Err(Errno::EMFILE),
        };

        let mut file = File::new(dev, flags);
        ops.open(&mut file)?;

        self.files[fd] = Some(Arc::new(OpenFile {
            file: Mutex::new(file),
            ops,
        }));
        Ok(fd)
    }

    /// Descritor aberto
    pub fn file(&self, fd: usize) -> Result<Arc<OpenFile>, Errno> {
        self.files
            .get(fd)
            .and_then(|f| f.clone())
            .ok_or(Errno::EBADF)
    }

    /// Fecha um descritor, chamando `release` no dispositivo
    pub fn close(&mut self, fd: usize) -> Result<(), Errno> {
        let file = self
            .files
            .get_mut(fd)
            .and_then(|f| f.take())
            .ok_or(Errno::EBADF)?;
        file.release()
    }

    /// Lê de um descritor
    pub fn read(&self, fd: usize, buf: &mut [u8]) -> Result<usize, Errno> {
        self.file(fd)?.read(buf)
    }

    /// Escreve em um descritor
    pub fn write(&self, fd: usize, buf: &[u8]) -> Result<usize, Errno> {
        self.file(fd)?.write(buf)
    }

    /// Reposiciona um descritor
    pub fn lseek(&self, fd: usize, offset: i64, whence: i32) -> Result<i64, Errno> {
        self.file(fd)?.lseek(offset, whence)
    }
}

impl ChrdevHost for DeviceRegistry {
    fn alloc_chrdev_region(
        &mut self,
        base_minor: u32,
        count: u32,
        name: &str,
    ) -> Result<DeviceNumber, Errno> {
        check_minor_range(base_minor, count)?;

        let major = (DYNAMIC_MAJOR_LAST..=DYNAMIC_MAJOR_FIRST)
            .rev()
            .find(|major| !self.regions.iter().any(|r| r.dev.major == *major))
            .ok_or(Errno::EBUSY)?;

        let dev = DeviceNumber::new(major, base_minor);
        self.regions.push(Region {
            dev,
            count,
            name: String::from(name),
        });
        crate::kdebug!("(DevFS) Região reservada, major=", major);
        Ok(dev)
    }

    fn unregister_chrdev_region(&mut self, dev: DeviceNumber, count: u32) {
        self.regions.retain(|r| !(r.dev == dev && r.count == count));
    }

    fn cdev_add(
        &mut self,
        dev: DeviceNumber,
        count: u32,
        ops: Arc<dyn FileOperations>,
    ) -> Result<(), Errno> {
        check_minor_range(dev.minor, count)?;
        if self.cdevs.iter().any(|c| c.overlaps(dev, count)) {
            return Err(Errno::EBUSY);
        }
        self.cdevs.push(Cdev { dev, count, ops });
        Ok(())
    }

    fn cdev_del(&mut self, dev: DeviceNumber) {
        self.cdevs.retain(|c| c.dev != dev);
    }

    fn class_create(&mut self, name: &str) -> Result<ClassId, Errno> {
        if self.class_id(name).is_some() {
            return Err(Errno::EEXIST);
        }
        let id = ClassId(self.next_class);
        self.next_class += 1;
        self.classes.push(Class {
            id,
            name: String::from(name),
        });
        Ok(id)
    }

    fn class_destroy(&mut self, class: ClassId) {
        self.nodes.retain(|n| n.class != class);
        self.classes.retain(|c| c.id != class);
    }

    fn device_create(
        &mut self,
        class: ClassId,
        dev: DeviceNumber,
        name: &str,
    ) -> Result<(), Errno> {
        if !self.classes.iter().any(|c| c.id == class) {
            return Err(Errno::ENOENT);
        }
        if self.nodes.iter().any(|n| n.name == name || n.dev == dev) {
            return Err(Errno::EEXIST);
        }
        if self.nodes.len() >= MAX_DEVICES {
            return Err(Errno::ENOSPC);
        }
        self.nodes.push(DeviceNode::new(name, class, dev));
        Ok(())
    }

    fn device_destroy(&mut self, class: ClassId, dev: DeviceNumber) {
        self.nodes.retain(|n| !(n.class == class && n.dev == dev));
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
