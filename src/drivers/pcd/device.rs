//! Pseudo Char Device - tabela de operações do /dev/pcd
//!
//! Toda a lógica de limites vive aqui: a posição de cada [`File`] fica
//! sempre em `[0, capacidade]`.
//!
//! | Operação | Fim do buffer                  | Falha da cópia |
//! |----------|--------------------------------|----------------|
//! | read     | retorna 0 (EOF)                | `Fault`        |
//! | write    | `OutOfSpace`                   | `Fault`        |
//! | lseek    | alvo fora de `[0, C]`: `InvalidArgument` | -    |

use super::buffer::BoundedBuffer;
use super::error::{PcdError, PcdResult};
use crate::fs::devfs::{
    DeviceNumber, File, FileOperations, SeekWhence, UserSliceReader, UserSliceWriter,
};
use crate::sys::Errno;

/// Dispositivo de caractere sobre um [`BoundedBuffer`]
pub struct PseudoCharDevice {
    dev: DeviceNumber,
    buffer: BoundedBuffer,
}

impl PseudoCharDevice {
    pub fn new(dev: DeviceNumber, buffer: BoundedBuffer) -> Self {
        Self { dev, buffer }
    }

    pub fn dev(&self) -> DeviceNumber {
        self.dev
    }

    pub fn buffer(&self) -> &BoundedBuffer {
        &self.buffer
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Devolve o buffer para destruição
    pub fn into_buffer(self) -> BoundedBuffer {
        self.buffer
    }

    pub fn open(&self, file: &mut File) -> PcdResult<()> {
        file.pos = 0;
        crate::kdev!(self.dev, "Open was successful");
        Ok(())
    }

    pub fn release(&self, _file: &mut File) -> PcdResult<()> {
        crate::kdev!(self.dev, "Release was successful");
        Ok(())
    }

    pub fn seek(&self, file: &mut File, offset: i64, whence: SeekWhence) -> PcdResult<i64> {
        let _access = self.buffer.access();
        let capacity = self.capacity() as i64;

        crate::kdev!(self.dev, "lseek requested, whence=", whence.as_raw());
        crate::kdev!(self.dev, "Current file position: ", file.pos);

        let target = match whence {
            SeekWhence::Set => Some(offset),
            SeekWhence::Cur => file.pos.checked_add(offset),
            SeekWhence::End => capacity.checked_add(offset),
        }
        .filter(|target| (0..=capacity).contains(target))
        .ok_or(PcdError::InvalidArgument)?;

        file.pos = target;
        crate::kdev!(self.dev, "Updated file position: ", file.pos);
        Ok(target)
    }

    pub fn read(
        &self,
        file: &mut File,
        dst: &mut UserSliceWriter<'_>,
        max_count: usize,
    ) -> PcdResult<usize> {
        let _access = self.buffer.access();

        crate::kdev!(self.dev, "Read requested, bytes: ", max_count);
        crate::kdev!(self.dev, "Current file position: ", file.pos);

        let pos = Self::position(file)?;
        let count = max_count.min(self.capacity().saturating_sub(pos));
        if count == 0 {
            crate::kdev!(self.dev, "End of device memory reached");
            return Ok(0);
        }

        self.buffer.copy_out(pos, dst, count)?;
        file.pos += count as i64;

        crate::kdev!(self.dev, "Number of bytes successfully read: ", count);
        crate::kdev!(self.dev, "Updated file position: ", file.pos);
        Ok(count)
    }

    pub fn write(
        &self,
        file: &mut File,
        src: &mut UserSliceReader<'_>,
        count: usize,
    ) -> PcdResult<usize> {
        let _access = self.buffer.access();

        crate::kdev!(self.dev, "Write requested, bytes: ", count);
        crate::kdev!(self.dev, "Current file position: ", file.pos);

        let pos = Self::position(file)?;
        let count = count.min(self.capacity().saturating_sub(pos));
        if count == 0 {
            crate::kdev_err!(self.dev, "No space left on the device");
            return Err(PcdError::OutOfSpace);
        }

        self.buffer.copy_in(pos, src, count)?;
        file.pos += count as i64;

        crate::kdev!(self.dev, "Number of bytes successfully written: ", count);
        crate::kdev!(self.dev, "Updated file position: ", file.pos);
        Ok(count)
    }

    fn position(file: &File) -> PcdResult<usize> {
        usize::try_from(file.pos).map_err(|_| PcdError::InvalidArgument)
    }
}

impl FileOperations for PseudoCharDevice {
    fn open(&self, file: &mut File) -> Result<(), Errno> {
        Ok(PseudoCharDevice::open(self, file)?)
    }

    fn release(&self, file: &mut File) -> Result<(), Errno> {
        Ok(PseudoCharDevice::release(self, file)?)
    }

    fn read(
        &self,
        file: &mut File,
        dst: &mut UserSliceWriter<'_>,
        count: usize,
    ) -> Result<usize, Errno> {
        Ok(PseudoCharDevice::read(self, file, dst, count)?)
    }

    fn write(
        &self,
        file: &mut File,
        src: &mut UserSliceReader<'_>,
        count: usize,
    ) -> Result<usize, Errno> {
        Ok(PseudoCharDevice::write(self, file, src, count)?)
    }

    fn llseek(&self, file: &mut File, offset: i64, whence: SeekWhence) -> Result<i64, Errno> {
        Ok(self.seek(file, offset, whence)?)
    }
}
