//! Chrdev host - contrato entre o driver e o kernel que o hospeda
//!
//! O driver não aloca números, não mantém tabelas de cdev nem cria nós em
//! /dev: pede tudo isso ao host através desta trait. As operações de desfazer
//! não falham e ignoram entradas que já não existem.

use alloc::sync::Arc;

use super::device::{ClassId, DeviceNumber};
use super::operations::FileOperations;
use crate::sys::Errno;

pub trait ChrdevHost {
    /// Reserva `count` minors a partir de `base_minor` num major dinâmico
    fn alloc_chrdev_region(
        &mut self,
        base_minor: u32,
        count: u32,
        name: &str,
    ) -> Result<DeviceNumber, Errno>;

    /// Devolve a região reservada
    fn unregister_chrdev_region(&mut self, dev: DeviceNumber, count: u32);

    /// Liga a tabela de operações aos `count` device numbers a partir de `dev`
    fn cdev_add(
        &mut self,
        dev: DeviceNumber,
        count: u32,
        ops: Arc<dyn FileOperations>,
    ) -> Result<(), Errno>;

    /// Desliga a tabela de operações
    fn cdev_del(&mut self, dev: DeviceNumber);

    /// Cria a classe `/sys/class/<name>`
    fn class_create(&mut self, name: &str) -> Result<ClassId, Errno>;

    /// Remove a classe
    fn class_destroy(&mut self, class: ClassId);

    /// Publica o nó `/dev/<name>` sob a classe
    fn device_create(&mut self, class: ClassId, dev: DeviceNumber, name: &str)
        -> Result<(), Errno>;

    /// Remove o nó publicado para `dev`
    fn device_destroy(&mut self, class: ClassId, dev: DeviceNumber);
}
