//! Testes do registro de dispositivos (host) e da tabela de descritores

#![cfg(test)]

use super::{create_test_devfs, echo_ops};
use crate::fs::devfs::{
    ChrdevHost, ClassId, DeviceNumber, DeviceRegistry, OpenFlags, SeekWhence,
};
use crate::sys::Errno;

/// Registra o EchoDevice como /dev/<name>
fn publish(registry: &mut DeviceRegistry, class: &str, name: &str) -> DeviceNumber {
    let dev = registry.alloc_chrdev_region(0, 1, "echo").unwrap();
    registry.cdev_add(dev, 1, echo_ops()).unwrap();
    let class = registry.class_create(class).unwrap();
    registry.device_create(class, dev, name).unwrap();
    dev
}

#[test]
fn test_dynamic_majors_are_distinct() {
    let mut registry = DeviceRegistry::new();
    let a = registry.alloc_chrdev_region(0, 1, "a").unwrap();
    let b = registry.alloc_chrdev_region(0, 4, "b").unwrap();
    assert_eq!(a.major, 254);
    assert_eq!(b.major, 253);
    assert_eq!(registry.region_name(DeviceNumber::new(b.major, 3)), Some("b"));
    assert_eq!(registry.region_name(DeviceNumber::new(b.major, 4)), None);

    registry.unregister_chrdev_region(a, 1);
    assert_eq!(registry.region_count(), 1);
    assert_eq!(registry.alloc_chrdev_region(0, 1, "c").unwrap().major, 254);
}

#[test]
fn test_region_rejects_empty_count() {
    let mut registry = DeviceRegistry::new();
    assert_eq!(registry.alloc_chrdev_region(0, 0, "x"), Err(Errno::EINVAL));
}

#[test]
fn test_dynamic_majors_exhaust() {
    let mut registry = DeviceRegistry::new();
    for _ in 234..=254 {
        registry.alloc_chrdev_region(0, 1, "x").unwrap();
    }
    assert_eq!(registry.alloc_chrdev_region(0, 1, "x"), Err(Errno::EBUSY));
}

#[test]
fn test_cdev_overlap_is_busy() {
    let mut registry = DeviceRegistry::new();
    let dev = DeviceNumber::new(250, 0);
    let second = DeviceNumber::new(250, 1);
    registry.cdev_add(dev, 2, echo_ops()).unwrap();
    assert_eq!(registry.cdev_add(second, 1, echo_ops()), Err(Errno::EBUSY));
    assert!(registry.is_bound(second));
    assert!(!registry.is_bound(DeviceNumber::new(250, 2)));

    registry.cdev_del(dev);
    assert!(!registry.is_bound(dev));
    assert_eq!(registry.cdev_count(), 0);
}

#[test]
fn test_cdev_range_must_fit_minor_space() {
    let mut registry = DeviceRegistry::new();
    let last = DeviceNumber::new(250, DeviceNumber::MINOR_MASK);

    assert_eq!(
        registry.cdev_add(DeviceNumber::new(250, u32::MAX), 2, echo_ops()),
        Err(Errno::EINVAL)
    );
    assert_eq!(registry.cdev_add(last, 2, echo_ops()), Err(Errno::EINVAL));
    assert_eq!(registry.cdev_add(last, 0, echo_ops()), Err(Errno::EINVAL));
    assert_eq!(registry.cdev_count(), 0);

    // Última posição do espaço de minors
    registry.cdev_add(last, 1, echo_ops()).unwrap();
    assert!(registry.is_bound(last));
    assert!(!registry.is_bound(DeviceNumber::new(250, u32::MAX)));
    assert_eq!(registry.cdev_add(last, 1, echo_ops()), Err(Errno::EBUSY));
}

#[test]
fn test_region_rejects_minor_overflow() {
    let mut registry = DeviceRegistry::new();
    assert_eq!(
        registry.alloc_chrdev_region(u32::MAX, 2, "x"),
        Err(Errno::EINVAL)
    );
    assert_eq!(
        registry.alloc_chrdev_region(DeviceNumber::MINOR_MASK, 2, "x"),
        Err(Errno::EINVAL)
    );
    assert_eq!(registry.region_count(), 0);
    assert_eq!(registry.region_name(DeviceNumber::new(254, u32::MAX)), None);
}

#[test]
fn test_class_and_node_conflicts() {
    let mut registry = DeviceRegistry::new();
    let class = registry.class_create("npcd_class").unwrap();
    assert_eq!(registry.class_create("npcd_class"), Err(Errno::EEXIST));
    assert_eq!(registry.class_id("npcd_class"), Some(class));

    let dev = DeviceNumber::new(254, 0);
    registry.device_create(class, dev, "pcd").unwrap();
    assert_eq!(
        registry.device_create(class, DeviceNumber::new(253, 0), "pcd"),
        Err(Errno::EEXIST)
    );
    assert_eq!(
        registry.device_create(ClassId(99), DeviceNumber::new(252, 0), "other"),
        Err(Errno::ENOENT)
    );
    assert_eq!(registry.lookup("/dev/pcd"), Some(dev));
    assert_eq!(registry.node(dev).map(|n| n.class), Some(class));

    registry.device_destroy(class, dev);
    assert_eq!(registry.lookup("pcd"), None);
    registry.class_destroy(class);
    assert_eq!(registry.class_id("npcd_class"), None);
}

#[test]
fn test_undo_operations_tolerate_missing_entries() {
    let mut registry = DeviceRegistry::new();
    let dev = DeviceNumber::new(200, 0);
    registry.device_destroy(ClassId(7), dev);
    registry.class_destroy(ClassId(7));
    registry.cdev_del(dev);
    registry.unregister_chrdev_region(dev, 1);
    assert_eq!(registry.node_count(), 0);
}

#[test]
fn test_open_unknown_path() {
    let devfs = create_test_devfs();
    assert_eq!(devfs.open("/dev/missing", OpenFlags::RDWR), Err(Errno::ENOENT));
}

#[test]
fn test_open_unbound_node_is_enxio() {
    let devfs = create_test_devfs();
    {
        let mut registry = devfs.registry();
        let class = registry.class_create("c").unwrap();
        registry
            .device_create(class, DeviceNumber::new(240, 0), "orphan")
            .unwrap();
    }
    assert_eq!(devfs.open("/dev/orphan", OpenFlags::RDWR), Err(Errno::ENXIO));
}

#[test]
fn test_fd_routing_and_reuse() {
    let devfs = create_test_devfs();
    publish(&mut devfs.registry(), "echo_class", "echo");

    let fd0 = devfs.open("/dev/echo", OpenFlags::RDWR).unwrap();
    let fd1 = devfs.open("echo", OpenFlags::RDWR).unwrap();
    assert_eq!((fd0, fd1), (0, 1));

    let mut buf = [0u8; 3];
    assert_eq!(devfs.read(fd0, &mut buf), Ok(3));
    assert_eq!(buf, [0x5A; 3]);
    assert_eq!(devfs.write(fd1, &[1, 2]), Ok(2));

    // Posição é por descritor
    assert_eq!(devfs.registry().file(fd0).unwrap().pos(), 3);
    assert_eq!(devfs.registry().file(fd1).unwrap().pos(), 2);

    devfs.close(fd0).unwrap();
    assert_eq!(devfs.read(fd0, &mut buf), Err(Errno::EBADF));
    assert_eq!(devfs.close(fd0), Err(Errno::EBADF));
    assert_eq!(devfs.open("/dev/echo", OpenFlags::RDONLY), Ok(0));
    assert_eq!(devfs.registry().open_count(), 2);
}

#[test]
fn test_access_mode_is_enforced() {
    let devfs = create_test_devfs();
    publish(&mut devfs.registry(), "echo_class", "echo");

    let ro = devfs.open("/dev/echo", OpenFlags::RDONLY).unwrap();
    let wo = devfs.open("/dev/echo", OpenFlags::WRONLY).unwrap();
    let mut buf = [0u8; 1];

    assert_eq!(devfs.write(ro, &[1]), Err(Errno::EBADF));
    assert_eq!(devfs.read(wo, &mut buf), Err(Errno::EBADF));
    assert_eq!(devfs.read(ro, &mut buf), Ok(1));
    assert_eq!(devfs.write(wo, &[1]), Ok(1));
}

#[test]
fn test_lseek_rejects_unknown_whence() {
    let devfs = create_test_devfs();
    publish(&mut devfs.registry(), "echo_class", "echo");

    let fd = devfs.open("/dev/echo", OpenFlags::RDONLY).unwrap();
    assert_eq!(devfs.lseek(fd, 5, SeekWhence::SEEK_SET), Ok(5));
    assert_eq!(devfs.lseek(fd, 0, 42), Err(Errno::EINVAL));
    assert_eq!(devfs.registry().file(fd).unwrap().pos(), 5);
}
