//! Testes do PCD pelos descritores do DevFS

#![cfg(test)]

use crate::drivers::pcd::{AccessMode, PcdConfig, PcdDriver, DEV_MEM_SIZE};
use crate::fs::devfs::{DevFS, OpenFlags, SeekWhence};
use crate::sys::Errno;

fn setup() -> (DevFS, PcdDriver) {
    let devfs = DevFS::new();
    let driver = PcdDriver::init(&mut *devfs.registry(), PcdConfig::new()).unwrap();
    (devfs, driver)
}

#[test]
fn test_init_publishes_node() {
    let (devfs, driver) = setup();
    {
        let registry = devfs.registry();
        assert_eq!(registry.lookup("/dev/pcd"), Some(driver.dev()));
        assert_eq!(registry.region_name(driver.dev()), Some("npcd_devices"));
        assert_eq!(registry.class_id("npcd_class"), Some(driver.class()));
        assert!(registry.is_bound(driver.dev()));
        assert_eq!(driver.dev().minor, 0);
    }
    driver.exit(&mut *devfs.registry());
}

#[test]
fn test_fill_600_bytes_through_descriptor() {
    let (devfs, driver) = setup();
    let fd = devfs.open("/dev/pcd", OpenFlags::RDWR).unwrap();

    assert_eq!(devfs.write(fd, &[0xAA; 600]), Ok(DEV_MEM_SIZE));
    assert_eq!(devfs.write(fd, &[0x01]), Err(Errno::ENOMEM));
    assert_eq!(devfs.lseek(fd, 0, SeekWhence::SEEK_SET), Ok(0));

    let mut out = [0u8; 600];
    assert_eq!(devfs.read(fd, &mut out), Ok(DEV_MEM_SIZE));
    assert!(out[..DEV_MEM_SIZE].iter().all(|b| *b == 0xAA));
    assert_eq!(devfs.read(fd, &mut out), Ok(0));

    devfs.close(fd).unwrap();
    driver.exit(&mut *devfs.registry());
}

#[test]
fn test_data_persists_across_opens() {
    let (devfs, driver) = setup();

    let fd = devfs.open("pcd", OpenFlags::WRONLY).unwrap();
    assert_eq!(devfs.write(fd, b"persist"), Ok(7));
    devfs.close(fd).unwrap();

    let fd = devfs.open("/dev/pcd", OpenFlags::RDONLY).unwrap();
    assert_eq!(devfs.registry().file(fd).unwrap().pos(), 0);
    let mut out = [0u8; 7];
    assert_eq!(devfs.read(fd, &mut out), Ok(7));
    assert_eq!(&out, b"persist");
    devfs.close(fd).unwrap();

    driver.exit(&mut *devfs.registry());
}

#[test]
fn test_lseek_errors_through_descriptor() {
    let (devfs, driver) = setup();
    let fd = devfs.open("/dev/pcd", OpenFlags::RDONLY).unwrap();
    let end = DEV_MEM_SIZE as i64;

    assert_eq!(devfs.lseek(fd, 0, SeekWhence::SEEK_END), Ok(end));
    assert_eq!(devfs.lseek(fd, 1, SeekWhence::SEEK_CUR), Err(Errno::EINVAL));
    assert_eq!(devfs.lseek(fd, end + 1, SeekWhence::SEEK_SET), Err(Errno::EINVAL));
    assert_eq!(devfs.lseek(fd, 0, 7), Err(Errno::EINVAL));
    assert_eq!(devfs.registry().file(fd).unwrap().pos(), end);

    devfs.close(fd).unwrap();
    driver.exit(&mut *devfs.registry());
}

#[test]
fn test_exit_removes_node() {
    let (devfs, driver) = setup();
    let dev = driver.dev();
    driver.exit(&mut *devfs.registry());

    let registry = devfs.registry();
    assert_eq!(registry.lookup("/dev/pcd"), None);
    assert!(!registry.is_bound(dev));
    assert_eq!(registry.region_count(), 0);
    assert_eq!(registry.class_id("npcd_class"), None);
    drop(registry);

    assert_eq!(devfs.open("/dev/pcd", OpenFlags::RDWR), Err(Errno::ENOENT));
}

#[test]
fn test_open_handle_survives_exit() {
    let (devfs, driver) = setup();
    let fd = devfs.open("/dev/pcd", OpenFlags::RDWR).unwrap();
    assert_eq!(devfs.write(fd, b"abc"), Ok(3));

    driver.exit(&mut *devfs.registry());

    assert_eq!(devfs.lseek(fd, 0, SeekWhence::SEEK_SET), Ok(0));
    let mut out = [0u8; 3];
    assert_eq!(devfs.read(fd, &mut out), Ok(3));
    assert_eq!(&out, b"abc");
    assert_eq!(devfs.close(fd), Ok(()));
}

#[test]
fn test_reinit_after_exit() {
    let (devfs, driver) = setup();
    driver.exit(&mut *devfs.registry());

    let driver = PcdDriver::init(&mut *devfs.registry(), PcdConfig::new()).unwrap();
    let fd = devfs.open("/dev/pcd", OpenFlags::RDONLY).unwrap();
    let mut out = [0xFFu8; 4];
    assert_eq!(devfs.read(fd, &mut out), Ok(4));
    assert_eq!(out, [0u8; 4]);
    devfs.close(fd).unwrap();
    driver.exit(&mut *devfs.registry());
}

#[test]
fn test_exclusive_mode_through_descriptor() {
    let devfs = DevFS::new();
    let config = PcdConfig::new().with_access_mode(AccessMode::Exclusive);
    let driver = PcdDriver::init(&mut *devfs.registry(), config).unwrap();
    assert_eq!(driver.device().buffer().mode(), AccessMode::Exclusive);

    let fd = devfs.open("/dev/pcd", OpenFlags::RDWR).unwrap();
    assert_eq!(devfs.write(fd, &[3; 16]), Ok(16));
    assert!(!driver.device().buffer().is_locked());
    devfs.close(fd).unwrap();

    driver.exit(&mut *devfs.registry());
}

#[test]
fn test_two_drivers_get_distinct_majors() {
    let devfs = DevFS::new();
    let first = PcdDriver::init(&mut *devfs.registry(), PcdConfig::new()).unwrap();
    let second_config = PcdConfig::new()
        .with_class_name("npcd_class2")
        .with_node_name("pcd2");
    let second = PcdDriver::init(&mut *devfs.registry(), second_config).unwrap();
    assert_ne!(first.dev().major, second.dev().major);

    let a = devfs.open("/dev/pcd", OpenFlags::RDWR).unwrap();
    let b = devfs.open("/dev/pcd2", OpenFlags::RDWR).unwrap();
    devfs.write(a, b"A").unwrap();
    let mut out = [0xFFu8; 1];
    devfs.read(b, &mut out).unwrap();
    assert_eq!(out, [0]);

    devfs.close(a).unwrap();
    devfs.close(b).unwrap();
    second.exit(&mut *devfs.registry());
    first.exit(&mut *devfs.registry());
}
