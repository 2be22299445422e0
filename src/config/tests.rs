use super::*;
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::constants::{TIER_FAST_LOCAL, TIER_MASTER};

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_alias_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("ALIAS_CACHE_DIR");
        env::remove_var("ALIAS_SOURCE_ROOT");
        env::remove_var("ALIAS_SOURCE_DIR");
        env::remove_var("ALIAS_BINARY_FILE");
        env::remove_var("ALIAS_COMPRESSED_FILE");
        env::remove_var("ALIAS_MASTER_FILE");
        env::remove_var("ALIAS_BINARY_WRITE_BACK");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.cache_dir, PathBuf::from("./.alias-cache"));
    assert_eq!(config.source_root, PathBuf::from("./alias-source"));
    assert_eq!(config.source_dir, "alias");
    assert_eq!(config.binary_file, "alias_index.rkyv");
    assert_eq!(config.compressed_file, "alias_index.json.gz");
    assert_eq!(config.master_file, "alias_master.json");
    assert!(!config.binary_write_back);
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_alias_env();

    let config = Config::from_env().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_alias_env();

    let config = with_env_vars(
        &[
            ("ALIAS_CACHE_DIR", "/tmp/alias-cache"),
            ("ALIAS_SOURCE_ROOT", "/mnt/share"),
            ("ALIAS_SOURCE_DIR", "crm"),
            ("ALIAS_MASTER_FILE", "aliases.tqn"),
            ("ALIAS_BINARY_WRITE_BACK", "TRUE"),
        ],
        Config::from_env,
    )
    .unwrap();

    assert_eq!(config.cache_dir, PathBuf::from("/tmp/alias-cache"));
    assert_eq!(config.source_root, PathBuf::from("/mnt/share"));
    assert_eq!(config.source_dir, "crm");
    assert_eq!(config.master_file, "aliases.tqn");
    assert_eq!(config.binary_file, "alias_index.rkyv");
    assert!(config.binary_write_back);
}

#[test]
#[serial]
fn test_from_env_blank_values_use_defaults() {
    clear_alias_env();

    let config = with_env_vars(
        &[("ALIAS_CACHE_DIR", "   "), ("ALIAS_SOURCE_DIR", "")],
        Config::from_env,
    )
    .unwrap();

    assert_eq!(config.cache_dir, PathBuf::from("./.alias-cache"));
    assert_eq!(config.source_dir, "alias");
}

#[test]
#[serial]
fn test_from_env_invalid_bool() {
    clear_alias_env();

    let result = with_env_vars(&[("ALIAS_BINARY_WRITE_BACK", "sometimes")], Config::from_env);

    match result {
        Err(ConfigError::InvalidBool { name, value }) => {
            assert_eq!(name, "ALIAS_BINARY_WRITE_BACK");
            assert_eq!(value, "sometimes");
        }
        other => panic!("expected InvalidBool, got {other:?}"),
    }
}

#[test]
fn test_validate_default_ok() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        cache_dir: temp_dir.path().join("cache"),
        source_root: temp_dir.path().join("missing"),
        ..Config::default()
    };

    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_cache_dir_is_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("not_a_dir");
    std::fs::write(&file_path, "test").unwrap();

    let config = Config {
        cache_dir: file_path.clone(),
        ..Config::default()
    };

    match config.validate() {
        Err(ConfigError::NotADirectory { path }) => assert_eq!(path, file_path),
        other => panic!("expected NotADirectory, got {other:?}"),
    }
}

#[test]
fn test_validate_source_root_is_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("root");
    std::fs::write(&file_path, "test").unwrap();

    let config = Config {
        cache_dir: temp_dir.path().join("cache"),
        source_root: file_path,
        ..Config::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotADirectory { .. })
    ));
}

#[test]
fn test_validate_rejects_nested_names() {
    let temp_dir = TempDir::new().unwrap();
    for (field, bad) in [("dir", "a/b"), ("master", "../master.json"), ("binary", "")] {
        let mut config = Config {
            cache_dir: temp_dir.path().join("cache"),
            ..Config::default()
        };
        match field {
            "dir" => config.source_dir = bad.to_string(),
            "master" => config.master_file = bad.to_string(),
            _ => config.binary_file = bad.to_string(),
        }

        assert!(
            matches!(config.validate(), Err(ConfigError::InvalidName { .. })),
            "{field}={bad:?} should be rejected"
        );
    }
}

#[test]
fn test_tier_plan_order_and_write_back() {
    let plan = Config::default().tier_plan();

    let names: Vec<_> = plan.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        vec![TIER_FAST_LOCAL, "compact_binary", "compressed", TIER_MASTER]
    );
    assert!(plan[0].is_fast_local());
    assert_eq!(plan[1].write_back, WriteBack::None);
    assert_eq!(plan[2].write_back, WriteBack::CopyBytes);
    assert_eq!(plan[3].write_back, WriteBack::Reserialize);
    assert_eq!(plan[3].format, TierFormat::Master(MasterFormat::Json));
}

#[test]
fn test_tier_plan_binary_write_back_and_tauq_master() {
    let config = Config {
        binary_write_back: true,
        master_file: "aliases.tauq".to_string(),
        ..Config::default()
    };

    let plan = config.tier_plan();

    assert_eq!(plan[1].write_back, WriteBack::Reserialize);
    assert_eq!(plan[3].format, TierFormat::Master(MasterFormat::Tauq));
}
