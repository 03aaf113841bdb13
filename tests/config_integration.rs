//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use plane2d::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("P2D_DEBUG__LOG_LEVEL", "trace");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.debug.log_level, "trace");
    std::env::remove_var("P2D_DEBUG__LOG_LEVEL");
}

#[test]
#[serial]
fn test_env_override_numeric_section() {
    std::env::set_var("P2D_SPATIAL__CELL_SIZE", "32.0");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.spatial.cell_size, 32.0);
    std::env::remove_var("P2D_SPATIAL__CELL_SIZE");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("P2D_DEBUG__LOG_LEVEL");
    std::env::remove_var("P2D_SPATIAL__CELL_SIZE");

    let cwd = std::env::current_dir().unwrap();
    println!("Current dir: {:?}", cwd);
    println!(
        "config/default.toml exists: {}",
        cwd.join("config/default.toml").exists()
    );

    let config = AppConfig::load().unwrap();
    assert_eq!(config.scene.path, "scenes/demo.ron");
    assert!(config.spatial.cell_size > 0.0);
}
