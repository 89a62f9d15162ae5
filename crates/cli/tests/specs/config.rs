//! Configuration specs

use crate::prelude::*;

#[test]
fn config_file_moves_data_dir() {
    let project = Project::empty();
    project.file("kiosk.toml", "data_dir = \"shop\"\n");

    project.kiosk().args(&["products"]).passes();

    assert!(project.path().join("shop/products.csv").exists());
    assert!(!project.data_file("products.csv").exists());
}

#[test]
fn flag_overrides_environment() {
    let project = Project::empty();
    project
        .kiosk()
        .env("KIOSK_DATA_DIR", "from-env")
        .args(&["products", "--data-dir", "from-flag"])
        .passes();

    assert!(project.path().join("from-flag/products.csv").exists());
    assert!(!project.path().join("from-env").exists());
}

#[test]
fn environment_sets_data_dir() {
    let project = Project::empty();
    project
        .kiosk()
        .env("KIOSK_DATA_DIR", "from-env")
        .args(&["categories"])
        .passes();

    assert!(project.path().join("from-env/products.csv").exists());
}

#[test]
fn configured_admin_password() {
    let project = Project::empty();
    project.file("kiosk.toml", "admin_password = \"letmein\"\n");

    project
        .kiosk()
        .args(&["admin", "--password", "admin123", "list"])
        .fails()
        .stderr_has("Incorrect admin password");
    project
        .kiosk()
        .args(&["admin", "--password", "letmein", "list"])
        .passes();
}

#[test]
fn configured_ranking_limit() {
    let project = Project::empty();
    project.file("kiosk.toml", "popular_limit = 2\n");

    let ranking = project.json(&["ranking"]);
    assert_eq!(ids(&ranking["ranking"]), vec![1, 4]);
}

#[test]
fn explicit_config_path() {
    let project = Project::empty();
    project.file("conf/shop.toml", "data_dir = \"elsewhere\"\n");

    project
        .kiosk()
        .args(&["categories", "--config", "conf/shop.toml"])
        .passes();

    assert!(project.path().join("elsewhere/products.csv").exists());
}

#[test]
fn invalid_config_is_reported() {
    let project = Project::empty();
    project.file("kiosk.toml", "popular_limit = \"lots\"\n");

    project
        .kiosk()
        .args(&["products"])
        .fails()
        .stderr_has("invalid config");
}
