//! Admin specs
//!
//! Stock management behind the shared password.

use crate::prelude::*;

#[test]
fn wrong_password_is_rejected() {
    let project = Project::empty();
    project
        .kiosk()
        .args(&["admin", "--password", "guess", "set-stock", "3", "9"])
        .fails()
        .stderr_has("Incorrect admin password");

    assert_eq!(project.json(&["show", "3"])["stock"], 0);
}

#[test]
fn password_from_environment() {
    let project = Project::empty();
    project
        .kiosk()
        .env("KIOSK_ADMIN_PASSWORD", "admin123")
        .args(&["admin", "set-stock", "1", "7"])
        .passes()
        .stdout_has("재고가 업데이트되었습니다!");

    assert_eq!(project.json(&["show", "1"])["stock"], 7);
}

#[test]
fn positive_stock_change_is_quiet() {
    let project = Project::empty();
    project
        .kiosk()
        .args(&["admin", "--password", "admin123", "set-stock", "1", "3"])
        .passes();

    assert_eq!(project.json(&["notifications"]), serde_json::json!([]));
}

#[test]
fn setting_stock_of_unknown_product_fails() {
    let project = Project::empty();
    project
        .kiosk()
        .args(&["admin", "--password", "admin123", "set-stock", "77", "1"])
        .fails()
        .stderr_has("Product 77 not found");
}

#[test]
fn overview_lists_ledger_and_recent_notifications() {
    let project = Project::empty();
    project
        .kiosk()
        .args(&["admin", "--password", "admin123", "set-stock", "5", "0"])
        .passes();

    project
        .kiosk()
        .args(&["admin", "--password", "admin123", "list"])
        .passes()
        .stdout_has("전체 상품 목록")
        .stdout_has("알림 관리")
        .stdout_has("품절 - 사이다: 상품이 품절되었습니다.");
}

#[test]
fn set_stock_json_reports_new_level() {
    let project = Project::empty();
    let reported = project.json(&["admin", "--password", "admin123", "set-stock", "2", "8"]);

    assert_eq!(reported, serde_json::json!({ "product_id": 2, "stock": 8 }));
}
