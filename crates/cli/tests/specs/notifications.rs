//! Notification specs

use crate::prelude::*;

#[test]
fn no_notifications_initially() {
    let project = Project::empty();
    project
        .kiosk()
        .args(&["notifications"])
        .passes()
        .stdout_has("알림이 없습니다.");
    assert!(!project.data_file("notifications.json").exists());
}

#[test]
fn restocking_sold_out_item_notifies() {
    let project = Project::empty();
    project
        .kiosk()
        .args(&["admin", "--password", "admin123", "set-stock", "3", "4"])
        .passes();

    assert_eq!(project.json(&["show", "3"])["stock"], 4);

    let unread = project.json(&["notifications", "--unread"]);
    assert_eq!(ids(&unread), vec![1]);
    assert_eq!(unread[0]["product_id"], 3);
    assert_eq!(unread[0]["type"], "입고");
    assert_eq!(unread[0]["message"], "상품이 입고되었습니다. (재고: 4개)");
}

#[test]
fn product_listing_shows_unread_banner() {
    let project = Project::empty();
    project.kiosk().args(&["request-restock", "3"]).passes();

    project
        .kiosk()
        .args(&["products"])
        .passes()
        .stdout_has("새로운 알림 1개")
        .stdout_has("오징어땅콩: 오징어땅콩 입고 알림을 신청하셨습니다.");
}

#[test]
fn marking_read_hides_notification() {
    let project = Project::empty();
    project.kiosk().args(&["request-restock", "3"]).passes();
    project.kiosk().args(&["request-restock", "3"]).passes();

    project
        .kiosk()
        .args(&["notifications", "read", "1"])
        .passes();

    assert_eq!(ids(&project.json(&["notifications", "--unread"])), vec![2]);
    assert_eq!(ids(&project.json(&["notifications"])), vec![1, 2]);
    project
        .kiosk()
        .args(&["products"])
        .passes()
        .stdout_has("새로운 알림 1개");
}

#[test]
fn marking_unknown_notification_fails() {
    let project = Project::empty();
    project
        .kiosk()
        .args(&["notifications", "read", "9"])
        .fails()
        .stderr_has("Notification 9 not found");
}

#[test]
fn log_file_keeps_hangul_literal() {
    let project = Project::empty();
    project.kiosk().args(&["request-restock", "3"]).passes();

    let text = std::fs::read_to_string(project.data_file("notifications.json")).unwrap();
    assert!(text.contains("\"type\": \"입고 요청\""));
    assert!(!text.contains("\\u"));
}
