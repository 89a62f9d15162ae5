//! Purchase and restock request specs

use crate::prelude::*;

#[test]
fn buying_decrements_stock_and_counts_sale() {
    let project = Project::empty();

    project
        .kiosk()
        .args(&["buy", "2"])
        .passes()
        .stdout_has("구매 완료! (남은 재고: 4개)");

    let product = project.json(&["show", "2"]);
    assert_eq!(product["stock"], 4);
    assert_eq!(product["sales_count"], 31);
}

#[test]
fn buying_sold_out_product_fails() {
    let project = Project::empty();
    project
        .kiosk()
        .args(&["buy", "3"])
        .fails()
        .stderr_has("품절된 상품입니다.");

    assert_eq!(project.json(&["show", "3"])["sales_count"], 25);
}

#[test]
fn buying_unknown_product_fails() {
    let project = Project::empty();
    project
        .kiosk()
        .args(&["buy", "42"])
        .fails()
        .stderr_has("Product 42 not found");
}

#[test]
fn buying_last_unit_raises_sold_out_notification() {
    let project = Project::empty();
    project
        .kiosk()
        .args(&["admin", "--password", "admin123", "set-stock", "4", "1"])
        .passes();
    project.kiosk().args(&["buy", "4"]).passes();

    let notifications = project.json(&["notifications"]);
    assert_eq!(ids(&notifications), vec![1]);
    assert_eq!(notifications[0]["type"], "품절");
    assert_eq!(notifications[0]["product_id"], 4);
}

#[test]
fn restock_request_is_recorded() {
    let project = Project::empty();
    project
        .kiosk()
        .args(&["request-restock", "3"])
        .passes()
        .stdout_has("입고 알림이 신청되었습니다.");

    let notifications = project.json(&["notifications", "--unread"]);
    assert_eq!(notifications[0]["type"], "입고 요청");
    assert_eq!(notifications[0]["message"], "오징어땅콩 입고 알림을 신청하셨습니다.");
    assert_eq!(notifications[0]["read"], false);
}
