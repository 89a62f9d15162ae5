//! Catalog browsing specs
//!
//! Listing, filtering, sorting, detail view and the popularity ranking.

use crate::prelude::*;

#[test]
fn first_run_seeds_the_catalog() {
    let project = Project::empty();

    project
        .kiosk()
        .args(&["products"])
        .passes()
        .stdout_has("새우깡")
        .stdout_has("사이다");

    assert!(project.data_file("products.csv").exists());
}

#[test]
fn default_order_is_best_sellers_first() {
    let project = Project::empty();
    assert_eq!(ids(&project.json(&["products"])), vec![1, 4, 5, 2, 3]);
}

#[test]
fn category_filter_with_price_order() {
    let project = Project::empty();
    let listed = project.json(&["products", "--category", "음료", "--sort", "price-asc"]);
    assert_eq!(ids(&listed), vec![4, 5]);
}

#[test]
fn sold_out_filter() {
    let project = Project::empty();
    assert_eq!(ids(&project.json(&["products", "--stock", "sold-out"])), vec![3]);
}

#[test]
fn empty_selection_says_so() {
    let project = Project::empty();
    project
        .kiosk()
        .args(&["products", "--category", "문구"])
        .passes()
        .stdout_has("표시할 상품이 없습니다.");
}

#[test]
fn show_sold_out_product() {
    let project = Project::empty();
    project
        .kiosk()
        .args(&["show", "3"])
        .passes()
        .stdout_has("오징어땅콩")
        .stdout_has("품절")
        .stdout_has("땅콩, 오징어")
        .stdout_has("kiosk request-restock 3");
}

#[test]
fn show_unknown_product_fails() {
    let project = Project::empty();
    project
        .kiosk()
        .args(&["show", "99"])
        .fails()
        .stderr_has("Product 99 not found");
}

#[test]
fn categories_are_listed() {
    let project = Project::empty();
    let categories = project.json(&["categories"]);
    assert_eq!(categories, serde_json::json!(["과자", "음료"]));
}

#[test]
fn ranking_with_limit_and_category_totals() {
    let project = Project::empty();
    let ranking = project.json(&["ranking", "--limit", "2"]);

    assert_eq!(ids(&ranking["ranking"]), vec![1, 4]);
    assert_eq!(ranking["ranking"][0]["rank"], 1);
    assert_eq!(ranking["categories"][0]["category"], "과자");
    assert_eq!(ranking["categories"][0]["total_sales"], 105);
    assert_eq!(ranking["categories"][0]["average_price"], 1767);
}

#[test]
fn ranking_text_output() {
    let project = Project::empty();
    project
        .kiosk()
        .args(&["ranking"])
        .passes()
        .stdout_has("인기 상품 TOP 5")
        .stdout_has("카테고리별 통계");
}

#[test]
fn malformed_ledger_is_reported() {
    let project = Project::empty();
    project.file("data/products.csv", "id,name\nnot-a-number,x\n");

    project
        .kiosk()
        .args(&["products"])
        .fails()
        .stderr_has("CSV error");
}
