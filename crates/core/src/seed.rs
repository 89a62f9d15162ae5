// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Default catalog written when no ledger exists yet

use crate::product::Product;

struct SeedRow {
    name: &'static str,
    category: &'static str,
    price: u32,
    stock: u32,
    ingredients: &'static str,
    allergens: &'static str,
    sales_count: u32,
}

const SEED_ROWS: [SeedRow; 5] = [
    SeedRow {
        name: "새우깡",
        category: "과자",
        price: 1500,
        stock: 10,
        ingredients: "밀가루, 새우, 식물성유지, 설탕, 소금",
        allergens: "밀, 새우",
        sales_count: 50,
    },
    SeedRow {
        name: "초코파이",
        category: "과자",
        price: 2000,
        stock: 5,
        ingredients: "밀가루, 설탕, 코코아, 식물성유지",
        allergens: "밀, 우유",
        sales_count: 30,
    },
    SeedRow {
        name: "오징어땅콩",
        category: "과자",
        price: 1800,
        stock: 0,
        ingredients: "땅콩, 오징어, 설탕, 소금",
        allergens: "땅콩, 오징어",
        sales_count: 25,
    },
    SeedRow {
        name: "콜라",
        category: "음료",
        price: 1200,
        stock: 15,
        ingredients: "탄산수, 설탕, 카라멜색소",
        allergens: "없음",
        sales_count: 40,
    },
    SeedRow {
        name: "사이다",
        category: "음료",
        price: 1200,
        stock: 20,
        ingredients: "탄산수, 설탕, 구연산",
        allergens: "없음",
        sales_count: 35,
    },
];

/// Build the seed catalog, ids `1..=5`, all stamped with `created_at`
pub fn seed_catalog(created_at: &str) -> Vec<Product> {
    SEED_ROWS
        .iter()
        .zip(1..)
        .map(|(row, id)| Product {
            id,
            name: row.name.to_string(),
            category: row.category.to_string(),
            price: row.price,
            stock: row.stock,
            ingredients: row.ingredients.to_string(),
            allergens: row.allergens.to_string(),
            sales_count: row.sales_count,
            last_updated: created_at.to_string(),
        })
        .collect()
}
