// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `kiosk ranking` - Best sellers and per-category totals

use super::Context;
use crate::output;
use clap::Args;
use kiosk_core::{catalog, format_price, CategoryStats, Product};
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct RankingArgs {
    /// Number of products to rank (defaults to `popular_limit` from config)
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Serialize)]
struct RankEntry {
    rank: usize,
    id: u32,
    name: String,
    category: String,
    sales_count: u32,
    price: u32,
    stock: u32,
}

impl RankEntry {
    fn new(rank: usize, p: Product) -> Self {
        Self {
            rank,
            id: p.id,
            name: p.name,
            category: p.category,
            sales_count: p.sales_count,
            price: p.price,
            stock: p.stock,
        }
    }
}

#[derive(Serialize)]
struct Ranking {
    ranking: Vec<RankEntry>,
    categories: Vec<CategoryStats>,
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "인기 상품 TOP {}", self.ranking.len())?;
        for e in &self.ranking {
            writeln!(
                f,
                "{:>3}. {:<12} {:<6} 판매량 {:>5}  {:>9}  재고 {}",
                e.rank,
                e.name,
                e.category,
                e.sales_count,
                format_price(e.price),
                e.stock
            )?;
        }
        writeln!(f)?;
        write!(f, "카테고리별 통계")?;
        for stats in &self.categories {
            write!(f, "\n  {}", stats)?;
        }
        Ok(())
    }
}

pub fn handle(ctx: &Context, args: RankingArgs) -> anyhow::Result<()> {
    let products = ctx.inventory.load_products()?;
    let limit = args.limit.unwrap_or(ctx.config.popular_limit);

    let ranking = Ranking {
        ranking: catalog::popular(&products, limit)
            .into_iter()
            .zip(1..)
            .map(|(p, rank)| RankEntry::new(rank, p))
            .collect(),
        categories: catalog::category_stats(&products),
    };
    output::print(&ranking, ctx.format)
}
