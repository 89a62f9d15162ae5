// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `kiosk products`, `kiosk show`, `kiosk categories` - Browse the catalog

use super::{notifications, Context};
use crate::error::KioskError;
use crate::output::{self, OutputFormat};
use clap::{Args, ValueEnum};
use kiosk_core::{catalog, format_price, CatalogQuery, Product, ProductId, SortOrder, StockFilter};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum StockArg {
    #[default]
    All,
    InStock,
    SoldOut,
}

impl From<StockArg> for StockFilter {
    fn from(arg: StockArg) -> Self {
        match arg {
            StockArg::All => StockFilter::All,
            StockArg::InStock => StockFilter::InStock,
            StockArg::SoldOut => StockFilter::SoldOut,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum SortArg {
    #[default]
    Popular,
    PriceAsc,
    PriceDesc,
    Name,
    Category,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Popular => SortOrder::Popular,
            SortArg::PriceAsc => SortOrder::PriceAsc,
            SortArg::PriceDesc => SortOrder::PriceDesc,
            SortArg::Name => SortOrder::Name,
            SortArg::Category => SortOrder::Category,
        }
    }
}

#[derive(Args)]
pub struct ProductsArgs {
    /// Only show this category
    #[arg(long)]
    pub category: Option<String>,
    /// Stock availability filter
    #[arg(long, value_enum, default_value_t)]
    pub stock: StockArg,
    /// Listing order
    #[arg(long, value_enum, default_value_t)]
    pub sort: SortArg,
}

pub const LIST_HEADER: &str = "ID   NAME         CATEGORY   PRICE    STOCK";

pub fn list(ctx: &Context, args: ProductsArgs) -> anyhow::Result<()> {
    if ctx.format == OutputFormat::Text {
        notifications::print_banner(ctx)?;
    }

    let query = CatalogQuery {
        category: args.category,
        stock: args.stock.into(),
        order: args.sort.into(),
    };
    let products = query.apply(&ctx.inventory.load_products()?);
    output::print_list(
        &products,
        ctx.format,
        Some(LIST_HEADER),
        "표시할 상품이 없습니다.",
    )
}

/// Detail view of one product
#[derive(Serialize)]
#[serde(transparent)]
struct ProductDetail(Product);

impl fmt::Display for ProductDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.0;
        writeln!(f, "{} (ID: {})", p.name, p.id)?;
        writeln!(f, "  카테고리: {}", p.category)?;
        writeln!(f, "  가격: {}", format_price(p.price))?;
        writeln!(f, "  재고: {} ({}개)", p.stock_label(), p.stock)?;
        writeln!(f, "  판매량: {}개", p.sales_count)?;
        writeln!(f, "  최종 업데이트: {}", p.last_updated)?;
        writeln!(f, "  성분표: {}", p.ingredients)?;
        write!(f, "  알레르기 유발 성분: {}", p.allergens)
    }
}

pub fn show(ctx: &Context, id: ProductId) -> anyhow::Result<()> {
    let product = ctx
        .inventory
        .product(id)?
        .ok_or_else(|| KioskError::product_not_found(id))?;
    let sold_out = !product.is_in_stock();
    output::print(&ProductDetail(product), ctx.format)?;

    if sold_out && ctx.format == OutputFormat::Text {
        println!();
        println!("품절된 상품입니다. 입고 알림 신청: kiosk request-restock {}", id);
    }
    Ok(())
}

pub fn categories(ctx: &Context) -> anyhow::Result<()> {
    let names = catalog::categories(&ctx.inventory.load_products()?);
    output::print_list(&names, ctx.format, None, "카테고리가 없습니다.")
}
