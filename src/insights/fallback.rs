use super::{InsightsSummary, LowStockItem, TopProduct, Totals};

pub const FALLBACK_WARNING: &str = "Live insights unavailable — showing demo data.";

/// Demo data shown whenever live insights cannot be fetched.
pub fn fallback_summary() -> InsightsSummary {
    InsightsSummary {
        top_products: vec![
            product("POS Machine", 32, 480_000.0),
            product("Thermal Paper", 140, 70_000.0),
            product("Barcode Scanner", 22, 110_000.0),
        ],
        low_stock_items: vec![
            low_stock("1", "Thermal Paper", 8, 10),
            low_stock("2", "Label Rolls", 3, 5),
        ],
        totals: Totals {
            sales: 1_250_000.0,
            purchase: 820_000.0,
            profit: 430_000.0,
        },
    }
}

fn product(name: &str, quantity_sold: u64, revenue: f64) -> TopProduct {
    TopProduct {
        name: name.to_string(),
        quantity_sold,
        revenue,
    }
}

fn low_stock(id: &str, name: &str, stock_quantity: u64, low_stock_threshold: u64) -> LowStockItem {
    LowStockItem {
        id: id.to_string(),
        name: name.to_string(),
        stock_quantity: Some(stock_quantity),
        low_stock_threshold,
    }
}
