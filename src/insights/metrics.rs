use super::Totals;

/// Percentages rendered as the dashboard gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedMetrics {
    pub sales_achievement_pct: u16,
    pub profit_margin_pct: u16,
}

impl DerivedMetrics {
    pub fn from_totals(totals: &Totals) -> Self {
        Self {
            // No sales target exists yet, so achievement is pinned.
            sales_achievement_pct: 100,
            profit_margin_pct: profit_margin_pct(totals.sales, totals.profit),
        }
    }
}

fn profit_margin_pct(sales: f64, profit: f64) -> u16 {
    let ratio = profit / sales.max(1.0) * 100.0;
    if ratio.is_nan() {
        return 0;
    }
    ratio.round().clamp(0.0, 100.0) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(sales: f64, profit: f64) -> Totals {
        Totals { sales, purchase: 0.0, profit }
    }

    #[test]
    fn test_margin_example() {
        let metrics = DerivedMetrics::from_totals(&totals(1_250_000.0, 430_000.0));
        assert_eq!(metrics.profit_margin_pct, 34);
        assert_eq!(metrics.sales_achievement_pct, 100);
    }

    #[test]
    fn test_margin_stays_in_bounds() {
        let cases = [
            (0.0, 0.0),
            (0.0, 500.0),
            (0.0, -500.0),
            (0.5, 10.0),
            (100.0, 250.0),
            (100.0, -250.0),
            (1_000_000.0, f64::MAX),
            (1_000_000.0, f64::MIN),
            (f64::MAX, 1.0),
        ];
        for (sales, profit) in cases {
            let pct = DerivedMetrics::from_totals(&totals(sales, profit)).profit_margin_pct;
            assert!(pct <= 100, "sales={} profit={} gave {}", sales, profit, pct);
        }
    }

    #[test]
    fn test_negative_profit_clamps_to_zero() {
        assert_eq!(DerivedMetrics::from_totals(&totals(1000.0, -300.0)).profit_margin_pct, 0);
    }

    #[test]
    fn test_zero_sales_divides_by_one() {
        assert_eq!(DerivedMetrics::from_totals(&totals(0.0, 0.4)).profit_margin_pct, 40);
        assert_eq!(DerivedMetrics::from_totals(&totals(0.0, 7.0)).profit_margin_pct, 100);
    }

    #[test]
    fn test_half_rounds_up() {
        assert_eq!(DerivedMetrics::from_totals(&totals(8.0, 1.0)).profit_margin_pct, 13);
    }
}
