//! Dashboard metrics and chart series, computed from the three collections.
//!
//! [`Dashboard::compute`] is a pure function of its inputs: same collections, same
//! dashboard.

use crate::model::{Product, ProductId, RestockOrder, Sale};
use serde::Serialize;
use std::collections::HashMap;

/// Products with fewer units than this are listed as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Entries kept in each chart series.
pub const CHART_LIMIT: usize = 10;

/// Characters of a product name shown on a chart axis.
pub const CHART_NAME_LEN: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardMetrics {
    /// Σ price × stock over all products.
    pub total_inventory_value: f64,
    /// Σ total price over all sales, including sales of unknown products.
    pub total_sales_value: f64,
    /// Products below [`LOW_STOCK_THRESHOLD`], in input order.
    pub low_stock_items: Vec<Product>,
    /// Restock orders not yet received, in input order.
    pub pending_restocks: Vec<RestockOrder>,
}

/// One bar of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub product_id: ProductId,
    /// Display name, truncated to [`CHART_NAME_LEN`] characters.
    pub name: String,
    pub value: u64,
}

impl ChartPoint {
    fn new(product: &Product, value: u64) -> Self {
        Self {
            product_id: product.id,
            name: product.name.chars().take(CHART_NAME_LEN).collect(),
            value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dashboard {
    pub metrics: DashboardMetrics,
    /// Units sold per product, highest first. Products without sales count as 0.
    pub top_selling_products: Vec<ChartPoint>,
    /// Products by stock, highest first.
    pub stock_levels: Vec<ChartPoint>,
}

impl Dashboard {
    pub fn compute(products: &[Product], sales: &[Sale], restocks: &[RestockOrder]) -> Self {
        let metrics = DashboardMetrics {
            total_inventory_value: products.iter().map(Product::inventory_value).sum(),
            total_sales_value: sales.iter().map(|s| s.total_price).sum(),
            low_stock_items: products
                .iter()
                .filter(|p| p.stock < LOW_STOCK_THRESHOLD)
                .cloned()
                .collect(),
            pending_restocks: restocks.iter().filter(|r| r.is_pending()).cloned().collect(),
        };

        let mut sold: HashMap<ProductId, u64> = HashMap::new();
        for sale in sales {
            *sold.entry(sale.product_id).or_default() += u64::from(sale.quantity);
        }

        let top_selling_products = top(products.iter().map(|p| {
            ChartPoint::new(p, sold.get(&p.id).copied().unwrap_or(0))
        }));
        let stock_levels = top(products.iter().map(|p| ChartPoint::new(p, u64::from(p.stock))));

        Self {
            metrics,
            top_selling_products,
            stock_levels,
        }
    }
}

/// Highest values first, ties kept in input order, cut to [`CHART_LIMIT`].
fn top(points: impl Iterator<Item = ChartPoint>) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = points.collect();
    // sort_by is stable
    points.sort_by(|a, b| b.value.cmp(&a.value));
    points.truncate(CHART_LIMIT);
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, name: &str, price: f64, stock: u32) -> Product {
        Product::new(id, name, price, stock)
    }

    fn sale(id: u32, product_id: u32, quantity: u32, total: f64) -> Sale {
        Sale::new(id, product_id, quantity, total)
    }

    fn names(points: &[ChartPoint]) -> Vec<&str> {
        points.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn empty_inputs_give_empty_dashboard() {
        let dashboard = Dashboard::compute(&[], &[], &[]);
        assert_eq!(dashboard, Dashboard::default());
    }

    #[test]
    fn same_inputs_same_dashboard() {
        let products = vec![product(1, "A", 2.0, 3), product(2, "B", 1.5, 20)];
        let sales = vec![sale(1, 1, 2, 4.0), sale(2, 2, 1, 1.5)];
        let restocks = vec![RestockOrder::new(1, 1, 10)];

        let first = Dashboard::compute(&products, &sales, &restocks);
        let second = Dashboard::compute(&products, &sales, &restocks);
        assert_eq!(first, second);
    }

    #[test]
    fn totals_are_plain_sums() {
        let products = vec![product(1, "A", 2.5, 4), product(2, "B", 10.0, 0)];
        let sales = vec![sale(1, 1, 1, 2.5), sale(2, 1, 3, 7.5)];
        let dashboard = Dashboard::compute(&products, &sales, &[]);

        assert_eq!(dashboard.metrics.total_inventory_value, 10.0);
        assert_eq!(dashboard.metrics.total_sales_value, 10.0);
    }

    #[test]
    fn low_stock_boundary() {
        let products = vec![
            product(1, "Nine", 1.0, 9),
            product(2, "Ten", 1.0, 10),
            product(3, "Zero", 1.0, 0),
        ];
        let dashboard = Dashboard::compute(&products, &[], &[]);
        let low: Vec<u32> = dashboard
            .metrics
            .low_stock_items
            .iter()
            .map(|p| p.id.0)
            .collect();
        assert_eq!(low, vec![1, 3]);
    }

    #[test]
    fn orphan_sale_counts_in_total_only() {
        let products = vec![product(1, "Only", 5.0, 2)];
        let sales = vec![sale(1, 99, 3, 15.0)];
        let dashboard = Dashboard::compute(&products, &sales, &[]);

        assert_eq!(dashboard.metrics.total_sales_value, 15.0);
        assert_eq!(dashboard.top_selling_products.len(), 1);
        assert_eq!(dashboard.top_selling_products[0].product_id, ProductId(1));
        assert_eq!(dashboard.top_selling_products[0].value, 0);
        assert!(dashboard
            .top_selling_products
            .iter()
            .all(|p| p.product_id != ProductId(99)));
    }

    #[test]
    fn top_selling_ties_keep_input_order() {
        let products = vec![
            product(1, "A", 1.0, 1),
            product(2, "B", 1.0, 1),
            product(3, "C", 1.0, 1),
        ];
        let sales = vec![
            sale(1, 1, 5, 5.0),
            sale(2, 2, 5, 5.0),
            sale(3, 3, 4, 4.0),
            sale(4, 3, 6, 6.0),
        ];
        let dashboard = Dashboard::compute(&products, &sales, &[]);

        assert_eq!(names(&dashboard.top_selling_products), vec!["C", "A", "B"]);
        let values: Vec<u64> = dashboard.top_selling_products.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![10, 5, 5]);
    }

    #[test]
    fn series_are_cut_to_ten_with_short_names() {
        let products: Vec<Product> = (1..=12)
            .map(|i| product(i, &format!("Extra long product name {i}"), 1.0, i))
            .collect();
        let dashboard = Dashboard::compute(&products, &[], &[]);

        assert_eq!(dashboard.stock_levels.len(), CHART_LIMIT);
        assert_eq!(dashboard.stock_levels[0].value, 12);
        assert_eq!(dashboard.stock_levels[0].name, "Extra long product n");
        assert_eq!(dashboard.top_selling_products.len(), CHART_LIMIT);
        assert_eq!(dashboard.top_selling_products[0].product_id, ProductId(1));
    }

    #[test]
    fn names_truncate_on_characters() {
        let products = vec![product(1, "Café crème glacée à la vanille", 1.0, 1)];
        let dashboard = Dashboard::compute(&products, &[], &[]);
        assert_eq!(dashboard.stock_levels[0].name.chars().count(), CHART_NAME_LEN);
        assert_eq!(dashboard.stock_levels[0].name, "Café crème glacée à ");
    }

    #[test]
    fn only_unreceived_restocks_are_pending() {
        let mut received = RestockOrder::new(2, 1, 5);
        received.received_date = Some(chrono::Utc::now());
        let restocks = vec![RestockOrder::new(1, 1, 5), received, RestockOrder::new(3, 2, 1)];
        let dashboard = Dashboard::compute(&[], &[], &restocks);

        let pending: Vec<u32> = dashboard
            .metrics
            .pending_restocks
            .iter()
            .map(|r| r.id.0)
            .collect();
        assert_eq!(pending, vec![1, 3]);
    }
}
