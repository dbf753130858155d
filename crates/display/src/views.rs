//! The rendering operations.
//!
//! Each view is a pure function of the catalog: same catalog in, byte-identical
//! fragment out. Writing the fragment to a region is the caller's business
//! (see [`crate::stock_display::StockDisplay`]).

use tindahan_catalog::ProductCatalog;
use tindahan_core::DomainResult;

use crate::markup::{Html, TableBuilder};

/// Fallback row text when nothing is below the low-stock threshold.
const NO_LOW_STOCK: &str = "No low stock items.";

/// Full product listing: one row per record, catalog order.
///
/// An empty catalog renders the header row only.
pub fn product_listing(catalog: &ProductCatalog) -> Html {
    let mut table = TableBuilder::new(&["Product", "Category", "Pieces"]);
    for product in catalog.iter() {
        table.row(&[
            product.brand(),
            product.category(),
            &product.quantity().to_string(),
        ]);
    }
    table.finish()
}

/// Low-stock alert: records below the threshold with their status label, or a
/// single spanning fallback row when nothing qualifies.
pub fn low_stock_alert(catalog: &ProductCatalog) -> Html {
    let mut table = TableBuilder::new(&["Product", "Status", "Pieces Left"]);
    let mut matched = false;
    for product in catalog.low_stock() {
        matched = true;
        table.row(&[
            product.brand(),
            product.status().label(),
            &product.quantity().to_string(),
        ]);
    }
    if !matched {
        table.span_row(NO_LOW_STOCK);
    }
    table.finish()
}

/// Daily summary: total units on hand and total stock value.
pub fn daily_summary(catalog: &ProductCatalog) -> DomainResult<Html> {
    let mut table = TableBuilder::new(&["Metric", "Value"]);
    table.row(&["Total Items", &catalog.total_items().to_string()]);
    table.row(&["Total Value", &catalog.total_value()?.to_string()]);
    Ok(table.finish())
}

/// Storefront dashboard: the at-a-glance numbers for the whole shelf.
pub fn dashboard_overview(catalog: &ProductCatalog) -> DomainResult<Html> {
    let mut table = TableBuilder::new(&["Metric", "Value"]);
    table.row(&["Products", &catalog.product_count().to_string()]);
    table.row(&["Total Stock", &catalog.total_items().to_string()]);
    table.row(&["Stock Value", &catalog.total_value()?.to_string()]);
    table.row(&["Low Stock Items", &catalog.low_stock_count().to_string()]);
    Ok(table.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tindahan_catalog::Product;
    use tindahan_core::Money;

    fn data_rows(html: &Html) -> usize {
        // Every row opens with <tr>; the first one is the header.
        html.as_str().matches("<tr>").count() - 1
    }

    #[test]
    fn listing_renders_every_record_in_order() {
        let html = product_listing(&ProductCatalog::seed());
        assert_eq!(data_rows(&html), 3);
        assert_eq!(
            html.as_str(),
            "<table>\
             <tr><th>Product</th><th>Category</th><th>Pieces</th></tr>\
             <tr><td>Piattos</td><td>Snacks</td><td>12</td></tr>\
             <tr><td>Coke</td><td>Drinks</td><td>3</td></tr>\
             <tr><td>555 Sardines</td><td>Canned Goods</td><td>0</td></tr>\
             </table>"
        );
    }

    #[test]
    fn listing_of_empty_catalog_is_header_only() {
        let html = product_listing(&ProductCatalog::new(Vec::new()));
        assert_eq!(data_rows(&html), 0);
        assert!(html.as_str().contains("<th>Product</th>"));
    }

    #[test]
    fn alert_lists_low_and_out_of_stock_only() {
        let html = low_stock_alert(&ProductCatalog::seed());
        assert_eq!(
            html.as_str(),
            "<table>\
             <tr><th>Product</th><th>Status</th><th>Pieces Left</th></tr>\
             <tr><td>Coke</td><td>Low Stock</td><td>3</td></tr>\
             <tr><td>555 Sardines</td><td>Out of Stock</td><td>0</td></tr>\
             </table>"
        );
    }

    #[test]
    fn alert_falls_back_when_everything_is_stocked() {
        let catalog = ProductCatalog::new(vec![Product::new(
            "Snacks",
            "Piattos",
            12,
            Money::from_pesos(20),
        )]);
        let html = low_stock_alert(&catalog);
        assert_eq!(data_rows(&html), 1);
        assert!(
            html.as_str()
                .contains("<td colspan=\"3\">No low stock items.</td>")
        );
    }

    #[test]
    fn summary_totals_match_seed_data() {
        let html = daily_summary(&ProductCatalog::seed()).unwrap();
        assert_eq!(
            html.as_str(),
            "<table>\
             <tr><th>Metric</th><th>Value</th></tr>\
             <tr><td>Total Items</td><td>15</td></tr>\
             <tr><td>Total Value</td><td>₱285.00</td></tr>\
             </table>"
        );
    }

    #[test]
    fn summary_value_keeps_two_decimals_for_whole_sums() {
        // 12×20 + 3×15 + 0×25 = 285 exactly; must still render as 285.00.
        let html = daily_summary(&ProductCatalog::seed()).unwrap();
        assert!(html.as_str().contains("₱285.00"));
    }

    #[test]
    fn overview_counts_match_catalog() {
        let html = dashboard_overview(&ProductCatalog::seed()).unwrap();
        assert!(html.as_str().contains("<td>Products</td><td>3</td>"));
        assert!(html.as_str().contains("<td>Total Stock</td><td>15</td>"));
        assert!(html.as_str().contains("<td>Stock Value</td><td>₱285.00</td>"));
        assert!(html.as_str().contains("<td>Low Stock Items</td><td>2</td>"));
    }

    #[test]
    fn views_are_idempotent() {
        let catalog = ProductCatalog::seed();
        assert_eq!(product_listing(&catalog), product_listing(&catalog));
        assert_eq!(low_stock_alert(&catalog), low_stock_alert(&catalog));
        assert_eq!(
            daily_summary(&catalog).unwrap(),
            daily_summary(&catalog).unwrap()
        );
    }

    #[test]
    fn markup_in_product_names_is_escaped() {
        let catalog = ProductCatalog::new(vec![Product::new(
            "Snacks",
            "<script>alert('x')</script>",
            1,
            Money::from_pesos(1),
        )]);
        let html = product_listing(&catalog);
        assert!(!html.as_str().contains("<script>"));
        assert!(html.as_str().contains("&lt;script&gt;"));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_product() -> impl Strategy<Value = Product> {
            ("[A-Za-z ]{1,12}", "[A-Za-z0-9 ]{1,12}", 0u32..100, 0u32..1000).prop_map(
                |(category, brand, quantity, pesos)| {
                    Product::new(category, brand, quantity, Money::from_pesos(pesos))
                },
            )
        }

        proptest! {
            /// Property: the listing renders exactly one data row per record.
            #[test]
            fn listing_row_count_matches_catalog(
                products in proptest::collection::vec(arb_product(), 0..15)
            ) {
                let count = products.len();
                let html = product_listing(&ProductCatalog::new(products));
                prop_assert_eq!(html.as_str().matches("<tr>").count(), count + 1);
            }

            /// Property: the alert renders one row per below-threshold record,
            /// or exactly one fallback row when none qualify.
            #[test]
            fn alert_row_count_matches_filter(
                products in proptest::collection::vec(arb_product(), 0..15)
            ) {
                let low = products.iter().filter(|p| p.quantity() < 5).count();
                let html = low_stock_alert(&ProductCatalog::new(products));
                let rows = html.as_str().matches("<tr>").count() - 1;
                if low == 0 {
                    prop_assert_eq!(rows, 1);
                    prop_assert!(html.as_str().contains("No low stock items."));
                } else {
                    prop_assert_eq!(rows, low);
                    prop_assert!(!html.as_str().contains("No low stock items."));
                }
            }

            /// Property: rendering twice yields byte-identical output.
            #[test]
            fn rendering_is_deterministic(
                products in proptest::collection::vec(arb_product(), 0..15)
            ) {
                let catalog = ProductCatalog::new(products);
                prop_assert_eq!(product_listing(&catalog), product_listing(&catalog));
                prop_assert_eq!(low_stock_alert(&catalog), low_stock_alert(&catalog));
                prop_assert_eq!(
                    daily_summary(&catalog).unwrap(),
                    daily_summary(&catalog).unwrap()
                );
                prop_assert_eq!(
                    dashboard_overview(&catalog).unwrap(),
                    dashboard_overview(&catalog).unwrap()
                );
            }
        }
    }
}
