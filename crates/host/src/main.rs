//! Stand-in for the host page: seeds the catalog, fires each display action,
//! and prints what ended up in the two regions.

use anyhow::Result;

use tindahan_catalog::ProductCatalog;
use tindahan_display::{MemorySurface, Region, StockDisplay};

fn main() -> Result<()> {
    tindahan_observability::init();

    let mut display = StockDisplay::new(ProductCatalog::seed(), MemorySurface::new());

    display.view_products()?;
    print_region(&display, Region::Monitor);

    display.low_stock_alert()?;
    print_region(&display, Region::Monitor);

    display.daily_summary()?;
    print_region(&display, Region::Report);

    display.dashboard_overview()?;
    print_region(&display, Region::Report);

    Ok(())
}

fn print_region(display: &StockDisplay<MemorySurface>, region: Region) {
    match display.surface().content(region) {
        Some(html) => println!("[{region}] {html}"),
        None => tracing::warn!(%region, "region has no content"),
    }
}
