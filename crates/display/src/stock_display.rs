//! The display front the host's controls are bound to.

use tindahan_catalog::ProductCatalog;

use crate::error::DisplayError;
use crate::region::Region;
use crate::surface::DisplaySurface;
use crate::views;

/// Binds the product catalog to a host surface and exposes the zero-argument
/// actions the host's controls trigger.
///
/// The catalog is injected at construction and owned here; there is no ambient
/// global to reach for, so tests (and a future persistent source) can swap it
/// without touching the rendering code.
#[derive(Debug)]
pub struct StockDisplay<S> {
    catalog: ProductCatalog,
    surface: S,
}

impl<S: DisplaySurface> StockDisplay<S> {
    pub fn new(catalog: ProductCatalog, surface: S) -> Self {
        Self { catalog, surface }
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Render the full product listing into the monitor region.
    pub fn view_products(&mut self) -> Result<(), DisplayError> {
        let html = views::product_listing(&self.catalog);
        tracing::debug!(region = %Region::Monitor, products = self.catalog.product_count(), "rendered product listing");
        self.surface.replace(Region::Monitor, &html)?;
        Ok(())
    }

    /// Render the low-stock alert into the monitor region, replacing whatever
    /// the listing left there.
    pub fn low_stock_alert(&mut self) -> Result<(), DisplayError> {
        let html = views::low_stock_alert(&self.catalog);
        tracing::debug!(region = %Region::Monitor, low = self.catalog.low_stock_count(), "rendered low-stock alert");
        self.surface.replace(Region::Monitor, &html)?;
        Ok(())
    }

    /// Render the daily summary into the report region.
    pub fn daily_summary(&mut self) -> Result<(), DisplayError> {
        let html = views::daily_summary(&self.catalog)?;
        tracing::debug!(region = %Region::Report, "rendered daily summary");
        self.surface.replace(Region::Report, &html)?;
        Ok(())
    }

    /// Render the storefront dashboard into the report region.
    pub fn dashboard_overview(&mut self) -> Result<(), DisplayError> {
        let html = views::dashboard_overview(&self.catalog)?;
        tracing::debug!(region = %Region::Report, "rendered dashboard overview");
        self.surface.replace(Region::Report, &html)?;
        Ok(())
    }
}
