//! Presentation layer: renders the product catalog into HTML fragments and
//! writes them into named regions of a host display surface.
//!
//! Rendering is a pure function of the catalog; the only side effect is the
//! region write at the [`surface::DisplaySurface`] seam.

pub mod error;
pub mod markup;
pub mod region;
pub mod stock_display;
pub mod surface;
pub mod views;

pub use error::DisplayError;
pub use markup::{Html, TableBuilder};
pub use region::Region;
pub use stock_display::StockDisplay;
pub use surface::{DisplaySurface, MemorySurface, SurfaceError};
