//! The seam to the host page.
//!
//! The real display surface (a browser page, a kiosk shell) lives outside this
//! crate; everything here talks to it through [`DisplaySurface`] so rendering
//! stays testable without a host.

use std::collections::HashMap;

use thiserror::Error;

use crate::markup::Html;
use crate::region::Region;

/// Error writing to a host display region.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The host did not expose the addressed region.
    #[error("display region '{0}' is not attached to this surface")]
    RegionUnavailable(Region),
}

/// A host surface with named, individually replaceable regions.
pub trait DisplaySurface {
    /// Replace the region's entire content with the given fragment.
    fn replace(&mut self, region: Region, html: &Html) -> Result<(), SurfaceError>;
}

/// In-memory surface used by tests and the demo host.
#[derive(Debug, Default)]
pub struct MemorySurface {
    regions: HashMap<Region, Html>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content of a region, if anything has been written there.
    pub fn content(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(Html::as_str)
    }
}

impl DisplaySurface for MemorySurface {
    fn replace(&mut self, region: Region, html: &Html) -> Result<(), SurfaceError> {
        self.regions.insert(region, html.clone());
        Ok(())
    }
}
