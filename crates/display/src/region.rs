//! Named output regions on the host display surface.

use core::fmt;

/// A region identifier on the host page.
///
/// The stock views share [`Region::Monitor`] and overwrite each other there;
/// report views write to the separate [`Region::Report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Monitor,
    Report,
}

impl Region {
    /// Stable identifier the host uses to address the region.
    pub fn id(&self) -> &'static str {
        match self {
            Region::Monitor => "monitor",
            Region::Report => "report",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
