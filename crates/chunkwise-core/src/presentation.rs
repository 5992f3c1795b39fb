//! Display chrome: orientation lock and system bar styling.
//!
//! The hosting shell implements [`Presenter`]. Calls are fire-and-forget
//! from the core's point of view; a denied orientation change is logged and
//! leaves the countdown untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PresentationError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => f.write_str("portrait"),
            Orientation::Landscape => f.write_str("landscape"),
        }
    }
}

/// Foreground style of system bar buttons and icons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarStyle {
    #[default]
    Light,
    Dark,
}

pub trait Presenter {
    /// Lock the display to `orientation`.
    fn lock_orientation(&mut self, orientation: Orientation) -> Result<(), PresentationError>;

    /// Style the system status/navigation bars.
    fn set_system_bars(&mut self, color: &str, style: BarStyle) -> Result<(), PresentationError>;
}

/// Lock `orientation`, logging and swallowing a refusal.
///
/// Returns whether the lock took effect.
pub fn try_lock(presenter: &mut dyn Presenter, orientation: Orientation) -> bool {
    match presenter.lock_orientation(orientation) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Error changing screen orientation: {e}");
            false
        }
    }
}

/// Apply bar styling, logging a failure.
pub fn style_bars(presenter: &mut dyn Presenter, color: &str, style: BarStyle) {
    if let Err(e) = presenter.set_system_bars(color, style) {
        tracing::warn!("Error styling system bars: {e}");
    }
}

/// Presenter with no display attached. Remembers the last requested state.
#[derive(Debug, Clone, Default)]
pub struct HeadlessPresenter {
    pub orientation: Orientation,
    pub bars: Option<(String, BarStyle)>,
    /// When set, every orientation change is refused.
    pub deny_orientation: bool,
}

impl Presenter for HeadlessPresenter {
    fn lock_orientation(&mut self, orientation: Orientation) -> Result<(), PresentationError> {
        if self.deny_orientation {
            return Err(PresentationError::OrientationDenied {
                requested: orientation.to_string(),
                reason: "orientation locked by platform".into(),
            });
        }
        self.orientation = orientation;
        Ok(())
    }

    fn set_system_bars(&mut self, color: &str, style: BarStyle) -> Result<(), PresentationError> {
        self.bars = Some((color.to_string(), style));
        Ok(())
    }
}
