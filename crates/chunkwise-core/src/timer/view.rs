//! What the countdown screen shows.

use serde::Serialize;

use crate::presentation::Orientation;

/// Headline once the countdown reaches zero.
pub const TIME_UP: &str = "Time's up!";

/// Fill and border color role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Active,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountdownView {
    /// Task name, or [`TIME_UP`] once finished.
    pub headline: String,
    /// Remaining time as `H:MM:SS` or `M:SS`.
    pub clock: String,
    /// Hidden once finished.
    pub reminder: Option<String>,
    pub fill: f64,
    pub accent: Accent,
    pub orientation: Orientation,
}
