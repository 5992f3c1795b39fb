//! Terminal stand-in for the display chrome.

use chunkwise_core::presentation::BarStyle;
use chunkwise_core::{Orientation, PresentationError, Presenter};

/// A terminal cannot rotate; orientation only changes the status layout,
/// which the countdown command reads back from the session.
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn lock_orientation(&mut self, orientation: Orientation) -> Result<(), PresentationError> {
        tracing::debug!(%orientation, "orientation locked");
        Ok(())
    }

    fn set_system_bars(&mut self, color: &str, style: BarStyle) -> Result<(), PresentationError> {
        tracing::debug!(color, ?style, "system bars ignored in terminal");
        Ok(())
    }
}
