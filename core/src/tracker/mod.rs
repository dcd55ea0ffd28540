//! Material farm tracking: the state machine that follows the journal and
//! the row lifecycle it drives.

mod display;
mod processor;
mod state;

#[cfg(test)]
mod tracker_tests;

pub use display::{DisplayFrame, DisplayRow, MaterialDisplay, TrackedMaterial};
pub use processor::{STATUS_HGE, STATUS_HGE_UNCONFIRMED, Tracker};
pub use state::{EmissionState, TrackingState};

/// Receives frames from the tracker. Front-ends implement this; the tracker
/// never draws anything itself.
pub trait DisplaySink {
    fn render(&mut self, frame: &DisplayFrame);
}
