//! Frame system trait

use cadence_core::Result;

use crate::frame::FrameView;

/// A system that can be ticked by the frame loop
///
/// Fixed update runs once per drained fixed step (physics), while update
/// runs once per frame (gameplay, camera, UI).
pub trait FrameSystem {
    /// Called once per fixed step drained this frame, with the fixed delta
    fn fixed_update(&mut self, _frame: &FrameView<'_>, _dt: f64) -> Result<()> {
        Ok(())
    }

    /// Called once per frame with the scaled delta
    fn update(&mut self, frame: &FrameView<'_>, dt: f64) -> Result<()>;

    /// Human-readable name for this system
    fn name(&self) -> &str;
}
