//! Audio cue collaborator

use core::convert::Infallible;
use core::fmt::Debug;

/// Fire-and-forget clip playback.
///
/// The console logs a failed cue and carries on; playback problems never
/// block a tab transition.
pub trait AudioCue {
    type Error: Debug;

    /// Start playing the clip at `path`. `path` is opaque to the console.
    fn play(&mut self, path: &str) -> Result<(), Self::Error>;
}

/// Audio sink for builds without a speaker.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AudioCue for Silent {
    type Error = Infallible;

    fn play(&mut self, _path: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}
