use crate::device::FrameError;

/// Where the window is in the per-frame protocol.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum FramePhase {
    /// Between frames: only `prepare` is accepted.
    #[default]
    Idle,
    /// After `prepare`: `render_model` and `finish` are accepted.
    Prepared,
}

/// Checked `Idle → Prepared → Idle` state machine behind the frame protocol.
///
/// Out-of-order calls are rejected with a `FrameError` and leave the phase
/// unchanged.
#[derive(Debug, Default)]
pub struct FrameController {
    phase: FramePhase,
    frames_presented: u64,
    models_this_frame: usize,
}

impl FrameController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> FramePhase {
        self.phase
    }

    /// Frames that completed `finish`.
    #[inline]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Models drawn since the last `prepare`.
    #[inline]
    pub fn models_this_frame(&self) -> usize {
        self.models_this_frame
    }

    /// `Idle → Prepared`.
    pub fn begin(&mut self) -> Result<(), FrameError> {
        match self.phase {
            FramePhase::Idle => {
                self.phase = FramePhase::Prepared;
                self.models_this_frame = 0;
                Ok(())
            }
            FramePhase::Prepared => Err(FrameError::AlreadyPrepared),
        }
    }

    /// Accepts one model draw inside the current frame.
    pub fn record_draw(&mut self) -> Result<(), FrameError> {
        match self.phase {
            FramePhase::Prepared => {
                self.models_this_frame += 1;
                Ok(())
            }
            FramePhase::Idle => Err(FrameError::NotPrepared("render_model")),
        }
    }

    /// `Prepared → Idle`.
    pub fn end(&mut self) -> Result<(), FrameError> {
        match self.phase {
            FramePhase::Prepared => {
                self.phase = FramePhase::Idle;
                self.frames_presented = self.frames_presented.wrapping_add(1);
                log::trace!(
                    "frame {} finished with {} model(s)",
                    self.frames_presented,
                    self.models_this_frame
                );
                Ok(())
            }
            FramePhase::Idle => Err(FrameError::NotPrepared("finish")),
        }
    }
}
