//! Per-element animation values

/// Default vertical slide distance for entrance animations
pub const DEFAULT_SLIDE_DISTANCE: f32 = 30.0;

/// Lower bound for any scale an element may be drawn at
pub const SCALE_MIN: f32 = 0.9;

/// Upper bound for any scale an element may be drawn at
pub const SCALE_MAX: f32 = 1.1;

/// Visual values of one animated element at the current frame.
///
/// `opacity` is in `0.0..=1.0`, `offset` is the remaining downward
/// displacement in `0.0..=distance`, `scale` stays within
/// [`SCALE_MIN`]..=[`SCALE_MAX`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    pub opacity: f32,
    pub offset: f32,
    pub scale: f32,
}

impl AnimationState {
    /// Before the entrance begins: invisible and displaced
    pub const fn hidden(distance: f32) -> Self {
        Self {
            opacity: 0.0,
            offset: distance,
            scale: 1.0,
        }
    }

    /// Entrance complete
    pub const fn settled() -> Self {
        Self {
            opacity: 1.0,
            offset: 0.0,
            scale: 1.0,
        }
    }

    /// Whether both entrance channels sit exactly on their final values
    pub fn is_revealed(&self) -> bool {
        self.opacity == 1.0 && self.offset == 0.0
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::hidden(DEFAULT_SLIDE_DISTANCE)
    }
}
