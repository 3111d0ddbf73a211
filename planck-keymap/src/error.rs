use core::fmt;

/// Reasons a keymap is rejected by [`KeyMap::validate`](crate::keymap::KeyMap::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeymapError {
    /// The base layer must define every key, a transparent key there has nothing to fall through to.
    TransparentInBaseLayer { row: usize, col: usize },
    /// A layer key names a layer the keymap doesn't have.
    UnknownLayer {
        layer: usize,
        row: usize,
        col: usize,
        target: u8,
    },
    /// Tap/hold keys need a non-zero hold timeout.
    InvalidHoldTimeout,
    /// Tap-toggle keys need at least one tap to latch.
    InvalidTapToggle,
}

impl fmt::Display for KeymapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeymapError::TransparentInBaseLayer { row, col } => {
                write!(f, "transparent key in base layer at ({}, {})", row, col)
            }
            KeymapError::UnknownLayer { layer, row, col, target } => write!(
                f,
                "key at ({}, {}) on layer {} switches to layer {}, which doesn't exist",
                row, col, layer, target
            ),
            KeymapError::InvalidHoldTimeout => write!(f, "hold timeout must be greater than zero"),
            KeymapError::InvalidTapToggle => write!(f, "tap-toggle needs at least one tap"),
        }
    }
}

impl core::error::Error for KeymapError {}
