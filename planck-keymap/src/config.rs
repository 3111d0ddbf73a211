//! Behavior configuration carried alongside a keymap.
//!
//! The keymap itself is static; these values tell the consuming firmware how to
//! time the tap/hold and tap-toggle keys found in it.

/// Config for configurable action behavior
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BehaviorConfig {
    pub tap_hold: TapHoldConfig,
    pub tap_toggle: TapToggleConfig,
}

impl BehaviorConfig {
    pub const fn const_default() -> Self {
        Self {
            tap_hold: TapHoldConfig::const_default(),
            tap_toggle: TapToggleConfig::const_default(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self::const_default()
    }
}

/// Configurations for tap hold behavior
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapHoldConfig {
    /// If the key is pressed longer than this, it is accepted as `hold` (in milliseconds)
    pub hold_timeout_ms: u16,
    /// Same as QMK's permissive hold: when another key is pressed and released
    /// while the tap/hold key is held, the hold action is triggered
    pub permissive_hold: bool,
}

impl TapHoldConfig {
    pub const fn const_default() -> Self {
        Self {
            hold_timeout_ms: 200,
            permissive_hold: false,
        }
    }
}

impl Default for TapHoldConfig {
    fn default() -> Self {
        Self::const_default()
    }
}

/// Configurations for tap-toggle (`TT`) layer keys
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapToggleConfig {
    /// Number of taps that latch the layer on
    pub taps: u8,
}

impl TapToggleConfig {
    pub const fn const_default() -> Self {
        Self { taps: 5 }
    }
}

impl Default for TapToggleConfig {
    fn default() -> Self {
        Self::const_default()
    }
}
