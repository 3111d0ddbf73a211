//! Keyboard actions.
//!
//! - [`Action`] - Single operations that keyboards send or execute
//! - [`KeyAction`] - What a key position does, stored in the keymap

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// A KeyAction is the action at a keyboard position, stored in keymap.
/// It can be a single action like triggering a key, or a composite keyboard action like tap/hold
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action, the key is dead on this layer.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, such as triggering a key, or activating a layer. Action is triggered when pressed and cancelled when released.
    Single(Action),
    /// General tap/hold action: (tap_action, hold_action)
    TapHold(Action, Action),
}

impl KeyAction {
    /// Returns `true` for both sentinels, `No` and `Transparent`.
    pub const fn is_sentinel(&self) -> bool {
        matches!(self, KeyAction::No | KeyAction::Transparent)
    }

    /// The layer this key can switch to, if any.
    ///
    /// For tap/hold keys the hold side is checked first, then the tap side.
    pub const fn target_layer(&self) -> Option<u8> {
        match self {
            KeyAction::Single(a) => a.target_layer(),
            KeyAction::TapHold(tap, hold) => match hold.target_layer() {
                Some(layer) => Some(layer),
                None => tap.target_layer(),
            },
            KeyAction::No | KeyAction::Transparent => None,
        }
    }
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A normal key stroke, uses for all keycodes defined in `KeyCode` enum, including mouse key, consumer/system control, etc.
    Key(KeyCode),
    /// Modifier Combination, used for the hold side of mod-tap keys.
    Modifier(ModifierCombination),
    /// Key stroke with modifier combination triggered.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Activate a layer
    LayerOn(u8),
    /// Deactivate a layer
    LayerOff(u8),
    /// Toggle a layer
    LayerToggle(u8),
    /// Set default layer
    DefaultLayer(u8),
}

impl Action {
    /// The layer named by a layer action.
    pub const fn target_layer(&self) -> Option<u8> {
        match *self {
            Action::LayerOn(layer)
            | Action::LayerOff(layer)
            | Action::LayerToggle(layer)
            | Action::DefaultLayer(layer) => Some(layer),
            Action::Key(_) | Action::Modifier(_) | Action::KeyWithModifier(_, _) => None,
        }
    }

    /// The keycode sent by this action, if it sends one.
    pub const fn keycode(&self) -> Option<KeyCode> {
        match *self {
            Action::Key(k) | Action::KeyWithModifier(k, _) => Some(k),
            _ => None,
        }
    }
}
