//! Runtime layer stack.
//!
//! The keymap never changes at runtime. What changes is which layers are
//! active, and that is tracked here, together with a per-key cache so a key is
//! released on the same layer it was pressed on.

use heapless::Vec;

use crate::action::{Action, KeyAction};
use crate::keymap::KeyMap;

pub struct LayerState<const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Current state of each layer
    layer_state: [bool; NUM_LAYER],
    /// Default layer number
    default_layer: u8,
    /// Layer cache
    layer_cache: [[u8; COL]; ROW],
}

impl<const ROW: usize, const COL: usize, const NUM_LAYER: usize> Default for LayerState<ROW, COL, NUM_LAYER> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROW: usize, const COL: usize, const NUM_LAYER: usize> LayerState<ROW, COL, NUM_LAYER> {
    pub const fn new() -> Self {
        // Layer numbers are `u8`, and `0..NUM_LAYER as u8` must cover every layer
        const { assert!(NUM_LAYER <= u8::MAX as usize, "at most 255 layers are supported") };
        Self {
            layer_state: [false; NUM_LAYER],
            default_layer: 0,
            layer_cache: [[0; COL]; ROW],
        }
    }

    /// Get the default layer number
    pub fn default_layer(&self) -> u8 {
        self.default_layer
    }

    /// Set the default layer number
    pub fn set_default_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid default layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        info!("Default layer set to {}", layer_num);
        self.default_layer = layer_num;
    }

    /// Returns `true` if the layer is active, the default layer is always active
    pub fn is_active(&self, layer_num: u8) -> bool {
        layer_num == self.default_layer || self.layer_state.get(layer_num as usize).copied().unwrap_or(false)
    }

    /// The highest layer that is currently active
    pub fn highest_active_layer(&self) -> u8 {
        (0..NUM_LAYER as u8)
            .rev()
            .find(|&layer_idx| self.is_active(layer_idx))
            .unwrap_or(self.default_layer)
    }

    /// All active layers, lowest first
    pub fn active_layers(&self) -> Vec<u8, NUM_LAYER> {
        (0..NUM_LAYER as u8).filter(|&layer_idx| self.is_active(layer_idx)).collect()
    }

    /// Activate given layer
    pub fn activate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.layer_state[layer_num as usize] = true;
    }

    /// Deactivate given layer
    pub fn deactivate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.layer_state[layer_num as usize] = false;
    }

    /// Toggle given layer
    pub fn toggle_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }

        self.layer_state[layer_num as usize] = !self.layer_state[layer_num as usize];
    }

    /// Apply the layer part of a key action.
    ///
    /// Only the hold side of a tap/hold key is applied: deciding between tap
    /// and hold is up to the caller. Returns `true` if the action was a layer action.
    pub fn process_layer_action(&mut self, action: KeyAction, pressed: bool) -> bool {
        let action = match action {
            KeyAction::Single(a) => a,
            KeyAction::TapHold(_, hold) => hold,
            KeyAction::No | KeyAction::Transparent => return false,
        };
        match action {
            Action::LayerOn(layer_num) => {
                if pressed {
                    self.activate_layer(layer_num);
                } else {
                    self.deactivate_layer(layer_num);
                }
            }
            Action::LayerOff(layer_num) => {
                if pressed {
                    self.deactivate_layer(layer_num);
                }
            }
            Action::LayerToggle(layer_num) => {
                if pressed {
                    self.toggle_layer(layer_num);
                }
            }
            Action::DefaultLayer(layer_num) => {
                if pressed {
                    self.set_default_layer(layer_num);
                }
            }
            Action::Key(_) | Action::Modifier(_) | Action::KeyWithModifier(_, _) => return false,
        }
        debug!("Layer action processed, highest active layer: {}", self.highest_active_layer());
        true
    }

    /// Fetch the action at `(row, col)` from the highest active layer that defines it.
    ///
    /// On press, layers are checked from high to low, transparent keys fall
    /// through, and the default layer is the lowest layer checked. The layer
    /// that matched is cached so the release resolves on the same layer, even
    /// if the layer stack changed while the key was held.
    pub fn resolve<'a>(
        &mut self,
        keymap: &KeyMap<'a, ROW, COL, NUM_LAYER>,
        row: usize,
        col: usize,
        pressed: bool,
    ) -> KeyAction {
        if row >= ROW || col >= COL {
            error!("Key position ({}, {}) is out of the {}x{} matrix", row, col, ROW, COL);
            return KeyAction::No;
        }

        if !pressed {
            // Releasing a pressed key, use cached layer and restore the cache
            let layer = self.pop_layer_from_cache(row, col);
            return keymap.action_at(layer as usize, row, col);
        }

        // Iterate from higher layer to lower layer, the lowest checked layer is the default layer
        for layer_idx in (0..NUM_LAYER).rev() {
            if self.layer_state[layer_idx] || layer_idx as u8 == self.default_layer {
                // This layer is activated
                let action = keymap.action_at(layer_idx, row, col);
                if action == KeyAction::Transparent {
                    continue;
                }

                // Found a valid action in the layer, cache it
                trace!("Key ({}, {}) resolved on layer {}", row, col, layer_idx);
                self.save_layer_cache(row, col, layer_idx as u8);

                return action;
            }

            if layer_idx as u8 == self.default_layer {
                // No action
                break;
            }
        }

        KeyAction::No
    }

    fn pop_layer_from_cache(&mut self, row: usize, col: usize) -> u8 {
        let layer = self.layer_cache[row][col];
        self.layer_cache[row][col] = self.default_layer;

        layer
    }

    fn save_layer_cache(&mut self, row: usize, col: usize, layer_num: u8) {
        self.layer_cache[row][col] = layer_num;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BehaviorConfig;
    use crate::{a, df, k, layer, lt, mo, tg};

    const LAYERS: [[[KeyAction; 3]; 1]; 3] = [
        layer!([[k!(A), mo!(1), lt!(2, B)]]),
        layer!([[k!(Kc1), a!(Transparent), a!(Transparent)]]),
        layer!([[a!(Transparent), df!(1), tg!(2)]]),
    ];
    const KEYMAP: KeyMap<'static, 1, 3, 3> = KeyMap::new(&LAYERS, BehaviorConfig::const_default());

    #[test]
    fn test_transparent_falls_through() {
        let mut state: LayerState<1, 3, 3> = LayerState::new();
        assert_eq!(state.resolve(&KEYMAP, 0, 0, true), k!(A));

        state.activate_layer(2);
        // Layer 2 is transparent at (0, 0), layer 1 is inactive, so the base key wins
        assert_eq!(state.resolve(&KEYMAP, 0, 0, true), k!(A));

        state.activate_layer(1);
        assert_eq!(state.resolve(&KEYMAP, 0, 0, true), k!(Kc1));
    }

    #[test]
    fn test_release_uses_cached_layer() {
        let mut state: LayerState<1, 3, 3> = LayerState::new();
        assert!(state.process_layer_action(KEYMAP.action_at(0, 0, 1), true));
        assert_eq!(state.resolve(&KEYMAP, 0, 0, true), k!(Kc1));

        // Layer key released before the key it shifted
        state.process_layer_action(KEYMAP.action_at(0, 0, 1), false);
        assert!(!state.is_active(1));
        assert_eq!(state.resolve(&KEYMAP, 0, 0, false), k!(Kc1));

        // Cache is reset after release
        assert_eq!(state.resolve(&KEYMAP, 0, 0, false), k!(A));
    }

    #[test]
    fn test_toggle_and_default_layer() {
        let mut state: LayerState<1, 3, 3> = LayerState::new();
        state.toggle_layer(2);
        assert_eq!(state.highest_active_layer(), 2);
        assert_eq!(state.resolve(&KEYMAP, 0, 2, true), tg!(2));
        state.process_layer_action(tg!(2), true);
        assert!(!state.is_active(2));

        state.process_layer_action(df!(1), true);
        assert_eq!(state.default_layer(), 1);
        assert_eq!(state.active_layers().as_slice(), &[1]);
        // Layers below the default layer are never reached
        assert_eq!(state.resolve(&KEYMAP, 0, 1, true), KeyAction::No);
    }

    #[test]
    fn test_tap_hold_engages_hold_layer() {
        let mut state: LayerState<1, 3, 3> = LayerState::new();
        assert!(state.process_layer_action(lt!(2, B), true));
        assert!(state.is_active(2));
        assert!(state.process_layer_action(lt!(2, B), false));
        assert!(!state.is_active(2));
        assert!(!state.process_layer_action(k!(A), true));
        assert!(!state.process_layer_action(a!(Transparent), true));
    }

    #[test]
    fn test_invalid_layers_are_ignored() {
        let mut state: LayerState<1, 3, 3> = LayerState::new();
        state.activate_layer(3);
        state.toggle_layer(9);
        state.set_default_layer(5);
        assert_eq!(state.default_layer(), 0);
        assert_eq!(state.active_layers().as_slice(), &[0]);
        assert_eq!(state.resolve(&KEYMAP, 1, 0, true), KeyAction::No);
        assert_eq!(state.resolve(&KEYMAP, 0, 3, true), KeyAction::No);
    }

    #[test]
    fn test_largest_layer_count() {
        let mut state: LayerState<1, 1, 255> = LayerState::new();
        state.activate_layer(254);
        assert_eq!(state.highest_active_layer(), 254);
        assert_eq!(state.active_layers().as_slice(), &[0, 254]);
        state.activate_layer(255);
        assert_eq!(state.highest_active_layer(), 254);
    }
}
