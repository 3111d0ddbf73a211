use heapless::Vec;

use crate::action::KeyAction;
use crate::config::BehaviorConfig;
use crate::error::KeymapError;

/// Keymap represents the stack of layers.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
///
/// Keymap should be binded to the actual pcb matrix definition.
/// The firmware detects hardware key strokes, uses tuple `(row, col, layer)` to retrieve the action from Keymap.
///
/// This is a read-only view. The layers are borrowed, usually from a `const`
/// table, and never change; runtime layer switching lives in
/// [`LayerState`](crate::layer_state::LayerState).
#[derive(Clone, Copy, Debug)]
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers, layer 0 is the base layer
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Options for configurable action behavior
    behavior: BehaviorConfig,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub const fn new(layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER], behavior: BehaviorConfig) -> Self {
        Self { layers, behavior }
    }

    /// `(ROW, COL, NUM_LAYER)` of this keymap
    pub const fn dimensions(&self) -> (usize, usize, usize) {
        (ROW, COL, NUM_LAYER)
    }

    pub const fn layers(&self) -> &'a [[[KeyAction; COL]; ROW]; NUM_LAYER] {
        self.layers
    }

    pub const fn behavior(&self) -> &BehaviorConfig {
        &self.behavior
    }

    /// Grid of a single layer
    pub fn layer(&self, layer_num: usize) -> Option<&'a [[KeyAction; COL]; ROW]> {
        self.layers.get(layer_num)
    }

    /// Fetch the action in keymap, `None` if any index is out of range
    pub fn get(&self, layer_num: usize, row: usize, col: usize) -> Option<KeyAction> {
        self.layers.get(layer_num)?.get(row)?.get(col).copied()
    }

    /// Fetch the action in keymap.
    ///
    /// Indices must be in range, use [`KeyMap::get`] for unchecked input.
    pub const fn action_at(&self, layer_num: usize, row: usize, col: usize) -> KeyAction {
        self.layers[layer_num][row][col]
    }

    /// Check the keymap and its behavior config.
    ///
    /// Being a `const fn`, this can run at compile time:
    ///
    /// ```ignore
    /// const _: () = assert!(MY_KEYMAP.validate().is_ok());
    /// ```
    pub const fn validate(&self) -> Result<(), KeymapError> {
        if self.behavior.tap_hold.hold_timeout_ms == 0 {
            return Err(KeymapError::InvalidHoldTimeout);
        }
        if self.behavior.tap_toggle.taps == 0 {
            return Err(KeymapError::InvalidTapToggle);
        }

        let mut layer = 0;
        while layer < NUM_LAYER {
            let mut row = 0;
            while row < ROW {
                let mut col = 0;
                while col < COL {
                    let action = self.layers[layer][row][col];
                    if layer == 0 && matches!(action, KeyAction::Transparent) {
                        return Err(KeymapError::TransparentInBaseLayer { row, col });
                    }
                    if let Some(target) = action.target_layer() {
                        if target as usize >= NUM_LAYER {
                            return Err(KeymapError::UnknownLayer {
                                layer,
                                row,
                                col,
                                target,
                            });
                        }
                    }
                    col += 1;
                }
                row += 1;
            }
            layer += 1;
        }

        Ok(())
    }

    /// Layers that keys on `layer_num` can switch to, in order of first appearance
    pub fn layer_references(&self, layer_num: usize) -> Vec<u8, NUM_LAYER> {
        let mut targets = Vec::new();
        let Some(layer) = self.layers.get(layer_num) else {
            return targets;
        };
        for target in layer.iter().flatten().filter_map(|a| a.target_layer()) {
            // Unknown layers are reported by `validate`, skip them here
            if (target as usize) < NUM_LAYER && !targets.contains(&target) {
                // Can't overflow, there are at most NUM_LAYER distinct targets
                let _ = targets.push(target);
            }
        }
        targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TapHoldConfig, TapToggleConfig};
    use crate::{a, k, layer, mo, tg};

    const TEST_LAYERS: [[[KeyAction; 2]; 2]; 2] = [
        layer!([[k!(A), mo!(1)], [k!(B), k!(C)]]),
        layer!([[k!(Kc1), a!(Transparent)], [a!(No), tg!(0)]]),
    ];

    #[test]
    fn test_lookup() {
        let keymap = KeyMap::new(&TEST_LAYERS, BehaviorConfig::default());
        assert_eq!(keymap.dimensions(), (2, 2, 2));
        assert_eq!(keymap.action_at(0, 0, 0), k!(A));
        assert_eq!(keymap.get(1, 1, 1), Some(tg!(0)));
        assert_eq!(keymap.get(2, 0, 0), None);
        assert_eq!(keymap.get(0, 2, 0), None);
        assert_eq!(keymap.get(0, 0, 2), None);
        assert!(keymap.layer(1).is_some());
        assert!(keymap.layer(2).is_none());
    }

    #[test]
    fn test_validate_ok() {
        const KEYMAP: KeyMap<'static, 2, 2, 2> = KeyMap::new(&TEST_LAYERS, BehaviorConfig::const_default());
        const _: () = assert!(KEYMAP.validate().is_ok());
        assert_eq!(KEYMAP.validate(), Ok(()));
    }

    #[test]
    fn test_validate_transparent_in_base() {
        let layers = [layer!([[k!(A), a!(Transparent)]])];
        let keymap = KeyMap::new(&layers, BehaviorConfig::default());
        assert_eq!(
            keymap.validate(),
            Err(KeymapError::TransparentInBaseLayer { row: 0, col: 1 })
        );
    }

    #[test]
    fn test_validate_unknown_layer() {
        let layers = [layer!([[k!(A), mo!(1)]]), layer!([[a!(Transparent), mo!(7)]])];
        let keymap = KeyMap::new(&layers, BehaviorConfig::default());
        assert_eq!(
            keymap.validate(),
            Err(KeymapError::UnknownLayer {
                layer: 1,
                row: 0,
                col: 1,
                target: 7
            })
        );
    }

    #[test]
    fn test_validate_behavior() {
        let mut behavior = BehaviorConfig {
            tap_hold: TapHoldConfig {
                hold_timeout_ms: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            KeyMap::new(&TEST_LAYERS, behavior).validate(),
            Err(KeymapError::InvalidHoldTimeout)
        );

        behavior.tap_hold = TapHoldConfig::default();
        behavior.tap_toggle = TapToggleConfig { taps: 0 };
        assert_eq!(
            KeyMap::new(&TEST_LAYERS, behavior).validate(),
            Err(KeymapError::InvalidTapToggle)
        );
    }

    #[test]
    fn test_layer_references() {
        let keymap = KeyMap::new(&TEST_LAYERS, BehaviorConfig::default());
        assert_eq!(keymap.layer_references(0).as_slice(), &[1]);
        assert_eq!(keymap.layer_references(1).as_slice(), &[0]);
        assert!(keymap.layer_references(5).is_empty());
    }
}
