//! Modifier key combinations.

use core::ops::BitOr;

use bitfield_struct::bitfield;

use crate::keycode::KeyCode;

/// To represent all combinations of modifiers, at least 5 bits are needed.
/// 1 bit for Left/Right, 4 bits for modifier type. Represented in LSB format.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

pub const LCTRL: ModifierCombination = ModifierCombination::new().with_ctrl(true);
pub const LSHIFT: ModifierCombination = ModifierCombination::new().with_shift(true);
pub const LALT: ModifierCombination = ModifierCombination::new().with_alt(true);
pub const LGUI: ModifierCombination = ModifierCombination::new().with_gui(true);
pub const RSHIFT: ModifierCombination = ModifierCombination::new().with_shift(true).with_right(true);

impl ModifierCombination {
    pub const fn new_from(right: bool, gui: bool, alt: bool, shift: bool, ctrl: bool) -> Self {
        ModifierCombination::new()
            .with_right(right)
            .with_gui(gui)
            .with_alt(alt)
            .with_shift(shift)
            .with_ctrl(ctrl)
    }

    /// Returns `true` if no modifier is set. The side bit alone doesn't count.
    pub const fn is_empty(self) -> bool {
        !(self.ctrl() || self.shift() || self.alt() || self.gui())
    }

    /// Convert modifier combination to a list of modifier keycodes.
    /// Returns a list of modifiers keycodes, and the length of the list.
    pub fn to_modifier_keycodes(self) -> ([KeyCode; 4], usize) {
        let mut keycodes = [KeyCode::No; 4];
        let mut i = 0;
        let sided = if self.right() {
            [KeyCode::RCtrl, KeyCode::RShift, KeyCode::RAlt, KeyCode::RGui]
        } else {
            [KeyCode::LCtrl, KeyCode::LShift, KeyCode::LAlt, KeyCode::LGui]
        };
        for (set, keycode) in [self.ctrl(), self.shift(), self.alt(), self.gui()].into_iter().zip(sided) {
            if set {
                keycodes[i] = keycode;
                i += 1;
            }
        }

        (keycodes, i)
    }

    /// Get modifier hid report bits from modifier combination
    pub fn to_hid_modifier_bits(self) -> u8 {
        let (keycodes, n) = self.to_modifier_keycodes();
        keycodes
            .iter()
            .take(n)
            .fold(0, |bits, keycode| bits | keycode.as_modifier_bit())
    }
}
