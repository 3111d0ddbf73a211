//! Planck (ortho 4x12) keymap with QWERTY, Lower, Raise, Nav and Adjust layers.

use strum::{EnumCount, EnumIter, FromRepr, IntoStaticStr, VariantNames};

use crate::action::KeyAction;
use crate::config::BehaviorConfig;
use crate::keymap::KeyMap;
use crate::modifier::{LCTRL, LSHIFT};
use crate::{a, k, layer, lt, mo, mt, shifted, tt};

pub const ROW: usize = 4;
pub const COL: usize = 12;
pub const NUM_LAYER: usize = Layer::COUNT;

/// Layers of the Planck keymap, in stacking order
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, EnumCount, EnumIter, FromRepr, IntoStaticStr, VariantNames)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    Qwerty,
    Lower,
    Raise,
    Nav,
    Adjust,
}

impl Layer {
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Names of all layers, indexed by layer number
pub const LAYER_NAMES: &[&str] = Layer::VARIANTS;

#[rustfmt::skip]
pub const KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
    // Qwerty
    layer!([
        [k!(Tab),              k!(Q),                k!(W),    k!(E),    k!(R),              k!(T),     k!(Y),     k!(U),              k!(I),     k!(O),    k!(P),                     k!(Backspace)],
        [mt!(Escape, LCTRL),   k!(A),                k!(S),    k!(D),    k!(F),              k!(G),     k!(H),     k!(J),              k!(K),     k!(L),    lt!(Layer::Nav, Semicolon), k!(Quote)],
        [k!(LShift),           k!(Z),                k!(X),    k!(C),    k!(V),              k!(B),     k!(N),     k!(M),              k!(Comma), k!(Dot),  k!(Slash),                 mt!(Enter, LSHIFT)],
        [tt!(Layer::Adjust),   mt!(Delete, LCTRL),   k!(LAlt), k!(LGui), mo!(Layer::Lower),  k!(Space), k!(Space), mo!(Layer::Raise),  k!(Left),  k!(Down), k!(Up),                    k!(Right)]
    ]),
    // Lower
    layer!([
        [shifted!(Grave), shifted!(Kc1), shifted!(Kc2), shifted!(Kc3), shifted!(Kc4), shifted!(Kc5), shifted!(Kc6), shifted!(Kc7),     shifted!(Kc8),   shifted!(Kc9),         shifted!(Kc0),          a!(Transparent)],
        [a!(Transparent), k!(F1),        k!(F2),        k!(F3),        k!(F4),        k!(F5),        k!(F6),        shifted!(Minus),   shifted!(Equal), shifted!(LeftBracket), shifted!(RightBracket), shifted!(Backslash)],
        [a!(Transparent), k!(F7),        k!(F8),        k!(F9),        k!(F10),       k!(F11),       k!(F12),       a!(Transparent),   a!(Transparent), a!(Transparent),       k!(PrintScreen),        a!(Transparent)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(MediaNextTrack), k!(AudioVolDown), k!(AudioVolUp), k!(MediaPlayPause)]
    ]),
    // Raise
    layer!([
        [k!(Grave),       k!(Kc1),       k!(Kc2),       k!(Kc3),       k!(Kc4),       k!(Kc5),       k!(Kc6),       k!(Kc7),         k!(Kc8),         k!(Kc9),          k!(Kc0),           a!(Transparent)],
        [a!(Transparent), k!(F1),        k!(F2),        k!(F3),        k!(F4),        k!(F5),        k!(F6),        k!(Minus),       k!(Equal),       k!(LeftBracket),  k!(RightBracket),  k!(Backslash)],
        [a!(Transparent), k!(F7),        k!(F8),        k!(F9),        k!(F10),       k!(F11),       k!(F12),       a!(Transparent), a!(Transparent), a!(Transparent),  a!(Transparent),   a!(Transparent)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(MediaNextTrack), k!(AudioVolDown), k!(AudioVolUp), k!(MediaPlayPause)]
    ]),
    // Nav
    layer!([
        [a!(Transparent), k!(MouseWheelUp), k!(MouseUp),   k!(MouseWheelDown), a!(No),           a!(No),         k!(Home),  k!(PageUp),    k!(WwwBack),        k!(WwwForward),   a!(No),          a!(Transparent)],
        [a!(Transparent), k!(MouseLeft),    k!(MouseDown), k!(MouseRight),     a!(No),           a!(No),         k!(Left),  k!(Down),      k!(Up),             k!(Right),        a!(Transparent), a!(Transparent)],
        [a!(Transparent), a!(No),           a!(No),        a!(No),             a!(No),           a!(No),         k!(End),   k!(PageDown),  k!(WwwForward),     a!(No),           a!(No),          a!(Transparent)],
        [a!(Transparent), a!(Transparent),  a!(Transparent), a!(Transparent),  k!(MouseAccel1),  k!(MouseBtn1),  k!(MouseBtn1), k!(MouseBtn2), k!(MediaNextTrack), k!(AudioVolDown), k!(AudioVolUp), k!(MediaPlayPause)]
    ]),
    // Adjust
    layer!([
        [k!(Bootloader),  k!(SystemSleep),    a!(No),            a!(No),            a!(No),               a!(No),    k!(NumLock),    k!(Kp7), k!(Kp8),  k!(Kp9),  k!(KpMinus), k!(Delete)],
        [k!(CapsLock),    a!(No),             a!(No),            k!(AudioOn),       k!(AudioOff),         a!(No),    k!(KpAsterisk), k!(Kp4), k!(Kp5),  k!(Kp6),  k!(KpPlus),  k!(Backspace)],
        [a!(Transparent), k!(MediaNextTrack), k!(AudioVolDown),  k!(AudioVolUp),    k!(MediaPlayPause),   a!(No),    k!(KpSlash),    k!(Kp1), k!(Kp2),  k!(Kp3),  k!(KpDot),   k!(KpEnter)],
        [a!(Transparent), k!(AudioMute),      a!(Transparent),   a!(Transparent),   a!(Transparent),      k!(Space), k!(Space),      k!(Kp0), k!(Left), k!(Down), k!(Up),      k!(Right)]
    ]),
];

/// The Planck keymap with default tap/hold timing
pub const PLANCK: KeyMap<'static, ROW, COL, NUM_LAYER> = KeyMap::new(&KEYMAP, BehaviorConfig::const_default());

const _: () = assert!(PLANCK.validate().is_ok(), "Planck keymap failed validation");

/// Owned copy of the keymap, for firmware that keeps a mutable keymap in RAM
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    KEYMAP
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_layer_indices() {
        assert_eq!(NUM_LAYER, 5);
        for (i, layer) in Layer::iter().enumerate() {
            assert_eq!(layer.index(), i);
            assert_eq!(Layer::from_repr(i as u8), Some(layer));
            assert_eq!(layer.name(), LAYER_NAMES[i]);
        }
        assert_eq!(Layer::from_repr(5), None);
        assert_eq!(LAYER_NAMES, ["Qwerty", "Lower", "Raise", "Nav", "Adjust"]);
    }

    #[test]
    fn test_owned_copy_matches() {
        assert_eq!(get_default_keymap(), KEYMAP);
    }
}
