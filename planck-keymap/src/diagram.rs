//! ASCII drawing of a keymap layer.
//!
//! ```text
//! ,-----------------------------------------------------------------------------------.
//! | Tab  |  Q   |  W   |  E   |  R   |  T   |  Y   |  U   |  I   |  O   |  P   |BackSp|
//! |------+------+------+------+------+------+------+------+------+------+------+------|
//! ...
//! `-----------------------------------------------------------------------------------'
//! ```

use core::fmt::{self, Write};

use heapless::String;

use crate::action::{Action, KeyAction};
use crate::keycode::KeyCode;
use crate::modifier::{LSHIFT, ModifierCombination, RSHIFT};

/// Width of a key cell, in characters
pub const CELL_WIDTH: usize = 6;

/// Legend of one key, cut to the first `CELL_WIDTH` characters as it's written
#[derive(Default)]
struct Legend {
    text: String<{ CELL_WIDTH * 4 }>,
    chars: usize,
}

impl Legend {
    fn as_str(&self) -> &str {
        self.text.as_str()
    }
}

impl Write for Legend {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        s.chars().try_for_each(|c| self.write_char(c))
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        if self.chars < CELL_WIDTH {
            // At most 4 bytes per char, so this never overflows
            self.text.push(c).map_err(|_| fmt::Error)?;
            self.chars += 1;
        }
        Ok(())
    }
}

/// Displays one layer of a keymap as a box of key legends
pub struct LayerDiagram<'a, const ROW: usize, const COL: usize> {
    grid: &'a [[KeyAction; COL]; ROW],
    layer_names: &'a [&'a str],
}

impl<'a, const ROW: usize, const COL: usize> LayerDiagram<'a, ROW, COL> {
    /// `layer_names` labels layer keys, layers without a name are shown by number
    pub fn new(grid: &'a [[KeyAction; COL]; ROW], layer_names: &'a [&'a str]) -> Self {
        Self { grid, layer_names }
    }

    fn layer_name(&self, layer_num: u8, out: &mut Legend) -> fmt::Result {
        match self.layer_names.get(layer_num as usize) {
            Some(name) => out.write_str(name),
            None => write!(out, "L{}", layer_num),
        }
    }

    fn modifier_name(modifier: ModifierCombination) -> &'static str {
        let (keycodes, n) = modifier.to_modifier_keycodes();
        if n == 0 { "" } else { keycodes[0].legend() }
    }

    /// Write the legend of a key
    fn legend(&self, action: KeyAction, out: &mut Legend) -> fmt::Result {
        match action {
            KeyAction::No | KeyAction::Transparent => Ok(()),
            KeyAction::Single(a) => self.action_legend(a, out),
            // Dual-role keys are labelled by their tap side plus a hold marker
            KeyAction::TapHold(Action::LayerToggle(_), Action::LayerOn(layer_num)) => self.layer_name(layer_num, out),
            KeyAction::TapHold(_, Action::Modifier(m)) => {
                out.write_str(Self::modifier_name(m))?;
                out.write_char('+')
            }
            KeyAction::TapHold(tap, _) => {
                self.action_legend(tap, out)?;
                out.write_char('^')
            }
        }
    }

    fn action_legend(&self, action: Action, out: &mut Legend) -> fmt::Result {
        match action {
            Action::Key(k) => out.write_str(k.legend()),
            Action::KeyWithModifier(k, m) if m == LSHIFT || m == RSHIFT => {
                out.write_str(k.shifted_legend().unwrap_or(k.legend()))
            }
            Action::KeyWithModifier(k, m) => {
                out.write_str(Self::modifier_name(m))?;
                out.write_char('+')?;
                out.write_str(k.legend())
            }
            Action::Modifier(m) => out.write_str(Self::modifier_name(m)),
            Action::LayerOn(layer_num)
            | Action::LayerOff(layer_num)
            | Action::LayerToggle(layer_num)
            | Action::DefaultLayer(layer_num) => self.layer_name(layer_num, out),
        }
    }

    fn write_rule(f: &mut fmt::Formatter<'_>, left: char, right: char) -> fmt::Result {
        f.write_char(left)?;
        for _ in 0..(COL * (CELL_WIDTH + 1)).saturating_sub(1) {
            f.write_char('-')?;
        }
        f.write_char(right)?;
        f.write_char('\n')
    }

    fn write_separator(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('|')?;
        for col in 0..COL {
            if col > 0 {
                f.write_char('+')?;
            }
            for _ in 0..CELL_WIDTH {
                f.write_char('-')?;
            }
        }
        f.write_str("|\n")
    }
}

impl<const ROW: usize, const COL: usize> fmt::Display for LayerDiagram<'_, ROW, COL> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_rule(f, ',', '.')?;
        for (row_idx, row) in self.grid.iter().enumerate() {
            if row_idx > 0 {
                Self::write_separator(f)?;
            }
            f.write_char('|')?;
            for action in row {
                let mut legend = Legend::default();
                self.legend(*action, &mut legend)?;
                write!(f, "{:^width$}|", legend.as_str(), width = CELL_WIDTH)?;
            }
            f.write_char('\n')?;
        }
        Self::write_rule(f, '`', '\'')
    }
}

/// Legend of a single keycode as a diagram cell would show it
pub fn cell_legend(keycode: KeyCode) -> &'static str {
    let legend = keycode.legend();
    let end = legend.char_indices().nth(CELL_WIDTH).map_or(legend.len(), |(idx, _)| idx);
    &legend[..end]
}
