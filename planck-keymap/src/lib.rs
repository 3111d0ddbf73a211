//! # Planck keymap
//!
//! A five-layer keymap for the Planck (ortho 4x12) keyboard, plus the key
//! vocabulary it is written in.
//!
//! ## Modules
//!
//! - [`planck`] - The keymap table: QWERTY, Lower, Raise, Nav and Adjust layers
//! - [`keycode`] - Keycode definitions, HID keyboard page plus mouse, audio and firmware keys
//! - [`modifier`] - Modifier key combinations
//! - [`action`] - What a key position does: single actions, tap/hold, sentinels
//! - [`layout_macro`] - `k!`, `mo!`, `lt!`, `mt!`, `tt!`, ... for writing keymaps
//! - [`keymap`] - Read-only, validated view over a keymap table
//! - [`layer_state`] - Layer stack used to resolve the live action at a position
//! - [`diagram`] - ASCII drawing of a layer
//! - [`config`] - Tap/hold timing carried with the keymap
//!
//! Matrix scanning, debouncing and HID reporting are left to the firmware
//! that links the table in.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod action;
pub mod config;
pub mod diagram;
pub mod error;
pub mod keycode;
pub mod keymap;
pub mod layer_state;
pub mod layout_macro;
pub mod modifier;
pub mod planck;

pub use error::KeymapError;
pub use keymap::KeyMap;
pub use layer_state::LayerState;
pub use planck::{KEYMAP, Layer, PLANCK};
