use planck_keymap::LayerState;
use planck_keymap::action::KeyAction;
use planck_keymap::planck::{COL, NUM_LAYER, PLANCK, ROW};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub type PlanckLayerState = LayerState<ROW, COL, NUM_LAYER>;

/// Resolve a press at `(row, col)` and feed any layer action back into the layer state,
/// the way the firmware's key processing does
pub fn press(state: &mut PlanckLayerState, row: usize, col: usize) -> KeyAction {
    let action = state.resolve(&PLANCK, row, col, true);
    state.process_layer_action(action, true);
    action
}

/// Counterpart of [`press`]
pub fn release(state: &mut PlanckLayerState, row: usize, col: usize) -> KeyAction {
    let action = state.resolve(&PLANCK, row, col, false);
    state.process_layer_action(action, false);
    action
}
