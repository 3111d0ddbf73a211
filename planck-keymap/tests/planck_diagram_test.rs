mod common;

use planck_keymap::diagram::LayerDiagram;
use planck_keymap::planck::{KEYMAP, LAYER_NAMES, Layer};

fn diagram(layer: Layer) -> String {
    LayerDiagram::new(&KEYMAP[layer.index()], LAYER_NAMES).to_string()
}

#[test]
fn test_qwerty_diagram() {
    let diagram = diagram(Layer::Qwerty);
    log::debug!("Qwerty layer:\n{}", diagram);
    let lines: Vec<&str> = diagram.lines().collect();
    // 4 key rows, 3 separators, top and bottom rules
    assert_eq!(lines.len(), 9);
    assert!(lines.iter().all(|line| line.len() == 85));
    assert_eq!(
        lines[0],
        ",-----------------------------------------------------------------------------------."
    );
    assert_eq!(
        lines[1],
        "| Tab  |  Q   |  W   |  E   |  R   |  T   |  Y   |  U   |  I   |  O   |  P   |BackSp|"
    );
    assert_eq!(
        lines[2],
        "|------+------+------+------+------+------+------+------+------+------+------+------|"
    );
    assert_eq!(
        lines[3],
        "|Ctrl+ |  A   |  S   |  D   |  F   |  G   |  H   |  J   |  K   |  L   |  ;^  |  '   |"
    );
    assert_eq!(
        lines[7],
        "|Adjust|Ctrl+ | Alt  | Gui  |Lower |Space |Space |Raise | Left | Down |  Up  |Right |"
    );
    assert_eq!(
        lines[8],
        "`-----------------------------------------------------------------------------------'"
    );
}

#[test]
fn test_lower_diagram_shows_shifted_symbols() {
    let diagram = diagram(Layer::Lower);
    assert!(diagram.contains(
        "|  ~   |  !   |  @   |  #   |  $   |  %   |  ^   |  &   |  *   |  (   |  )   |      |"
    ));
    assert!(diagram.contains("|  _   |  +   |  {   |  }   |  |   |"));
}

#[test]
fn test_adjust_diagram() {
    let diagram = diagram(Layer::Adjust);
    log::debug!("Adjust layer:\n{}", diagram);
    assert!(diagram.contains("|Reset |Sleep |      |"));
    assert!(diagram.contains("|Aud on|Audoff|"));
    assert!(diagram.contains("|NmLock|  7   |  8   |  9   |  -   | Del  |"));
}
