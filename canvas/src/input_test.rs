use super::*;
use uuid::Uuid;

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift);
    assert!(!m.ctrl);
    assert!(!m.alt);
    assert!(!m.meta);
}

#[test]
fn modifiers_deserialize_missing_as_false() {
    let m: Modifiers = serde_json::from_str(r#"{ "ctrl": true }"#).unwrap();
    assert_eq!(m, Modifiers { ctrl: true, ..Default::default() });
}

// =============================================================
// Button
// =============================================================

#[test]
fn button_from_dom_index() {
    assert_eq!(Button::from_dom(0), Button::Primary);
    assert_eq!(Button::from_dom(1), Button::Middle);
    assert_eq!(Button::from_dom(2), Button::Secondary);
    assert_eq!(Button::from_dom(4), Button::Primary);
}

#[test]
fn button_deserializes_lowercase() {
    let b: Button = serde_json::from_str(r#""secondary""#).unwrap();
    assert_eq!(b, Button::Secondary);
}

// =============================================================
// Surface
// =============================================================

#[test]
fn surface_default_is_board() {
    assert_eq!(Surface::default(), Surface::Board);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
    assert_eq!(InputState::default().mode(), DragMode::Idle);
}

#[test]
fn input_state_modes() {
    let pan = InputState::Panning { last_screen: Point::new(1.0, 2.0) };
    assert_eq!(pan.mode(), DragMode::PanCamera);

    let drag = InputState::DraggingBox {
        id: Uuid::new_v4(),
        start_screen: Point::new(0.0, 0.0),
        anchor: Point::new(10.0, 10.0),
    };
    assert_eq!(drag.mode(), DragMode::DragBox);
}

#[test]
fn drag_mode_serializes_snake_case() {
    assert_eq!(serde_json::to_value(DragMode::PanCamera).unwrap(), "pan_camera");
}
