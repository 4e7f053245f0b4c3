#![allow(clippy::float_cmp)]

use super::*;
use canvas::camera::Camera;
use canvas::input::DragMode;

fn replay() -> Replay {
    let mut engine = EngineCore::new();
    engine.set_viewport(800.0, 600.0);
    Replay::new(engine)
}

fn run(replay: &mut Replay, script: &str) -> Vec<Action> {
    parse_script(script).unwrap().iter().flat_map(|e| replay.apply(e)).collect()
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_skips_blank_and_comment_lines() {
    let events = parse_script("\n# setup\n{\"event\":\"add_box\"}\n   \n{\"event\":\"zoom_in\"}\n").unwrap();
    assert_eq!(events, vec![ScriptEvent::AddBox, ScriptEvent::ZoomIn]);
}

#[test]
fn parse_reports_line_number() {
    let err = parse_script("{\"event\":\"add_box\"}\n\n{\"event\":\"jump\"}\n").unwrap_err();
    let ScriptError::Parse { line, .. } = err;
    assert_eq!(line, 3);
}

#[test]
fn parse_pointer_down_defaults_to_board() {
    let events = parse_script(r#"{"event":"pointer_down","x":10,"y":20,"button":"secondary"}"#).unwrap();
    assert_eq!(
        events,
        vec![ScriptEvent::PointerDown { x: 10.0, y: 20.0, button: Button::Secondary, target: Surface::Board }]
    );
}

#[test]
fn parse_pointer_down_requires_button() {
    assert!(parse_script(r#"{"event":"pointer_down","x":10,"y":20}"#).is_err());
}

#[test]
fn parse_wheel_modifiers_are_optional() {
    let events = parse_script(r#"{"event":"wheel","x":1,"y":2,"dy":-100,"ctrl":true}"#).unwrap();
    assert_eq!(
        events,
        vec![ScriptEvent::Wheel {
            x: 1.0,
            y: 2.0,
            dx: 0.0,
            dy: -100.0,
            modifiers: Modifiers { ctrl: true, ..Default::default() },
        }]
    );
}

#[test]
fn parse_set_color_variants() {
    let events = parse_script(concat!(
        r#"{"event":"set_color","index":0,"color":{"swatch":"red"}}"#,
        "\n",
        r##"{"event":"set_color","index":1,"color":{"hex":"#abcdef"}}"##,
    ))
    .unwrap();
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[1], ScriptEvent::SetColor { index: 1, color: ColorSpec::Hex(h) } if h == "#abcdef"));
}

// =============================================================
// Replay
// =============================================================

#[test]
fn replay_add_and_drag_box() {
    let mut r = replay();
    let script = r#"
        {"event":"add_box"}
        {"event":"pointer_down","x":450,"y":350,"button":"primary"}
        {"event":"pointer_move","x":550,"y":350}
        {"event":"pointer_up"}
    "#;
    let actions = run(&mut r, script);
    assert_eq!(actions.len(), 3);
    let boxes = r.engine().entities();
    assert_eq!(boxes.len(), 1);
    assert_eq!((boxes[0].x, boxes[0].y), (500.0, 300.0));
    assert_eq!(r.engine().selection(), Some(boxes[0].id));
    assert_eq!(r.engine().mode(), DragMode::Idle);
}

#[test]
fn replay_addresses_boxes_by_creation_index() {
    let mut r = replay();
    run(&mut r, "{\"event\":\"add_box\"}\n{\"event\":\"add_box\"}\n{\"event\":\"delete_box\",\"index\":0}");
    let remaining = r.engine().entities();
    assert_eq!(remaining.len(), 1);

    // Index 1 still names the second box after the first is gone.
    run(&mut r, r#"{"event":"set_color","index":1,"color":{"swatch":"purple"}}"#);
    assert_eq!(r.engine().entities()[0].color, ColorSpec::Swatch(canvas::doc::Swatch::Purple));
}

#[test]
fn replay_unknown_index_is_noop() {
    let mut r = replay();
    assert!(run(&mut r, r#"{"event":"focus_box","index":4}"#).is_empty());
    assert_eq!(r.engine().camera(), Camera::default());
}

#[test]
fn replay_right_drag_pans() {
    let mut r = replay();
    run(
        &mut r,
        r#"
        {"event":"pointer_down","x":100,"y":100,"button":"secondary"}
        {"event":"pointer_move","x":130,"y":90}
        {"event":"pointer_leave"}
        {"event":"pointer_move","x":500,"y":500}
    "#,
    );
    assert_eq!(r.engine().camera(), Camera { pan_x: 30.0, pan_y: -10.0, zoom: 1.0 });
}

#[test]
fn replay_resize_moves_spawn_point() {
    let mut r = replay();
    run(&mut r, "{\"event\":\"resize\",\"width\":200,\"height\":200}\n{\"event\":\"add_box\"}");
    let b = &r.engine().entities()[0];
    assert_eq!((b.x, b.y), (100.0, 100.0));
}

#[test]
fn replay_fit_after_boxes() {
    let mut r = replay();
    let actions = run(&mut r, "{\"event\":\"add_box\"}\n{\"event\":\"fit_to_screen\"}");
    assert!(actions.iter().any(|a| matches!(a, Action::CameraChanged(_))));
    assert_eq!(r.engine().camera().zoom, 3.0);
}
