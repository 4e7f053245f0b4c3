//! Viewport and pointer-interaction engine for the infinite grid board.
//!
//! The board is an unbounded world plane holding fixed-size boxes that snap to
//! a zoom-dependent grid. This crate owns everything between raw input events
//! and committed state: the pan/zoom camera, the world/screen transforms, the
//! gesture state machine that decides between panning the camera and dragging
//! a box, and the entity store the gestures mutate. Drawing is left to the host,
//! which re-reads [`engine::EngineCore::camera`] and
//! [`engine::EngineCore::entities`] after each handled event.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Event/command facade returning [`engine::Action`]s |
//! | [`interaction`] | Pointer gesture state machine (idle / pan / drag box) |
//! | [`viewport`] | Camera plus surface size: zoom buttons, reset, fit, focus |
//! | [`camera`] | Camera value, zoom limits, world/screen transforms |
//! | [`snap`] | Grid snapping and the zoom-dependent grid size |
//! | [`doc`] | Boxes, colors and the ordered entity store |
//! | [`hit`] | Spatial hit-testing against the entity store |
//! | [`input`] | Input event payload types |
//! | [`config`] | Board policy knobs and their validation |
//! | [`consts`] | Default numeric constants |

pub mod camera;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod hit;
pub mod input;
pub mod interaction;
pub mod snap;
pub mod viewport;
