//! Debug module for visualization and debugging tools
//!
//! Gizmos are collected as plain data; the host decides how to draw them.

pub mod gizmos;

pub use gizmos::{Gizmo, GizmoCollector, GizmoColor, GizmoKind};
