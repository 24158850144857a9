//! Gizmo Core
//!
//! Screen-space transform gizmo for the viewport overlay.
//!
//! The host projects the gizmo origin and the three local axis ends to screen
//! points and hands them in once per frame together with the pointer state.
//! The core answers with the handle under the cursor, the handle being
//! dragged, and an ordered list of 2D primitives to paint. It never touches
//! matrices, cameras or the renderer.
//!
//! # Module Structure
//!
//! ```text
//! gizmo-core/
//! ├── constants.rs   # Fade band, pick budgets, handle proportions
//! ├── geometry.rs    # Segment distance, point-in-quad, ring sampling
//! ├── visibility.rs  # Foreshortening fade
//! ├── handle.rs      # Modes, axes, planes, handle ids
//! ├── input.rs       # Per-frame input
//! ├── layout.rs      # Derived per-frame screen geometry
//! ├── ring.rs        # Rotation rings and the shared dual clip
//! ├── picking.rs     # Hover computation
//! ├── draw.rs        # Draw primitives and draw list building
//! ├── state.rs       # Idle / dragging state
//! ├── gizmo.rs       # Per-frame driver
//! ├── config.rs      # Style and RON persistence
//! └── error.rs       # Error types
//! ```

pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod gizmo;
pub mod handle;
pub mod input;
pub mod layout;
pub mod picking;
pub mod ring;
pub mod state;
pub mod visibility;

pub use config::{GizmoConfig, GizmoStyle};
pub use draw::{DrawList, DrawPrimitive, Highlight, Rgba, build_draw_list};
pub use error::GizmoError;
pub use gizmo::{GizmoFrame, RawFrameInput, TransformGizmo};
pub use handle::{Axis, Handle, HandleKind, Plane, TransformMode, handle_to_id};
pub use input::GizmoFrameInput;
pub use layout::GizmoLayout;
pub use picking::pick_handle;
pub use ring::{RingSet, RotationRing};
pub use state::GizmoState;
pub use visibility::AxisVisibility;
