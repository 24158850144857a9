//! Gizmo handle identifiers
//!
//! Internally a handle is a `(mode, kind)` pair. The stable integer encoding
//! used by hosts (`0` = none, `1..=6` translate, `11..=15` rotate,
//! `21..=27` scale) exists only at the boundary, through [`Handle::id`] and
//! [`Handle::from_id`].

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::GizmoError;

/// Active transform tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransformMode {
    /// Selection only, no gizmo handles
    #[default]
    Select,
    /// Move along axes and planes
    Translate,
    /// Rotate about axes, the view direction or freely
    Rotate,
    /// Scale along axes, planes or uniformly
    Scale,
}

impl TransformMode {
    /// All modes in boundary order
    pub const ALL: [TransformMode; 4] = [
        TransformMode::Select,
        TransformMode::Translate,
        TransformMode::Rotate,
        TransformMode::Scale,
    ];

    /// Integer used at the host boundary
    pub fn to_index(self) -> i32 {
        match self {
            TransformMode::Select => 0,
            TransformMode::Translate => 1,
            TransformMode::Rotate => 2,
            TransformMode::Scale => 3,
        }
    }

    /// Whether this mode shows two-axis plane handles
    pub fn has_plane_handles(self) -> bool {
        matches!(self, TransformMode::Translate | TransformMode::Scale)
    }

    fn id_base(self) -> i32 {
        match self {
            TransformMode::Select => 0,
            TransformMode::Translate => 0,
            TransformMode::Rotate => 10,
            TransformMode::Scale => 20,
        }
    }
}

impl TryFrom<i32> for TransformMode {
    type Error = GizmoError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TransformMode::Select),
            1 => Ok(TransformMode::Translate),
            2 => Ok(TransformMode::Rotate),
            3 => Ok(TransformMode::Scale),
            other => Err(GizmoError::InvalidMode(other)),
        }
    }
}

/// One of the three local axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Local X
    X,
    /// Local Y
    Y,
    /// Local Z
    Z,
}

impl Axis {
    /// All axes in index order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Array index (0, 1, 2)
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// World unit vector
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// The two axes spanning the plane this axis' rotation ring lies in
    pub fn ring_basis(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }
}

/// A two-axis plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Plane {
    /// Spanned by X and Y
    XY,
    /// Spanned by X and Z
    XZ,
    /// Spanned by Y and Z
    YZ,
}

impl Plane {
    /// All planes in picking order
    pub const ALL: [Plane; 3] = [Plane::XY, Plane::XZ, Plane::YZ];

    /// The two axes spanning this plane
    pub fn axes(self) -> (Axis, Axis) {
        match self {
            Plane::XY => (Axis::X, Axis::Y),
            Plane::XZ => (Axis::X, Axis::Z),
            Plane::YZ => (Axis::Y, Axis::Z),
        }
    }

    /// World normal of this plane
    pub fn normal(self) -> Vec3 {
        match self {
            Plane::XY => Vec3::Z,
            Plane::XZ => Vec3::Y,
            Plane::YZ => Vec3::X,
        }
    }

    fn offset(self) -> i32 {
        match self {
            Plane::XY => 4,
            Plane::XZ => 5,
            Plane::YZ => 6,
        }
    }
}

/// What kind of interactive element a handle is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleKind {
    /// Single axis line, or the rotation ring about that axis in rotate mode
    Axis(Axis),
    /// Two-axis plane quad
    Plane(Plane),
    /// Free rotation around the view direction (outer white ring)
    ViewRing,
    /// Free drag from the central sphere
    InnerSphere,
    /// Uniform scale ring
    UniformRing,
}

/// A gizmo handle: the element kind together with the mode it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Handle {
    /// Mode the handle belongs to
    pub mode: TransformMode,
    /// Element kind
    pub kind: HandleKind,
}

impl Handle {
    /// Create a handle, returning `None` for combinations that do not exist
    pub fn new(mode: TransformMode, kind: HandleKind) -> Option<Self> {
        let valid = match (mode, kind) {
            (TransformMode::Select, _) => false,
            (_, HandleKind::Axis(_)) => true,
            (m, HandleKind::Plane(_)) => m.has_plane_handles(),
            (m, HandleKind::ViewRing | HandleKind::InnerSphere) => m == TransformMode::Rotate,
            (m, HandleKind::UniformRing) => m == TransformMode::Scale,
        };
        valid.then_some(Self { mode, kind })
    }

    /// Axis handle for `mode`
    pub fn axis_handle(mode: TransformMode, axis: Axis) -> Option<Self> {
        Self::new(mode, HandleKind::Axis(axis))
    }

    /// Plane handle for `mode`
    pub fn plane_handle(mode: TransformMode, plane: Plane) -> Option<Self> {
        Self::new(mode, HandleKind::Plane(plane))
    }

    /// Stable integer id used at the host boundary
    pub fn id(self) -> i32 {
        let offset = match self.kind {
            HandleKind::Axis(axis) => axis.index() as i32 + 1,
            HandleKind::Plane(plane) => plane.offset(),
            HandleKind::ViewRing => 4,
            HandleKind::InnerSphere => 5,
            HandleKind::UniformRing => 7,
        };
        self.mode.id_base() + offset
    }

    /// Decode a boundary id; `0` and unknown ids decode to `None`
    pub fn from_id(id: i32) -> Option<Self> {
        let mode = match id {
            1..=9 => TransformMode::Translate,
            11..=19 => TransformMode::Rotate,
            21..=29 => TransformMode::Scale,
            _ => return None,
        };
        let kind = match (mode, id - mode.id_base()) {
            (_, 1) => HandleKind::Axis(Axis::X),
            (_, 2) => HandleKind::Axis(Axis::Y),
            (_, 3) => HandleKind::Axis(Axis::Z),
            (TransformMode::Rotate, 4) => HandleKind::ViewRing,
            (TransformMode::Rotate, 5) => HandleKind::InnerSphere,
            (_, 4) => HandleKind::Plane(Plane::XY),
            (_, 5) => HandleKind::Plane(Plane::XZ),
            (_, 6) => HandleKind::Plane(Plane::YZ),
            (_, 7) => HandleKind::UniformRing,
            _ => return None,
        };
        Self::new(mode, kind)
    }

    /// Axis this handle constrains to, if it is an axis handle
    pub fn axis(self) -> Option<Axis> {
        match self.kind {
            HandleKind::Axis(axis) => Some(axis),
            _ => None,
        }
    }

    /// Plane this handle constrains to, if it is a plane handle
    pub fn plane(self) -> Option<Plane> {
        match self.kind {
            HandleKind::Plane(plane) => Some(plane),
            _ => None,
        }
    }
}

impl TryFrom<i32> for Handle {
    type Error = GizmoError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Handle::from_id(value).ok_or(GizmoError::InvalidHandleId(value))
    }
}

/// Encode an optional handle as a boundary id (`0` for none)
pub fn handle_to_id(handle: Option<Handle>) -> i32 {
    handle.map_or(0, Handle::id)
}
