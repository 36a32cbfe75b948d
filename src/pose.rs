use glam::{Quat, Vec3};

/// A rigid-body transform sampled at a specific display time. Orientation
/// defaults to identity, position to the origin - the zero value for
/// `PoseAction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };
}

impl From<openxr::Posef> for Pose {
    fn from(value: openxr::Posef) -> Self {
        Self {
            position: Vec3::new(value.position.x, value.position.y, value.position.z),
            orientation: Quat::from_xyzw(
                value.orientation.x,
                value.orientation.y,
                value.orientation.z,
                value.orientation.w,
            ),
        }
    }
}

impl From<Pose> for openxr::Posef {
    fn from(value: Pose) -> Self {
        openxr::Posef {
            position: openxr::Vector3f {
                x: value.position.x,
                y: value.position.y,
                z: value.position.z,
            },
            orientation: openxr::Quaternionf {
                x: value.orientation.x,
                y: value.orientation.y,
                z: value.orientation.z,
                w: value.orientation.w,
            },
        }
    }
}
