use glam::{Mat4, Quat, Vec3};

/// Placement of an object: a fixed translation followed by an accumulated rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
}

impl Transform {
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
        }
    }

    /// Translate, then rotate in the translated frame.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }

    /// Composes `rotation` onto the current orientation (applied in local space).
    pub fn rotate(&mut self, rotation: Quat) {
        self.rotation = (self.rotation * rotation).normalize();
    }

    pub fn rotated(mut self, rotation: Quat) -> Self {
        self.rotate(rotation);
        self
    }

    #[allow(dead_code)]
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    #[allow(dead_code)]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_translation(Vec3::ZERO)
    }
}
