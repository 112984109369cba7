pub type Vec3 = nalgebra::Vector3<f64>;

pub type UnitVec3 = nalgebra::UnitVector3<f64>;

pub trait Vec3Ext {
    /// Signed length of the projection of `self` onto `dir`
    fn component_along(self, dir: UnitVec3) -> f64;

    /// The part of `self` orthogonal to `dir`
    fn reject_from(self, dir: UnitVec3) -> Vec3;
}

impl Vec3Ext for Vec3 {
    fn component_along(self, dir: UnitVec3) -> f64 {
        dir.dot(&self)
    }

    fn reject_from(self, dir: UnitVec3) -> Vec3 {
        self - dir.into_inner() * self.component_along(dir)
    }
}
