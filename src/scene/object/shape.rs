use crate::{
    math::{point::Point, vector::Vector},
    render::ray::Ray,
};

use super::primitive::{plane::PlaneXZ, sphere::UnitSphere};

/// Object space geometry of an object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Unit sphere at the origin.
    Sphere,
    /// Infinite xz plane with normal pointing towards +y.
    Plane,
}

impl Shape {
    pub fn local_intersect(&self, object_ray: &Ray) -> Vec<f64> {
        match self {
            Shape::Sphere => UnitSphere::local_intersect(object_ray),
            Shape::Plane => PlaneXZ::local_intersect(object_ray),
        }
    }

    pub fn local_normal_at(&self, object_point: Point) -> Vector {
        match self {
            Shape::Sphere => UnitSphere::local_normal_at(object_point),
            Shape::Plane => PlaneXZ::local_normal_at(),
        }
    }
}
