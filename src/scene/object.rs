pub mod primitive {
    pub mod plane;
    pub mod sphere;
}
pub mod shape;

use crate::{
    error::Result,
    math::{matrix::Matrix, point::Point, transform::Transform, vector::Vector},
    render::{
        intersection::{Intersection, IntersectionCollection},
        ray::Ray,
    },
};

use super::material::Material;
use shape::Shape;

/// A shape placed in the world, with its own material.
///
/// The inverse transformation is computed once, when the transformation is set,
/// so a constructed object is always invertible.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    shape: Shape,
    material: Material,
    transformation: Matrix,
    inverse_transformation: Matrix,
}

impl Object {
    pub fn new(shape: Shape, material: Material, transformation: Matrix) -> Result<Self> {
        Ok(Self {
            shape,
            material,
            transformation,
            inverse_transformation: transformation.inverse()?,
        })
    }

    pub fn with_shape(shape: Shape) -> Self {
        Self::with_shape_material(shape, Material::default())
    }

    pub fn with_shape_material(shape: Shape, material: Material) -> Self {
        Self {
            shape,
            material,
            transformation: Matrix::identity(),
            inverse_transformation: Matrix::identity(),
        }
    }

    pub fn with_transformation(shape: Shape, transformation: Matrix) -> Result<Self> {
        Self::new(shape, Material::default(), transformation)
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    pub fn transformation(&self) -> &Matrix {
        &self.transformation
    }

    pub fn inverse_transformation(&self) -> &Matrix {
        &self.inverse_transformation
    }

    pub fn set_transformation(&mut self, transformation: Matrix) -> Result<()> {
        self.inverse_transformation = transformation.inverse()?;
        self.transformation = transformation;
        Ok(())
    }

    pub fn to_object_space(&self, world_point: Point) -> Point {
        self.inverse_transformation * world_point
    }

    /// Parametric distances along the world space `ray`, in no particular order.
    pub fn intersection_times(&self, ray: &Ray) -> Vec<f64> {
        let object_ray = ray.transform_new(&self.inverse_transformation);
        self.shape.local_intersect(&object_ray)
    }

    pub fn intersect(&self, ray: &Ray) -> IntersectionCollection<'_> {
        IntersectionCollection::new(
            self.intersection_times(ray)
                .into_iter()
                .map(|time| Intersection::new(time, self))
                .collect(),
        )
    }

    pub fn normal_vector_at(&self, world_point: Point) -> Vector {
        let object_normal = self.shape.local_normal_at(self.to_object_space(world_point));
        // inverse transpose; vectors carry w = 0 so translation drops out
        self.inverse_transformation
            .mul_transposed(object_normal)
            .normalize()
    }
}
