use crate::{
    math::{point::Point, vector::Vector},
    render::ray::Ray,
};

/// Sphere of radius 1 centered at the object space origin.
pub struct UnitSphere {}

impl UnitSphere {
    pub fn local_normal_at(object_point: Point) -> Vector {
        object_point - Point::zero()
    }

    pub fn local_intersect(object_ray: &Ray) -> Vec<f64> {
        let vector_sphere_to_ray = *object_ray.origin() - Point::zero();

        let a = object_ray.direction().dot(*object_ray.direction());
        let b = 2. * object_ray.direction().dot(vector_sphere_to_ray);
        let c = vector_sphere_to_ray.dot(vector_sphere_to_ray) - 1.;

        let discriminant = b * b - 4. * a * c;
        // zero direction leaves nothing to solve for
        if discriminant < 0. || a == 0. {
            return Vec::new();
        }

        let delta_sqrt = discriminant.sqrt();
        vec![(-b - delta_sqrt) / (2. * a), (-b + delta_sqrt) / (2. * a)]
    }
}
