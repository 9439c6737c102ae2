use crate::{
    math::{approx_eq::ApproxEq, tuple::Tuple, vector::Vector},
    render::ray::Ray,
};

/// Infinite plane spanned by the object space x and z axes.
pub struct PlaneXZ {}

impl PlaneXZ {
    pub fn local_normal_at() -> Vector {
        Vector::new(0., 1., 0.)
    }

    pub fn local_intersect(object_ray: &Ray) -> Vec<f64> {
        // parallel or coplanar rays never cross the plane
        if object_ray.direction().y().approx_eq(&0.) {
            return Vec::new();
        }
        vec![-object_ray.origin().y() / object_ray.direction().y()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point::Point;

    #[test]
    fn ray_parallel_to_plane() {
        let ray = Ray::new(Point::new(0., 10., 0.), Vector::new(0., 0., 1.));
        assert!(PlaneXZ::local_intersect(&ray).is_empty());
    }

    #[test]
    fn coplanar_ray() {
        let ray = Ray::new(Point::zero(), Vector::new(0., 0., 1.));
        assert!(PlaneXZ::local_intersect(&ray).is_empty());
    }

    #[test]
    fn nearly_parallel_ray_counts_as_parallel() {
        let ray = Ray::new(Point::new(0., 1., 0.), Vector::new(1., 1.0e-7, 0.));
        assert!(PlaneXZ::local_intersect(&ray).is_empty());
    }

    #[test]
    fn ray_intersecting_plane_from_above() {
        let ray = Ray::new(Point::new(0., 1., 0.), Vector::new(0., -1., 0.));
        assert_eq!(PlaneXZ::local_intersect(&ray), vec![1.]);
    }

    #[test]
    fn ray_intersecting_plane_from_below() {
        let ray = Ray::new(Point::new(0., -1., 0.), Vector::new(0., 1., 0.));
        assert_eq!(PlaneXZ::local_intersect(&ray), vec![1.]);
    }
}
