use crate::{
    math::{approx_eq::EPSILON, point::Point, vector::Vector},
    scene::object::Object,
};

use super::ray::Ray;

#[derive(Clone, Copy, Debug)]
pub struct Intersection<'a> {
    time: f64,
    object: &'a Object,
}

impl<'a> Intersection<'a> {
    pub fn new(time: f64, object: &'a Object) -> Self {
        Self { time, object }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn object(&self) -> &'a Object {
        self.object
    }

    pub fn computations(&self, ray: &Ray) -> IntersecComputations<'a> {
        IntersecComputations::new(self, ray)
    }
}

/// Intersections sorted by ascending time.
///
/// Sorting is stable, so intersections at equal times keep insertion order.
#[derive(Clone, Debug, Default)]
pub struct IntersectionCollection<'a> {
    vec: Vec<Intersection<'a>>,
}

impl<'a> IntersectionCollection<'a> {
    pub fn new(mut vec: Vec<Intersection<'a>>) -> Self {
        vec.sort_by(|i1, i2| i1.time().total_cmp(&i2.time()));
        Self { vec }
    }

    pub fn empty() -> Self {
        Self { vec: Vec::new() }
    }

    pub fn from_times_and_obj(times: Vec<f64>, object: &'a Object) -> Self {
        Self::new(
            times
                .into_iter()
                .map(|time| Intersection::new(time, object))
                .collect(),
        )
    }

    pub fn join(mut self, other: Self) -> Self {
        self.vec.extend(other.vec);
        Self::new(self.vec)
    }

    /// Intersection with the smallest non-negative time.
    pub fn hit(&self) -> Option<&Intersection<'a>> {
        self.vec.iter().find(|inter| inter.time() >= 0.)
    }

    pub fn hit_computations(&self, ray: &Ray) -> Option<IntersecComputations<'a>> {
        self.hit().map(|hit| hit.computations(ray))
    }

    pub fn times_vec(&self) -> Vec<f64> {
        self.vec.iter().map(|inter| inter.time()).collect()
    }

    pub fn vec(&self) -> &[Intersection<'a>] {
        &self.vec
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
}

impl<'a> FromIterator<Intersection<'a>> for IntersectionCollection<'a> {
    fn from_iter<T: IntoIterator<Item = Intersection<'a>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Everything shading needs to know about a single hit.
#[derive(Clone, Copy, Debug)]
pub struct IntersecComputations<'a> {
    time: f64,
    object: &'a Object,
    point: Point,
    over_point: Point,
    eye_v: Vector,
    normal_v: Vector,
    inside_obj: bool,
}

impl<'a> IntersecComputations<'a> {
    pub fn new(intersection: &Intersection<'a>, ray: &Ray) -> Self {
        let time = intersection.time();
        let object = intersection.object();

        let point = ray.position(time);
        let eye_v = -*ray.direction();
        let mut normal_v = object.normal_vector_at(point);

        let inside_obj = normal_v.dot(eye_v) < 0.;
        if inside_obj {
            normal_v = -normal_v;
        }

        // nudged off the surface so shadow rays don't hit the object itself
        let over_point = point + normal_v * EPSILON;

        Self {
            time,
            object,
            point,
            over_point,
            eye_v,
            normal_v,
            inside_obj,
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }
    pub fn object(&self) -> &'a Object {
        self.object
    }
    pub fn point(&self) -> Point {
        self.point
    }
    pub fn over_point(&self) -> Point {
        self.over_point
    }
    pub fn eye_v(&self) -> Vector {
        self.eye_v
    }
    pub fn normal_v(&self) -> Vector {
        self.normal_v
    }
    pub fn inside_obj(&self) -> bool {
        self.inside_obj
    }
}
