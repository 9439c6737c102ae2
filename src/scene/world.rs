use derive_builder::Builder;

use crate::{
    math::{color::Color, point::Point},
    render::{
        intersection::{IntersecComputations, Intersection, IntersectionCollection},
        ray::Ray,
    },
};

use super::{light::PointLightSource, object::Object};

/// Objects to render, lit by at most one light.
///
/// Without a light every hit shades black.
#[derive(Clone, Debug, Default, Builder)]
#[builder(default)]
pub struct World {
    objects: Vec<Object>,
    #[builder(setter(strip_option))]
    light: Option<PointLightSource>,
}

impl World {
    pub fn new(objects: Vec<Object>, light: Option<PointLightSource>) -> Self {
        Self { objects, light }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), None)
    }

    pub fn add_obj(&mut self, obj: Object) {
        self.objects.push(obj);
    }

    pub fn set_light(&mut self, light: PointLightSource) {
        self.light = Some(light);
    }

    pub fn light(&self) -> Option<&PointLightSource> {
        self.light.as_ref()
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn intersect(&self, ray: &Ray) -> IntersectionCollection<'_> {
        self.objects
            .iter()
            .flat_map(|object| {
                object
                    .intersection_times(ray)
                    .into_iter()
                    .map(move |time| Intersection::new(time, object))
            })
            .collect()
    }

    /// Whether anything sits between `point` and the light.
    pub fn is_shadowed(&self, point: Point) -> bool {
        let Some(light) = &self.light else {
            return false;
        };
        let v = light.position() - point;

        let distance = v.magnitude();
        let ray = Ray::new(point, v.normalize());

        match self.intersect(&ray).hit() {
            None => false,
            Some(inter) => inter.time() < distance,
        }
    }

    pub fn shade_hit(&self, hit_comps: &IntersecComputations) -> Color {
        let Some(light) = &self.light else {
            return Color::black();
        };
        let object = hit_comps.object();

        object.material().lighting(
            object,
            light,
            hit_comps.over_point(),
            hit_comps.eye_v(),
            hit_comps.normal_v(),
            self.is_shadowed(hit_comps.over_point()),
        )
    }

    pub fn color_at(&self, ray: &Ray) -> Color {
        self.intersect(ray)
            .hit_computations(ray)
            .map_or(Color::black(), |hit_comps| self.shade_hit(&hit_comps))
    }
}

#[cfg(test)]
impl World {
    pub fn default_testing() -> Self {
        use super::{material::Material, object::shape::Shape};
        use crate::math::{matrix::Matrix, tuple::Tuple};

        let outer = Object::with_shape_material(
            Shape::Sphere,
            Material {
                color: Color::new(0.8, 1.0, 0.6),
                diffuse: 0.7,
                specular: 0.2,
                ..Default::default()
            },
        );
        let inner = Object::with_transformation(Shape::Sphere, Matrix::scaling(0.5, 0.5, 0.5))
            .expect("scaling by 0.5 is invertible");

        WorldBuilder::default()
            .objects(vec![outer, inner])
            .light(PointLightSource::new(
                Point::new(-10., 10., -10.),
                Color::white(),
            ))
            .build()
            .expect("every field has a default")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_approx_eq_low_prec,
        math::{
            color::{BLACK, WHITE},
            matrix::Matrix,
            tuple::Tuple,
            vector::Vector,
        },
        scene::{material::Material, object::shape::Shape, pattern::Pattern},
    };

    #[test]
    fn empty_world() {
        let world = World::empty();

        assert!(world.objects().is_empty());
        assert!(world.light().is_none());
    }

    #[test]
    fn builder_defaults_to_empty_world() {
        let world = WorldBuilder::default().build().unwrap();

        assert!(world.objects().is_empty());
        assert!(world.light().is_none());
    }

    #[test]
    fn default_testing_world() {
        let world = World::default_testing();

        assert_eq!(world.objects().len(), 2);
        assert_eq!(
            world.light(),
            Some(&PointLightSource::new(Point::new(-10., 10., -10.), WHITE))
        );
        assert_eq!(
            world.objects()[1].transformation(),
            &Matrix::scaling(0.5, 0.5, 0.5)
        );
    }

    #[test]
    fn intersect_world_with_ray() {
        let world = World::default_testing();
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));

        assert_eq!(world.intersect(&ray).times_vec(), vec![4., 4.5, 5.5, 6.]);
    }

    #[test]
    fn shade_intersection() {
        let world = World::default_testing();
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));
        let comps = Intersection::new(4., &world.objects()[0]).computations(&ray);

        assert_approx_eq_low_prec!(
            world.shade_hit(&comps),
            Color::new(0.38066, 0.47583, 0.2855)
        );
    }

    #[test]
    fn shade_intersection_from_inside() {
        let mut world = World::default_testing();
        world.set_light(PointLightSource::new(Point::new(0., 0.25, 0.), WHITE));
        let ray = Ray::new(Point::zero(), Vector::new(0., 0., 1.));
        let comps = Intersection::new(0.5, &world.objects()[1]).computations(&ray);

        assert_approx_eq_low_prec!(
            world.shade_hit(&comps),
            Color::new(0.90498, 0.90498, 0.90498)
        );
    }

    #[test]
    fn color_when_ray_misses() {
        let world = World::default_testing();
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 1., 0.));

        assert_eq!(world.color_at(&ray), BLACK);
    }

    #[test]
    fn color_when_ray_hits() {
        let world = World::default_testing();
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));

        assert_approx_eq_low_prec!(world.color_at(&ray), Color::new(0.38066, 0.47583, 0.2855));
    }

    #[test]
    fn color_with_intersection_behind_ray() {
        let mut world = World::default_testing();
        world.objects[0].material_mut().ambient = 1.;
        world.objects[1].material_mut().ambient = 1.;
        let ray = Ray::new(Point::new(0., 0., 0.75), Vector::new(0., 0., -1.));

        assert_eq!(world.color_at(&ray), world.objects()[1].material().color);
    }

    #[test]
    fn no_shadow_when_nothing_is_collinear_with_point_and_light() {
        let world = World::default_testing();
        assert!(!world.is_shadowed(Point::new(0., 10., 0.)));
    }

    #[test]
    fn shadow_when_object_is_between_point_and_light() {
        let world = World::default_testing();
        assert!(world.is_shadowed(Point::new(10., -10., 10.)));
    }

    #[test]
    fn no_shadow_when_object_is_behind_light() {
        let world = World::default_testing();
        assert!(!world.is_shadowed(Point::new(-20., 20., -20.)));
    }

    #[test]
    fn no_shadow_when_object_is_behind_point() {
        let world = World::default_testing();
        assert!(!world.is_shadowed(Point::new(-2., 2., -2.)));
    }

    #[test]
    fn shade_hit_intersection_in_shadow() {
        let world = WorldBuilder::default()
            .light(PointLightSource::new(Point::new(0., 0., -10.), WHITE))
            .objects(vec![
                Object::with_shape(Shape::Sphere),
                Object::with_transformation(Shape::Sphere, Matrix::translation(0., 0., 10.))
                    .unwrap(),
            ])
            .build()
            .unwrap();

        let ray = Ray::new(Point::new(0., 0., 5.), Vector::new(0., 0., 1.));
        let comps = Intersection::new(4., &world.objects()[1]).computations(&ray);

        assert_eq!(world.shade_hit(&comps), Color::new(0.1, 0.1, 0.1));
    }

    #[test]
    fn world_without_light_is_black_and_unshadowed() {
        let mut world = World::empty();
        world.add_obj(Object::with_shape(Shape::Sphere));
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));

        assert_eq!(world.intersect(&ray).len(), 2);
        assert_eq!(world.color_at(&ray), BLACK);
        assert!(!world.is_shadowed(Point::new(0., 0., -5.)));
    }

    #[test]
    fn patterned_plane_below_light() {
        let floor = Object::with_shape_material(
            Shape::Plane,
            Material {
                ambient: 1.,
                diffuse: 0.,
                specular: 0.,
                ..Material::with_pattern(Pattern::checkers(WHITE, BLACK))
            },
        );
        let world = World::new(
            vec![floor],
            Some(PointLightSource::new(Point::new(0., 10., 0.), WHITE)),
        );

        let down = Vector::new(0., -1., 0.);
        assert_eq!(
            world.color_at(&Ray::new(Point::new(0.5, 1., 0.5), down)),
            WHITE
        );
        assert_eq!(
            world.color_at(&Ray::new(Point::new(1.5, 1., 0.5), down)),
            BLACK
        );
    }
}
