use std::f64::consts::{FRAC_PI_3, FRAC_PI_4};

use crate::{
    error::Result,
    math::{color::Color, matrix::Matrix, transform::Transform},
    render::{camera::Camera, canvas::Canvas},
    scene::{
        material::Material,
        object::{Object, shape::Shape},
        pattern::Pattern,
        world::World,
    },
};

use super::spheres::{camera_looking_at_spheres, light, spheres};

pub const DEFAULT_WIDTH: usize = 250;
pub const DEFAULT_HEIGHT: usize = 125;
pub const DEFAULT_FOV: f64 = FRAC_PI_3;

/// Red blended with thin diagonal gray stripes.
fn floor_pattern() -> Result<Pattern> {
    let stripe = Pattern::stripe(Color::new(0.5, 0.5, 0.5), Color::black()).with_transformation(
        Matrix::identity()
            .rotate_y(FRAC_PI_4)
            .scale_uniform(0.5)
            .transformed(),
    )?;
    Ok(Pattern::blended(Color::red(), stripe))
}

/// The three spheres standing on a patterned plane.
pub fn world() -> Result<World> {
    let floor = Object::with_shape_material(
        Shape::Plane,
        Material {
            specular: 0.,
            ..Material::with_pattern(floor_pattern()?)
        },
    );

    let mut world = World::new(vec![floor], Some(light()));
    for sphere in spheres()? {
        world.add_obj(sphere);
    }
    Ok(world)
}

pub fn camera(width: Option<usize>, height: Option<usize>, fov: Option<f64>) -> Result<Camera> {
    camera_looking_at_spheres(width, height, fov, (DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_FOV))
}

pub fn run(width: Option<usize>, height: Option<usize>, fov: Option<f64>) -> Result<Canvas> {
    Ok(camera(width, height, fov)?.render(&world()?))
}
