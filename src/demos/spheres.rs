use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};

use crate::{
    error::Result,
    math::{
        color::Color, matrix::Matrix, point::Point, transform::Transform, tuple::Tuple,
        vector::Vector,
    },
    render::{camera::Camera, canvas::Canvas},
    scene::{
        light::PointLightSource,
        material::Material,
        object::{Object, shape::Shape},
        world::World,
    },
};

pub const DEFAULT_WIDTH: usize = 500;
pub const DEFAULT_HEIGHT: usize = 250;
pub const DEFAULT_FOV: f64 = FRAC_PI_3;

/// Glossy sphere material shared by the three spheres of the camera demos.
pub(super) fn sphere_material(color: Color) -> Material {
    Material {
        color,
        diffuse: 0.7,
        specular: 0.3,
        ..Default::default()
    }
}

/// Middle, right and left spheres resting on the floor.
pub(super) fn spheres() -> Result<Vec<Object>> {
    let middle = Object::new(
        Shape::Sphere,
        sphere_material(Color::new(0.1, 1., 0.5)),
        Matrix::translation(-0.5, 1., 0.5),
    )?;
    let right = Object::new(
        Shape::Sphere,
        sphere_material(Color::new(0.5, 1., 0.1)),
        Matrix::scaling_uniform(0.5)
            .translate(1.5, 0.5, -0.5)
            .transformed(),
    )?;
    let left = Object::new(
        Shape::Sphere,
        sphere_material(Color::new(1., 0.8, 0.1)),
        Matrix::scaling_uniform(0.33)
            .translate(-1.5, 0.33, -0.75)
            .transformed(),
    )?;

    Ok(vec![middle, right, left])
}

pub(super) fn light() -> PointLightSource {
    PointLightSource::new(Point::new(-10., 10., -10.), Color::white())
}

pub(super) fn camera_looking_at_spheres(
    width: Option<usize>,
    height: Option<usize>,
    fov: Option<f64>,
    defaults: (usize, usize, f64),
) -> Result<Camera> {
    Camera::with_transformation(
        width.unwrap_or(defaults.0),
        height.unwrap_or(defaults.1),
        fov.unwrap_or(defaults.2),
        Matrix::view_transformation(
            Point::new(0., 1.5, -5.),
            Point::new(0., 1., 0.),
            Vector::new(0., 1., 0.),
        ),
    )
}

fn wall(material: Material, y_rotation: f64) -> Result<Object> {
    Object::new(
        Shape::Sphere,
        material,
        Matrix::scaling(10., 0.01, 10.)
            .rotate_x(FRAC_PI_2)
            .rotate_y(y_rotation)
            .translate(0., 0., 5.)
            .transformed(),
    )
}

/// Three spheres on a floor between two walls, all made of squashed spheres.
pub fn world() -> Result<World> {
    let wall_material = Material {
        color: Color::new(1., 0.9, 0.9),
        specular: 0.,
        ..Default::default()
    };

    let floor = Object::new(
        Shape::Sphere,
        wall_material.clone(),
        Matrix::scaling(10., 0.01, 10.),
    )?;
    let left_wall = wall(wall_material.clone(), -FRAC_PI_4)?;
    let right_wall = wall(wall_material, FRAC_PI_4)?;

    let mut objects = vec![floor, left_wall, right_wall];
    objects.extend(spheres()?);

    Ok(World::new(objects, Some(light())))
}

pub fn camera(width: Option<usize>, height: Option<usize>, fov: Option<f64>) -> Result<Camera> {
    camera_looking_at_spheres(width, height, fov, (DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_FOV))
}

pub fn run(width: Option<usize>, height: Option<usize>, fov: Option<f64>) -> Result<Canvas> {
    Ok(camera(width, height, fov)?.render(&world()?))
}
