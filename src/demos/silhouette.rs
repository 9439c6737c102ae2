use crate::{
    math::{color::Color, point::Point, tuple::Tuple},
    render::{
        canvas::{Canvas, PixelSink},
        ray::Ray,
    },
    scene::object::{Object, shape::Shape},
};

const CANVAS_PIXELS: usize = 100;
const WALL_Z: f64 = 5.;
const WALL_SIZE: f64 = 7.;

/// Casts rays from a fixed origin onto a wall behind a unit sphere and
/// paints every pixel whose ray hits the sphere.
pub fn run() -> Canvas {
    let ray_origin = Point::new(0., 0., -5.);
    let pixel_size = WALL_SIZE / CANVAS_PIXELS as f64;
    let half_wall = WALL_SIZE / 2.;

    let mut canvas = Canvas::new(CANVAS_PIXELS, CANVAS_PIXELS);
    let color = Color::red();
    let sphere = Object::with_shape(Shape::Sphere);

    for y in 0..CANVAS_PIXELS {
        let world_y = half_wall - pixel_size * y as f64;
        for x in 0..CANVAS_PIXELS {
            let world_x = -half_wall + pixel_size * x as f64;
            let position = Point::new(world_x, world_y, WALL_Z);

            let ray = Ray::new(ray_origin, (position - ray_origin).normalize());
            if sphere.intersect(&ray).hit().is_some() {
                canvas.write_pixel(x, y, color);
            }
        }
    }
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::color::BLACK;

    #[test]
    fn sphere_covers_center_but_not_corners() {
        let canvas = run();

        assert_eq!(canvas.pixel_at(50, 50), Color::red());
        assert_eq!(canvas.pixel_at(0, 0), BLACK);
        assert_eq!(canvas.pixel_at(99, 99), BLACK);
    }

    #[test]
    fn silhouette_is_flat_colored() {
        let canvas = run();

        for y in 0..CANVAS_PIXELS {
            for x in 0..CANVAS_PIXELS {
                let pixel = canvas.pixel_at(x, y);
                assert!(pixel == Color::red() || pixel == BLACK);
            }
        }
    }
}
