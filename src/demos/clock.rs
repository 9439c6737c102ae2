use std::f64::consts::PI;

use crate::{
    math::{color::Color, point::Point, transform::Transform, tuple::Tuple},
    render::canvas::{Canvas, PixelSink},
};

const CANVAS_SIZE: usize = 500;
const RADIUS: f64 = 200.;
const RADIANS_PER_HOUR: f64 = PI / 6.;

fn hour_mark(hour: usize) -> Point {
    // 12 o'clock
    Point::new(0., 1., 0.)
        .rotate_z(hour as f64 * RADIANS_PER_HOUR)
        .transformed()
}

fn pixel_coordinates(canvas: &Canvas, point: Point) -> Option<(usize, usize)> {
    let x = (canvas.width() / 2) as i64 + (point.x() * RADIUS).floor() as i64;
    let y = (canvas.height() / 2) as i64 - (point.y() * RADIUS).floor() as i64;

    let in_bounds = (0..canvas.width() as i64).contains(&x) && (0..canvas.height() as i64).contains(&y);
    in_bounds.then_some((x as usize, y as usize))
}

pub fn run() -> Canvas {
    let mut canvas = Canvas::new(CANVAS_SIZE, CANVAS_SIZE);

    for hour in 0..12 {
        if let Some((x, y)) = pixel_coordinates(&canvas, hour_mark(hour)) {
            canvas.write_pixel(x, y, Color::white());
        }
    }
    canvas
}
