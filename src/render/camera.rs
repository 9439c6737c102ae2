use log::debug;

use crate::{
    error::Result,
    math::{color::Color, matrix::Matrix, point::Point, tuple::Tuple},
    scene::world::World,
};

use super::{
    canvas::{Canvas, PixelSink},
    ray::Ray,
};

// camera looks toward -z direction from point zero
// this makes +x to be on the left
#[derive(PartialEq, Debug, Clone)]
pub struct Camera {
    target_width: usize,
    target_height: usize,
    field_of_view: f64,
    transformation: Matrix,
    inverse_transformation: Matrix,

    pixel_size: f64,
    half_width: f64,
    half_height: f64,
}

impl Camera {
    pub fn new(target_width: usize, target_height: usize, field_of_view: f64) -> Self {
        assert!(target_width > 0 && target_height > 0);

        let half_view = (field_of_view / 2.).tan();
        let h_v_aspect = target_width as f64 / target_height as f64;

        let (half_width, half_height) = match h_v_aspect >= 1. {
            true => (half_view, half_view / h_v_aspect),
            false => (half_view * h_v_aspect, half_view),
        };

        let pixel_size = 2. * half_width / target_width as f64;

        Self {
            target_width,
            target_height,
            field_of_view,
            transformation: Matrix::identity(),
            inverse_transformation: Matrix::identity(),

            pixel_size,
            half_width,
            half_height,
        }
    }

    pub fn with_transformation(
        target_width: usize,
        target_height: usize,
        field_of_view: f64,
        transformation: Matrix,
    ) -> Result<Self> {
        let mut camera = Self::new(target_width, target_height, field_of_view);
        camera.set_transformation(transformation)?;
        Ok(camera)
    }

    pub fn set_transformation(&mut self, transformation: Matrix) -> Result<()> {
        self.inverse_transformation = transformation.inverse()?;
        self.transformation = transformation;
        Ok(())
    }

    /// Ray from the camera through the center of pixel (`x`, `y`).
    pub fn ray_for_pixel(&self, x: usize, y: usize) -> Ray {
        let x_offset_to_center = (x as f64 + 0.5) * self.pixel_size;
        let y_offset_to_center = (y as f64 + 0.5) * self.pixel_size;

        let world_x = self.half_width - x_offset_to_center;
        let world_y = self.half_height - y_offset_to_center;

        let pixel = self.inverse_transformation * Point::new(world_x, world_y, -1.);
        let origin = self.inverse_transformation * Point::zero();
        let direction = pixel - origin;

        Ray::new(origin, direction.normalize())
    }

    pub fn color_at_pixel(&self, world: &World, x: usize, y: usize) -> Color {
        world.color_at(&self.ray_for_pixel(x, y))
    }

    /// Shades every pixel in row-major order, one at a time.
    pub fn render_into(&self, world: &World, sink: &mut impl PixelSink) {
        debug!(
            "rendering {}x{} pixels, {} objects",
            self.target_width,
            self.target_height,
            world.objects().len()
        );
        let now = std::time::Instant::now();

        for y in 0..self.target_height {
            for x in 0..self.target_width {
                sink.write_pixel(x, y, self.color_at_pixel(world, x, y));
            }
        }
        debug!("render time: {:?}", now.elapsed());
    }

    pub fn render(&self, world: &World) -> Canvas {
        let mut image = self.canvas();
        self.render_into(world, &mut image);
        image
    }

    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.target_width, self.target_height)
    }

    pub fn target_width(&self) -> usize {
        self.target_width
    }

    pub fn target_height(&self) -> usize {
        self.target_height
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn transformation(&self) -> &Matrix {
        &self.transformation
    }

    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }
}
