use crate::{
    math::{color::Color, point::Point, tuple::Tuple, vector::Vector},
    render::canvas::{Canvas, PixelSink},
};

#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    position: Point,
    velocity: Vector,
}

impl Projectile {
    pub fn new(position: Point, velocity: Vector) -> Self {
        Self { position, velocity }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn velocity(&self) -> Vector {
        self.velocity
    }
}

pub struct Environment {
    gravity: Vector,
    wind: Vector,
    projectile: Projectile,
    canvas: Canvas,
}

impl Environment {
    pub fn new(gravity: Vector, wind: Vector, projectile: Projectile, canvas: Canvas) -> Self {
        Self {
            gravity,
            wind,
            projectile,
            canvas,
        }
    }

    pub fn tick(&mut self) {
        self.projectile = Projectile::new(
            self.projectile.position + self.projectile.velocity,
            self.projectile.velocity + self.gravity + self.wind,
        );
    }

    fn projectile_pos_on_canvas(&self) -> Option<(usize, usize)> {
        let pos = self.projectile.position();
        let x = pos.x().floor() as i64;
        let y = self.canvas.height() as i64 - pos.y().floor() as i64;

        // the outermost row and column are left empty
        let in_bounds = x > 0
            && x < self.canvas.width() as i64
            && y > 0
            && y < self.canvas.height() as i64;
        in_bounds.then_some((x as usize, y as usize))
    }

    pub fn run_sim(mut self, color: Color) -> Canvas {
        while self.projectile.position().y() > 0. {
            if let Some((x, y)) = self.projectile_pos_on_canvas() {
                self.canvas.write_pixel(x, y, color);
            }
            self.tick();
        }
        self.canvas
    }
}

pub fn run() -> Canvas {
    let velocity = Vector::new(1., 1.8, 0.).normalize() * 11.25;
    let projectile = Projectile::new(Point::new(0., 1., 0.), velocity);

    let gravity = Vector::new(0., -0.1, 0.);
    let wind = Vector::new(-0.01, 0., 0.);

    Environment::new(gravity, wind, projectile, Canvas::new(900, 550)).run_sim(Color::red())
}
