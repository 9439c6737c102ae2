use crate::{
    error::Result,
    math::{approx_eq::ApproxEq, color::Color, matrix::Matrix, point::Point, tuple::Tuple},
};

use super::object::Object;

#[derive(Clone, Debug, PartialEq)]
pub enum PatternKind {
    Solid(Color),
    /// Alternates between both patterns as x changes
    Stripe(Box<Pattern>, Box<Pattern>),
    /// Linear blend from the first pattern to the second over each unit of x
    Gradient(Box<Pattern>, Box<Pattern>),
    /// Concentric rings in the xz plane
    Ring(Box<Pattern>, Box<Pattern>),
    /// 3D checkerboard
    Checkers(Box<Pattern>, Box<Pattern>),
    /// Average of both patterns
    Blended(Box<Pattern>, Box<Pattern>),
}

/// Color function of a point, defined in its own pattern space.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    kind: PatternKind,
    transformation: Matrix,
    inverse_transformation: Matrix,
}

impl From<Color> for Pattern {
    fn from(color: Color) -> Self {
        Self::solid(color)
    }
}

impl Pattern {
    pub fn new(kind: PatternKind) -> Self {
        Self {
            kind,
            transformation: Matrix::identity(),
            inverse_transformation: Matrix::identity(),
        }
    }

    pub fn solid(color: Color) -> Self {
        Self::new(PatternKind::Solid(color))
    }

    pub fn stripe(a: impl Into<Pattern>, b: impl Into<Pattern>) -> Self {
        Self::new(PatternKind::Stripe(Box::new(a.into()), Box::new(b.into())))
    }

    pub fn gradient(a: impl Into<Pattern>, b: impl Into<Pattern>) -> Self {
        Self::new(PatternKind::Gradient(Box::new(a.into()), Box::new(b.into())))
    }

    pub fn ring(a: impl Into<Pattern>, b: impl Into<Pattern>) -> Self {
        Self::new(PatternKind::Ring(Box::new(a.into()), Box::new(b.into())))
    }

    pub fn checkers(a: impl Into<Pattern>, b: impl Into<Pattern>) -> Self {
        Self::new(PatternKind::Checkers(Box::new(a.into()), Box::new(b.into())))
    }

    pub fn blended(a: impl Into<Pattern>, b: impl Into<Pattern>) -> Self {
        Self::new(PatternKind::Blended(Box::new(a.into()), Box::new(b.into())))
    }

    pub fn with_transformation(mut self, transformation: Matrix) -> Result<Self> {
        self.set_transformation(transformation)?;
        Ok(self)
    }

    pub fn set_transformation(&mut self, transformation: Matrix) -> Result<()> {
        self.inverse_transformation = transformation.inverse()?;
        self.transformation = transformation;
        Ok(())
    }

    pub fn kind(&self) -> &PatternKind {
        &self.kind
    }

    pub fn transformation(&self) -> &Matrix {
        &self.transformation
    }

    fn is_even(val: f64) -> bool {
        (val % 2.).approx_eq(&0.)
    }

    /// Color of a child pattern, which first moves the point into its own space.
    fn child_color_at(child: &Pattern, point: &Point) -> Color {
        child.color_at(&(child.inverse_transformation * *point))
    }

    /// Color at a point already expressed in this pattern's space.
    pub fn color_at(&self, point: &Point) -> Color {
        match &self.kind {
            PatternKind::Solid(color) => *color,
            PatternKind::Stripe(a, b) => {
                if Self::is_even(point.x().floor()) {
                    Self::child_color_at(a, point)
                } else {
                    Self::child_color_at(b, point)
                }
            }
            PatternKind::Gradient(a, b) => {
                let from = Self::child_color_at(a, point);
                let to = Self::child_color_at(b, point);
                from + (to - from) * (point.x() - point.x().floor())
            }
            PatternKind::Ring(a, b) => {
                let distance = (point.x().powi(2) + point.z().powi(2)).sqrt();
                if Self::is_even(distance.floor()) {
                    Self::child_color_at(a, point)
                } else {
                    Self::child_color_at(b, point)
                }
            }
            PatternKind::Checkers(a, b) => {
                let sum = point.x().floor() + point.y().floor() + point.z().floor();
                if Self::is_even(sum) {
                    Self::child_color_at(a, point)
                } else {
                    Self::child_color_at(b, point)
                }
            }
            PatternKind::Blended(a, b) => {
                Self::child_color_at(a, point).average_blend(Self::child_color_at(b, point))
            }
        }
    }

    /// Color at a world space point on `object`.
    pub fn color_at_object(&self, object: &Object, world_point: Point) -> Color {
        let object_point = object.to_object_space(world_point);
        let pattern_point = self.inverse_transformation * object_point;
        self.color_at(&pattern_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        math::{
            color::{BLACK, WHITE},
            transform::Transform,
        },
        scene::object::shape::Shape,
    };

    #[test]
    fn solid_is_constant() {
        let solid = Pattern::from(Color::red());

        assert_eq!(solid.color_at(&Point::new(10., -3., 0.5)), Color::red());
        assert_eq!(solid.color_at(&Point::zero()), Color::red());
    }

    #[test]
    fn stripe_is_constant_in_y_and_z() {
        let stripe = Pattern::stripe(WHITE, BLACK);

        for point in [
            Point::new(0., 1., 0.),
            Point::new(0., 2., 0.),
            Point::new(0., 0., 1.),
            Point::new(0., 0., 2.),
        ] {
            assert_eq!(stripe.color_at(&point), WHITE);
        }
    }

    #[test]
    fn stripe_alternates_in_x() {
        let stripe = Pattern::stripe(WHITE, BLACK);

        assert_eq!(stripe.color_at(&Point::new(0., 0., 0.)), WHITE);
        assert_eq!(stripe.color_at(&Point::new(0.9, 0., 0.)), WHITE);
        assert_eq!(stripe.color_at(&Point::new(1., 0., 0.)), BLACK);
        assert_eq!(stripe.color_at(&Point::new(-0.1, 0., 0.)), BLACK);
        assert_eq!(stripe.color_at(&Point::new(-1., 0., 0.)), BLACK);
        assert_eq!(stripe.color_at(&Point::new(-1.1, 0., 0.)), WHITE);
    }

    #[test]
    fn stripes_with_object_transformation() {
        let sphere =
            Object::with_transformation(Shape::Sphere, Matrix::scaling_uniform(2.)).unwrap();
        let stripe = Pattern::stripe(WHITE, BLACK);

        assert_eq!(
            stripe.color_at_object(&sphere, Point::new(1.5, 0., 0.)),
            WHITE
        );
    }

    #[test]
    fn stripes_with_pattern_transformation() {
        let sphere = Object::with_shape(Shape::Sphere);
        let stripe = Pattern::stripe(WHITE, BLACK)
            .with_transformation(Matrix::scaling_uniform(2.))
            .unwrap();

        assert_eq!(
            stripe.color_at_object(&sphere, Point::new(1.5, 0., 0.)),
            WHITE
        );
    }

    #[test]
    fn stripes_with_object_and_pattern_transformation() {
        let sphere =
            Object::with_transformation(Shape::Sphere, Matrix::scaling_uniform(2.)).unwrap();
        let stripe = Pattern::stripe(WHITE, BLACK)
            .with_transformation(Matrix::translation(0.5, 0., 0.))
            .unwrap();

        assert_eq!(
            stripe.color_at_object(&sphere, Point::new(2.5, 0., 0.)),
            WHITE
        );
    }

    #[test]
    fn gradient_linearly_interpolates_between_colors() {
        let gradient = Pattern::gradient(WHITE, BLACK);

        assert_eq!(gradient.color_at(&Point::new(0., 0., 0.)), WHITE);
        assert_eq!(
            gradient.color_at(&Point::new(0.25, 0., 0.)),
            Color::new(0.75, 0.75, 0.75)
        );
        assert_eq!(
            gradient.color_at(&Point::new(0.5, 0., 0.)),
            Color::new(0.5, 0.5, 0.5)
        );
        assert_eq!(
            gradient.color_at(&Point::new(1.75, 0., 0.)),
            Color::new(0.25, 0.25, 0.25)
        );
    }

    #[test]
    fn ring_extends_in_both_x_and_z() {
        let ring = Pattern::ring(WHITE, BLACK);

        assert_eq!(ring.color_at(&Point::new(0., 0., 0.)), WHITE);
        assert_eq!(ring.color_at(&Point::new(1., 0., 0.)), BLACK);
        assert_eq!(ring.color_at(&Point::new(0., 0., 1.)), BLACK);
        assert_eq!(ring.color_at(&Point::new(0.708, 0., 0.708)), BLACK);
    }

    #[test]
    fn checkers_repeat_in_each_dimension() {
        let checkers = Pattern::checkers(WHITE, BLACK);

        assert_eq!(checkers.color_at(&Point::new(0., 0., 0.)), WHITE);
        assert_eq!(checkers.color_at(&Point::new(0.99, 0., 0.)), WHITE);
        assert_eq!(checkers.color_at(&Point::new(1.01, 0., 0.)), BLACK);
        assert_eq!(checkers.color_at(&Point::new(0., 0.99, 0.)), WHITE);
        assert_eq!(checkers.color_at(&Point::new(0., 1.01, 0.)), BLACK);
        assert_eq!(checkers.color_at(&Point::new(0., 0., 0.99)), WHITE);
        assert_eq!(checkers.color_at(&Point::new(0., 0., 1.01)), BLACK);
    }

    #[test]
    fn blended_averages_children() {
        let blended = Pattern::blended(Color::red(), Color::blue());

        assert_eq!(
            blended.color_at(&Point::new(3., 1., 2.)),
            Color::new(0.5, 0., 0.5)
        );
    }

    #[test]
    fn nested_children_use_their_own_transformation() {
        let stripe = Pattern::stripe(WHITE, BLACK)
            .with_transformation(Matrix::scaling_uniform(0.5))
            .unwrap();
        let blended = Pattern::blended(Color::red(), stripe);

        // x = 0.75 lands on the second stripe once scaled by 2
        assert_eq!(
            blended.color_at(&Point::new(0.75, 0., 0.)),
            Color::new(0.5, 0., 0.)
        );
        assert_eq!(
            blended.color_at(&Point::new(0.25, 0., 0.)),
            Color::new(1., 0.5, 0.5)
        );
    }

    #[test]
    fn stripe_of_stripes() {
        let inner = Pattern::stripe(Color::red(), Color::green())
            .with_transformation(Matrix::identity().rotate_y(std::f64::consts::FRAC_PI_2).transformed())
            .unwrap();
        let outer = Pattern::stripe(inner, BLACK);

        // first outer stripe, inner stripes vary with z after the rotation
        assert_eq!(outer.color_at(&Point::new(0.5, 0., 0.5)), Color::green());
        assert_eq!(outer.color_at(&Point::new(0.5, 0., -0.5)), Color::red());
        assert_eq!(outer.color_at(&Point::new(1.5, 0., 0.5)), BLACK);
    }

    #[test]
    fn color_at_is_pure() {
        let pattern = Pattern::blended(
            Pattern::checkers(WHITE, Color::red()),
            Pattern::ring(Color::green(), BLACK),
        );
        let point = Point::new(1.3, -0.2, 2.7);

        let first = pattern.color_at(&point);
        for _ in 0..5 {
            assert_eq!(pattern.color_at(&point), first);
        }
    }

    #[test]
    fn singular_pattern_transformation_is_rejected() {
        assert!(
            Pattern::ring(WHITE, BLACK)
                .with_transformation(Matrix::scaling(1., 1., 0.))
                .is_err()
        );
    }
}
