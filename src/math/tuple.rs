/// Common interface of homogeneous coordinates.
/// `w` is fixed by the implementing type: 1 for points, 0 for vectors.
pub trait Tuple: Copy {
    fn new(x: f64, y: f64, z: f64) -> Self;

    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;
    fn w(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}
