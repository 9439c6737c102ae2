pub mod error;

pub mod math {
    pub mod approx_eq;
    pub mod color;
    pub mod matrix;
    mod matrix2;
    mod matrix3;
    pub mod point;
    pub mod transform;
    pub mod tuple;
    pub mod vector;
}

pub mod render {
    pub mod camera;
    pub mod canvas;
    pub mod intersection;
    pub mod ray;
}

pub mod scene {
    pub mod light;
    pub mod material;
    pub mod object;
    pub mod pattern;
    pub mod world;
}

pub mod demos {
    pub mod clock;
    pub mod patterns;
    pub mod projectiles;
    pub mod silhouette;
    pub mod spheres;
}

pub use error::{Error, Result};
