use crate::math::{
    color::{BLACK, Color},
    point::Point,
    vector::Vector,
};

use super::{light::PointLightSource, object::Object, pattern::Pattern};

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Used when there is no pattern.
    pub color: Color,
    pub pattern: Option<Pattern>,
    pub ambient: f64,   // [0;1]
    pub diffuse: f64,   // [0;1]
    pub specular: f64,  // [0;1]
    pub shininess: f64, // [10;+inf) (typically up to 200.0)
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::white(),
            pattern: None,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.,
        }
    }
}

impl Material {
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn with_pattern(pattern: Pattern) -> Self {
        Self {
            pattern: Some(pattern),
            ..Default::default()
        }
    }

    pub fn matte_with_color(color: Color) -> Self {
        Self {
            color,
            specular: 0.05,
            shininess: 15.,
            ..Default::default()
        }
    }

    pub fn color_at_object(&self, object: &Object, world_point: Point) -> Color {
        match &self.pattern {
            Some(pattern) => pattern.color_at_object(object, world_point),
            None => self.color,
        }
    }

    /// Phong reflection of `light` at `point`. The result is not clamped.
    pub fn lighting(
        &self,
        object: &Object,
        light: &PointLightSource,
        point: Point,
        eye_v: Vector,
        normal_v: Vector,
        in_shadow: bool,
    ) -> Color {
        let effective_color = self.color_at_object(object, point) * light.intensity();
        let ambient = effective_color * self.ambient;
        if in_shadow {
            return ambient;
        }

        let light_v = (light.position() - point).normalize();
        let light_dot_normal = light_v.dot(normal_v);

        // light on the other side of the surface
        if light_dot_normal < 0. {
            return ambient;
        }
        let diffuse = effective_color * self.diffuse * light_dot_normal;

        let reflect_v = (-light_v).reflect(normal_v);
        let reflect_dot_eye = reflect_v.dot(eye_v);

        // light reflects away from the eye
        let specular = if reflect_dot_eye <= 0. {
            BLACK
        } else {
            light.intensity() * self.specular * reflect_dot_eye.powf(self.shininess)
        };

        ambient + diffuse + specular
    }
}
