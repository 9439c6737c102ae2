use super::approx_eq::ApproxEq;

#[derive(Debug, Clone, Copy)]
pub(super) struct Matrix2 {
    data: [f64; 4],
}

impl Matrix2 {
    pub fn new(data: [f64; 4]) -> Self {
        Self { data }
    }

    pub fn determinant(&self) -> f64 {
        self.data[0] * self.data[3] - self.data[1] * self.data[2]
    }
}

impl PartialEq for Matrix2 {
    fn eq(&self, other: &Matrix2) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(x, y)| x.approx_eq(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determinant() {
        assert_eq!(Matrix2::new([1., 5., -3., 2.]).determinant(), 17.);
    }

    #[test]
    fn singular_determinant_is_zero() {
        assert_eq!(Matrix2::new([2., 4., 1., 2.]).determinant(), 0.);
    }
}
