use super::{approx_eq::ApproxEq, matrix2::Matrix2};

/// Minor of a 4x4 matrix, only used by cofactor expansion.
#[derive(Debug, Clone, Copy)]
pub(super) struct Matrix3 {
    data: [f64; 9],
}

impl Matrix3 {
    pub fn new(data: [f64; 9]) -> Self {
        Self { data }
    }

    pub fn submatrix(&self, row_to_del: usize, col_to_del: usize) -> Matrix2 {
        let mut new_data = [0.; 4];
        let mut id = 0;

        for row in (0..3).filter(|&row| row != row_to_del) {
            for col in (0..3).filter(|&col| col != col_to_del) {
                new_data[id] = self.data[row * 3 + col];
                id += 1;
            }
        }
        Matrix2::new(new_data)
    }

    pub fn minor(&self, row: usize, col: usize) -> f64 {
        self.submatrix(row, col).determinant()
    }

    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 1 { -minor } else { minor }
    }

    pub fn determinant(&self) -> f64 {
        self.data
            .iter()
            .take(3)
            .enumerate()
            .map(|(col, x)| x * self.cofactor(0, col))
            .sum()
    }
}

impl PartialEq for Matrix3 {
    fn eq(&self, other: &Matrix3) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(x, y)| x.approx_eq(y))
    }
}
