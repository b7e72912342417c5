//! # 输入矩阵组装

use crate::error::{Result, ThreeDofError};

use nalgebra::DMatrix;

/// 构造 `len(t) × ndof` 的输入矩阵，仅 `dof_index` 列为 `f_t`
pub fn build_input(t: &[f64], dof_index: usize, f_t: &[f64], ndof: usize) -> Result<DMatrix<f64>> {
    if dof_index >= ndof {
        return Err(ThreeDofError::InvalidArgument(format!(
            "DOF index {} out of range (system has {} DOFs)",
            dof_index, ndof
        )));
    }
    if f_t.len() != t.len() {
        return Err(ThreeDofError::dimension("force samples", t.len(), f_t.len()));
    }

    let mut u = DMatrix::zeros(t.len(), ndof);
    for (i, f) in f_t.iter().enumerate() {
        u[(i, dof_index)] = *f;
    }
    Ok(u)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_input_places_column() {
        let t = [0.0, 1.0, 2.0];
        let u = build_input(&t, 1, &[1.0, 2.0, 3.0], 3).unwrap();
        assert_eq!(u.shape(), (3, 3));
        assert_eq!(u[(2, 1)], 3.0);
        assert_eq!(u.column(0).sum(), 0.0);
        assert_eq!(u.column(2).sum(), 0.0);
    }

    #[test]
    fn test_build_input_errors() {
        let t = [0.0, 1.0];
        assert!(matches!(
            build_input(&t, 3, &[0.0, 0.0], 3),
            Err(ThreeDofError::InvalidArgument(_))
        ));
        assert!(matches!(
            build_input(&t, 0, &[0.0], 3),
            Err(ThreeDofError::DimensionMismatch { .. })
        ));
    }
}
