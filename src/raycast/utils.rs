use glam::DVec2;

use crate::types::GridError;

/// Zip parallel coordinate slices into points, rejecting unusable input.
pub(crate) fn obstacle_points(xs: &[f64], ys: &[f64]) -> Result<Vec<DVec2>, GridError> {
    if xs.len() != ys.len() {
        return Err(GridError::MismatchedInput {
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }
    if xs.is_empty() {
        return Err(GridError::EmptyInput);
    }

    xs.iter()
        .zip(ys)
        .enumerate()
        .map(|(index, (&x, &y))| {
            if x.is_finite() && y.is_finite() {
                Ok(DVec2::new(x, y))
            } else {
                Err(GridError::NonFiniteCoordinate { index })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zips_points() {
        let points = obstacle_points(&[1.0, 2.0], &[3.0, 4.0]).unwrap();
        assert_eq!(points, vec![DVec2::new(1.0, 3.0), DVec2::new(2.0, 4.0)]);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            obstacle_points(&[], &[]),
            Err(GridError::EmptyInput)
        ));
        assert!(matches!(
            obstacle_points(&[1.0], &[]),
            Err(GridError::MismatchedInput { x_len: 1, y_len: 0 })
        ));
        assert!(matches!(
            obstacle_points(&[1.0, f64::NAN], &[1.0, 2.0]),
            Err(GridError::NonFiniteCoordinate { index: 1 })
        ));
    }
}
