use thiserror::Error;

use crate::prelude::SquareMatrix;

/// The tolerance below which two distance tables count as equal.
///
/// The two solvers accumulate floating-point error in a different order over
/// paths of up to `n` additions, so cells may differ by a small amount even
/// when both results are correct.
pub const DEFAULT_TOLERANCE: f64 = 0.5;

#[derive(Error, Debug, PartialEq)]
pub enum VerificationError {
    #[error("the distance matrices have different orders ({left} vs {right})")]
    DimensionMismatch { left: usize, right: usize },
    #[error("distances disagree at [{row}, {col}], the difference is {diff}")]
    Mismatch { row: usize, col: usize, diff: f64 },
}

/// Cross-checks two distance matrices cell by cell.
///
/// Fails on the first cell in row-major order whose signed difference
/// exceeds `tolerance` in magnitude. Both solvers publish the same
/// [`UNREACHABLE`](crate::prelude::UNREACHABLE) sentinel, so unreachable
/// cells compare equal.
///
/// On success the caller decides what to do with the agreement; the check
/// itself has no side effects.
pub fn verify(
    a: &SquareMatrix,
    b: &SquareMatrix,
    tolerance: f64,
) -> Result<(), VerificationError> {
    if a.order() != b.order() {
        return Err(VerificationError::DimensionMismatch {
            left: a.order(),
            right: b.order(),
        });
    }

    for row in 0..a.order() {
        for col in 0..a.order() {
            let diff = a[(row, col)] - b[(row, col)];
            if diff.abs() > tolerance {
                return Err(VerificationError::Mismatch { row, col, diff });
            }
        }
    }

    Ok(())
}
