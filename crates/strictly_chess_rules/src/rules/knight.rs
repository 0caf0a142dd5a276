//! Knight rule: the L-shape, occupancy ignored.

use super::super::action::MoveError;
use super::super::{PieceKind, Square};
use super::deltas;

/// Checks a knight move.
pub fn check_knight(from: Square, to: Square) -> Result<(), MoveError> {
    let (df, dr) = deltas(from, to);
    let (af, ar) = (df.abs(), dr.abs());
    if (af == 1 && ar == 2) || (af == 2 && ar == 1) {
        Ok(())
    } else {
        Err(MoveError::BadGeometry(PieceKind::Knight, from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_shapes() {
        let origin = Square::new(0, 0).unwrap();
        assert!(check_knight(origin, Square::new(1, 2).unwrap()).is_ok());
        assert!(check_knight(origin, Square::new(2, 1).unwrap()).is_ok());
        assert!(check_knight(origin, Square::new(2, 2).unwrap()).is_err());
        assert!(check_knight(origin, Square::new(0, 3).unwrap()).is_err());
    }
}
