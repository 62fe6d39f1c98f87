use crate::chess::Color;

/// Types whose meaning depends on the side of the board they are seen from.
///
/// Values are always stored as seen by white.
pub trait Perspective: Copy {
    /// The same value, seen from across the board.
    fn flip(&self) -> Self;

    /// The value as seen by `side`.
    #[inline(always)]
    fn perspective(&self, side: Color) -> Self {
        if side == Color::White {
            *self
        } else {
            self.flip()
        }
    }
}
