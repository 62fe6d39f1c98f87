use crate::chess::{Color, Position};
use arrayvec::ArrayVec;
use derive_more::{Constructor, Display};

/// A relative direction on the board, as seen by one side.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Direction {
    #[display(fmt = "front")]
    Front,
    #[display(fmt = "back")]
    Back,
    #[display(fmt = "left")]
    Left,
    #[display(fmt = "right")]
    Right,
    #[display(fmt = "front-left")]
    FrontLeft,
    #[display(fmt = "front-right")]
    FrontRight,
    #[display(fmt = "back-left")]
    BackLeft,
    #[display(fmt = "back-right")]
    BackRight,
}

impl Direction {
    /// The four orthogonal directions.
    pub const ORTHOGONAL: [Self; 4] = [
        Direction::Front,
        Direction::Back,
        Direction::Left,
        Direction::Right,
    ];

    /// The four diagonal directions.
    pub const DIAGONAL: [Self; 4] = [
        Direction::FrontLeft,
        Direction::FrontRight,
        Direction::BackLeft,
        Direction::BackRight,
    ];

    /// All eight directions.
    pub const ALL: [Self; 8] = [
        Direction::Front,
        Direction::Back,
        Direction::Left,
        Direction::Right,
        Direction::FrontLeft,
        Direction::FrontRight,
        Direction::BackLeft,
        Direction::BackRight,
    ];

    /// The `(ranks, rows)` step this direction takes from white's side.
    #[inline(always)]
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Front => (0, 1),
            Direction::Back => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::FrontLeft => (-1, 1),
            Direction::FrontRight => (1, 1),
            Direction::BackLeft => (-1, -1),
            Direction::BackRight => (1, -1),
        }
    }

    /// The direction pointing the opposite way.
    #[inline(always)]
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Front => Direction::Back,
            Direction::Back => Direction::Front,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::FrontLeft => Direction::BackRight,
            Direction::FrontRight => Direction::BackLeft,
            Direction::BackLeft => Direction::FrontRight,
            Direction::BackRight => Direction::FrontLeft,
        }
    }
}

/// A [`Position`] seen from the side of a given [`Color`].
///
/// White advances towards the eighth row with the a-file on its left,
/// black advances towards the first row with the h-file on its left.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct DirectedPosition {
    pub position: Position,
    pub perspective: Color,
}

impl DirectedPosition {
    /// One step towards `direction`, if still on the board.
    #[inline(always)]
    pub fn step(&self, direction: Direction) -> Option<Self> {
        let (ranks, rows) = direction.delta();
        let sign = self.perspective.forward();
        let position = self.position.offset(ranks * sign, rows * sign)?;
        Some(DirectedPosition::new(position, self.perspective))
    }

    /// The square in front, if any.
    #[inline(always)]
    pub fn front(&self) -> Option<Position> {
        Some(self.step(Direction::Front)?.position)
    }

    /// The square behind, if any.
    #[inline(always)]
    pub fn back(&self) -> Option<Position> {
        Some(self.step(Direction::Back)?.position)
    }

    /// The square to the left, if any.
    #[inline(always)]
    pub fn left(&self) -> Option<Position> {
        Some(self.step(Direction::Left)?.position)
    }

    /// The square to the right, if any.
    #[inline(always)]
    pub fn right(&self) -> Option<Position> {
        Some(self.step(Direction::Right)?.position)
    }

    /// The square diagonally in front and to the left, if any.
    #[inline(always)]
    pub fn front_left(&self) -> Option<Position> {
        Some(self.step(Direction::FrontLeft)?.position)
    }

    /// The square diagonally in front and to the right, if any.
    #[inline(always)]
    pub fn front_right(&self) -> Option<Position> {
        Some(self.step(Direction::FrontRight)?.position)
    }

    /// The square diagonally behind and to the left, if any.
    #[inline(always)]
    pub fn back_left(&self) -> Option<Position> {
        Some(self.step(Direction::BackLeft)?.position)
    }

    /// The square diagonally behind and to the right, if any.
    #[inline(always)]
    pub fn back_right(&self) -> Option<Position> {
        Some(self.step(Direction::BackRight)?.position)
    }

    /// The squares reached by repeatedly stepping towards `direction`,
    /// from nearest to farthest, up to the edge of the board.
    pub fn spaces(&self, direction: Direction) -> ArrayVec<Position, 7> {
        let mut spaces = ArrayVec::new();
        let mut current = *self;
        while let Some(next) = current.step(direction) {
            spaces.push(next.position);
            current = next;
        }

        spaces
    }
}

impl From<DirectedPosition> for Position {
    #[inline(always)]
    fn from(dp: DirectedPosition) -> Self {
        dp.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Perspective, Rank, Row};
    use test_strategy::proptest;

    #[test]
    fn white_advances_up_the_board() {
        let dp = DirectedPosition::new(Position::E4, Color::White);
        assert_eq!(dp.front(), Some(Position::E5));
        assert_eq!(dp.back(), Some(Position::E3));
        assert_eq!(dp.left(), Some(Position::D4));
        assert_eq!(dp.right(), Some(Position::F4));
        assert_eq!(dp.front_left(), Some(Position::D5));
        assert_eq!(dp.back_right(), Some(Position::F3));
    }

    #[test]
    fn black_advances_down_the_board() {
        let dp = DirectedPosition::new(Position::E4, Color::Black);
        assert_eq!(dp.front(), Some(Position::E3));
        assert_eq!(dp.back(), Some(Position::E5));
        assert_eq!(dp.left(), Some(Position::F4));
        assert_eq!(dp.right(), Some(Position::D4));
        assert_eq!(dp.front_right(), Some(Position::D3));
        assert_eq!(dp.back_left(), Some(Position::F5));
    }

    #[test]
    fn steps_off_the_board_are_absent() {
        let dp = DirectedPosition::new(Position::A8, Color::White);
        assert_eq!(dp.front(), None);
        assert_eq!(dp.left(), None);
        assert_eq!(dp.front_right(), None);
        assert_eq!(dp.back(), Some(Position::A7));
    }

    #[test]
    fn spaces_are_ordered_from_nearest_to_farthest() {
        let dp = DirectedPosition::new(Position::C3, Color::White);
        assert_eq!(
            dp.spaces(Direction::FrontRight).as_slice(),
            &[Position::D4, Position::E5, Position::F6, Position::G7, Position::H8]
        );

        assert_eq!(dp.spaces(Direction::Back).as_slice(), &[Position::C2, Position::C1]);
    }

    #[proptest]
    fn stepping_back_undoes_a_step(dp: DirectedPosition, d: Direction) {
        if let Some(next) = dp.step(d) {
            assert_eq!(next.step(d.opposite()), Some(dp));
        }
    }

    #[proptest]
    fn opposite_perspectives_mirror_every_step(p: Position, d: Direction) {
        let white = DirectedPosition::new(p, Color::White);
        let black = DirectedPosition::new(p, Color::Black);
        assert_eq!(
            white.step(d).map(Position::from),
            black.step(d.opposite()).map(Position::from)
        );
    }

    #[proptest]
    fn spaces_never_include_the_origin(dp: DirectedPosition, d: Direction) {
        assert!(!dp.spaces(d).contains(&dp.position));
    }

    #[proptest]
    fn spaces_in_opposite_directions_span_the_line(dp: DirectedPosition, d: Direction) {
        let forth = dp.spaces(d).len();
        let back = dp.spaces(d.opposite()).len();
        assert!(forth + back <= 7);
    }

    #[proptest]
    fn spaces_reach_the_edge(dp: DirectedPosition, d: Direction) {
        let last = dp.spaces(d).last().copied().unwrap_or(dp.position);
        assert_eq!(DirectedPosition::new(last, dp.perspective).step(d), None);
    }

    #[test]
    fn front_of_home_row_is_mirrored() {
        for c in [Color::White, Color::Black] {
            let home = Position::new(Rank::D, Row::Second.perspective(c));
            let dp = DirectedPosition::new(home, c);
            assert_eq!(dp.front().map(|p| p.row()), Some(Row::Third.perspective(c)));
        }
    }
}
