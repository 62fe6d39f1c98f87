use crate::chess::{Bitboard, Color, ParsePieceError, Piece, Position, Rank, Role, Row};
use crate::util::{Grid, Integer};
use arrayvec::ArrayString;
use derive_more::{Display, Error};
use std::fmt::{self, Write};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// An 8x8 [`Grid`] addressed by [`Position`].
///
/// Cells are enumerated from `a8` to `h1`, row by row.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ChessGrid<T>(Grid<T, 8, 8>);

impl<T> ChessGrid<T> {
    /// Constructs a grid by calling `f` for every [`Position`].
    pub fn from_fn(mut f: impl FnMut(Position) -> T) -> Self {
        ChessGrid(Grid::from_fn(|row, column| {
            f(<Position as Integer>::new((row << 3 | column) as u8))
        }))
    }

    /// An iterator over every [`Position`] and its element, in enumeration order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        Position::iter().zip(self.0.iter().map(|(_, cell)| cell))
    }
}

impl<T> Index<Position> for ChessGrid<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, p: Position) -> &Self::Output {
        &self.0[p.grid_index()]
    }
}

impl<T> IndexMut<Position> for ChessGrid<T> {
    #[inline(always)]
    fn index_mut(&mut self, p: Position) -> &mut Self::Output {
        &mut self.0[p.grid_index()]
    }
}

/// The chess board.
pub type Board = ChessGrid<Option<Piece>>;

impl Board {
    /// The board with no pieces on it.
    #[inline(always)]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The canonical starting board.
    pub fn standard() -> Self {
        const BACK: [Role; 8] = [
            Role::Rook,
            Role::Knight,
            Role::Bishop,
            Role::Queen,
            Role::King,
            Role::Bishop,
            Role::Knight,
            Role::Rook,
        ];

        Self::from_fn(|p| match p.row() {
            Row::First => Some(Piece(Color::White, BACK[p.rank().index()])),
            Row::Second => Some(Piece(Color::White, Role::Pawn)),
            Row::Seventh => Some(Piece(Color::Black, Role::Pawn)),
            Row::Eighth => Some(Piece(Color::Black, BACK[p.rank().index()])),
            _ => None,
        })
    }

    /// An iterator over the pieces on the board, in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells().filter_map(|(p, cell)| Some((p, (*cell)?)))
    }

    /// [`Position`]s occupied by pieces of a [`Color`].
    pub fn by_color(&self, c: Color) -> Bitboard {
        self.iter()
            .filter(|(_, piece)| piece.color() == c)
            .map(|(p, _)| p)
            .collect()
    }

    /// The [`Position`] of the king of a [`Color`], if on the board.
    pub fn king(&self, c: Color) -> Option<Position> {
        let king = Piece(c, Role::King);
        self.iter().find(|&(_, piece)| piece == king).map(|(p, _)| p)
    }
}

impl fmt::Display for Board {
    /// Formats the piece placement field of FEN.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut skip = 0;
        for (p, cell) in self.cells() {
            let mut buffer = ArrayString::<2>::new();

            match cell {
                None => skip += 1,
                Some(piece) => write!(buffer, "{piece}")?,
            }

            if p.rank() == Rank::H && p.row() != Row::First {
                buffer.push('/');
            }

            if skip > 0 && (!buffer.is_empty() || p == Position::H1) {
                write!(f, "{skip}")?;
                skip = 0;
            }

            f.write_str(&buffer)?;
        }

        Ok(())
    }
}

/// The reason why parsing [`Board`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseBoardError {
    #[display(fmt = "failed to parse board, expected 8 rows separated by `/`")]
    InvalidRowCount,
    #[display(fmt = "failed to parse board, expected every row to span 8 squares")]
    InvalidRowLength,
    #[display(fmt = "failed to parse board")]
    InvalidPiece(ParsePieceError),
}

impl From<ParsePieceError> for ParseBoardError {
    fn from(e: ParsePieceError) -> Self {
        ParseBoardError::InvalidPiece(e)
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<_> = s.split('/').collect();
        if rows.len() != 8 {
            return Err(ParseBoardError::InvalidRowCount);
        }

        let mut board = Board::empty();
        for (row, segment) in rows.into_iter().enumerate() {
            let mut column = 0;
            for c in segment.chars() {
                let mut buffer = [0; 4];

                if column >= 8 {
                    return Err(ParseBoardError::InvalidRowLength);
                } else if let Some(skip @ 1..=8) = c.to_digit(10) {
                    column += skip as usize;
                } else {
                    let piece = c.encode_utf8(&mut buffer).parse()?;
                    board.0[(row, column)] = Some(piece);
                    column += 1;
                }
            }

            if column != 8 {
                return Err(ParseBoardError::InvalidRowLength);
            }
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::ParseRoleError;
    use proptest::sample::Selector;
    use test_strategy::proptest;

    fn board(cells: [[Option<Piece>; 8]; 8]) -> Board {
        ChessGrid::from_fn(|p| {
            let (row, column) = p.grid_index();
            cells[row][column]
        })
    }

    #[test]
    fn cells_enumerate_every_position_once() {
        let b = Board::standard();
        assert_eq!(Vec::from_iter(b.cells().map(|(p, _)| p)), Vec::from_iter(Position::iter()));
        assert_eq!(b.iter().count(), 32);
    }

    #[test]
    fn standard_board_has_the_canonical_placement() {
        assert_eq!(
            Board::standard().to_string(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
    }

    #[test]
    fn empty_board_has_no_pieces() {
        assert_eq!(Board::empty().iter().count(), 0);
        assert_eq!(Board::empty().to_string(), "8/8/8/8/8/8/8/8");
    }

    #[test]
    fn standard_board_has_one_king_per_side() {
        let b = Board::standard();
        assert_eq!(b.king(Color::White), Some(Position::E1));
        assert_eq!(b.king(Color::Black), Some(Position::E8));
    }

    #[test]
    fn cells_follow_grid_order() {
        let b = Board::standard();
        let positions: Vec<_> = b.cells().map(|(p, _)| p).collect();
        assert_eq!(positions.first(), Some(&Position::A8));
        assert_eq!(positions.get(8), Some(&Position::A7));
        assert_eq!(positions.last(), Some(&Position::H1));
    }

    #[proptest]
    fn from_fn_addresses_every_position(p: Position) {
        assert_eq!(ChessGrid::from_fn(|q| q)[p], p);
    }

    #[proptest]
    fn assigning_replaces_a_single_cell(p: Position, piece: Piece, q: Position) {
        let mut b = Board::empty();
        b[p] = Some(piece);
        assert_eq!(b[q], (p == q).then_some(piece));
    }

    #[proptest]
    fn iter_returns_pieces_and_positions(cells: [[Option<Piece>; 8]; 8]) {
        let b = board(cells);
        for (p, piece) in b.iter() {
            assert_eq!(b[p], Some(piece));
        }
    }

    #[proptest]
    fn by_color_returns_positions_occupied_by_pieces_of_a_color(
        cells: [[Option<Piece>; 8]; 8],
        c: Color,
    ) {
        let b = board(cells);
        for p in b.by_color(c) {
            assert_eq!(b[p].map(|piece| piece.color()), Some(c));
        }

        let occupied: Bitboard = b.iter().map(|(p, _)| p).collect();
        assert_eq!(b.by_color(c) | b.by_color(!c), occupied);
    }

    #[proptest]
    fn parsing_printed_board_is_an_identity(cells: [[Option<Piece>; 8]; 8]) {
        let b = board(cells);
        assert_eq!(b.to_string().parse(), Ok(b));
    }

    #[proptest]
    fn parsing_board_fails_if_not_eight_rows(#[strategy(0usize..16)] n: usize) {
        let s = vec!["8"; n].join("/");
        if n != 8 {
            assert_eq!(s.parse::<Board>(), Err(ParseBoardError::InvalidRowCount));
        }
    }

    #[proptest]
    fn parsing_board_fails_if_row_too_short(selector: Selector, #[strategy(1u8..8)] n: u8) {
        let mut rows = vec!["8".to_string(); 8];
        *selector.select(&mut rows) = n.to_string();
        assert_eq!(
            rows.join("/").parse::<Board>(),
            Err(ParseBoardError::InvalidRowLength)
        );
    }

    #[test]
    fn parsing_board_fails_if_row_too_long() {
        assert_eq!(
            "9/8/8/8/8/8/8/8".parse::<Board>(),
            Err(ParseBoardError::InvalidPiece(ParsePieceError::from(ParseRoleError)))
        );

        assert_eq!(
            "8p/8/8/8/8/8/8/8".parse::<Board>(),
            Err(ParseBoardError::InvalidRowLength)
        );
    }

    #[test]
    fn parsing_board_fails_on_unknown_piece() {
        assert_eq!(
            "rnbqkbnr/pppppppp/8/8/4x3/8/PPPPPPPP/RNBQKBNR".parse::<Board>(),
            Err(ParseBoardError::InvalidPiece(ParsePieceError::from(ParseRoleError)))
        );
    }
}
