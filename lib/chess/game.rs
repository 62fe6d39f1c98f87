use crate::chess::{arbiter, castle_rook, Bitboard, Board, Color, Coordinates, DirectedPosition};
use crate::chess::{IllegalMove, Move, MoveKind, Piece, Position, Promotion, Role, State};
use derive_more::{Display, Error};
use proptest::{prelude::*, sample, sample::Selector};
use std::fmt;

/// The reason why a [`Board`] can't be played on.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum InvalidBoard {
    #[display(fmt = "the {_0} king is missing")]
    MissingKing(#[error(not(source))] Color),
    #[display(fmt = "there is more than one {_0} king")]
    ExtraKing(#[error(not(source))] Color),
}

/// A game of chess.
///
/// Games are immutable, every move yields a new value.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
    turn: Color,
}

impl Default for Game {
    fn default() -> Self {
        Self::standard()
    }
}

impl Game {
    /// The game from the canonical starting position, white to move.
    pub fn standard() -> Self {
        Self::new(Board::standard(), Color::White)
    }

    /// A game starting from an arbitrary board.
    ///
    /// Without history, neither king nor rooks are considered to have moved.
    pub fn new(board: Board, turn: Color) -> Self {
        Game {
            board,
            history: Vec::new(),
            turn,
        }
    }

    /// A game starting from an arbitrary board, if each side has exactly one king.
    pub fn try_new(board: Board, turn: Color) -> Result<Self, InvalidBoard> {
        for c in [Color::White, Color::Black] {
            match board.iter().filter(|&(_, piece)| piece == Piece(c, Role::King)).count() {
                0 => return Err(InvalidBoard::MissingKing(c)),
                1 => continue,
                _ => return Err(InvalidBoard::ExtraKing(c)),
            }
        }

        Ok(Self::new(board, turn))
    }

    /// The current board.
    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The moves played so far, oldest first.
    #[inline(always)]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The side to move.
    #[inline(always)]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The game after the [`Move`] is played.
    ///
    /// # Panics
    ///
    /// Panics if the origin of the move is empty.
    pub fn performing(&self, m: Move) -> Game {
        let mut board = self.board;
        let Some(piece) = board[m.origin()].take() else {
            panic!("no piece to move at `{}`", m.origin());
        };

        match m.kind() {
            MoveKind::Standard | MoveKind::NeedsPromotion => {
                board[m.destination()] = Some(piece);
            }

            MoveKind::Castle => {
                let (whence, whither) = castle_rook(&m);
                board[m.destination()] = Some(piece);
                board[whither] = board[whence].take();
            }

            MoveKind::EnPassant => {
                board[m.destination()] = Some(piece);
                if let Some(p) = DirectedPosition::new(m.destination(), piece.color()).back() {
                    board[p] = None;
                }
            }

            MoveKind::Promotion(p) => {
                board[m.destination()] = Some(Piece(piece.color(), p.into()));
            }
        }

        let mut history = self.history.clone();
        history.push(m);

        Game {
            board,
            history,
            turn: !self.turn,
        }
    }

    /// The game before the last [`Move`] was played.
    ///
    /// Reversing a game with no history is a no-op.
    pub fn reversing_last_move(&self) -> Game {
        let Some((&m, history)) = self.history.split_last() else {
            return self.clone();
        };

        let mut board = self.board;
        let Some(piece) = board[m.destination()].take() else {
            panic!("no piece to move back from `{}`", m.destination());
        };

        match m.kind() {
            MoveKind::Standard | MoveKind::NeedsPromotion => {
                board[m.origin()] = Some(piece);
                board[m.destination()] = m.capture();
            }

            MoveKind::Castle => {
                let (whence, whither) = castle_rook(&m);
                board[m.origin()] = Some(piece);
                board[whence] = board[whither].take();
            }

            MoveKind::EnPassant => {
                board[m.origin()] = Some(piece);
                if let Some(p) = DirectedPosition::new(m.destination(), piece.color()).back() {
                    board[p] = m.capture();
                }
            }

            MoveKind::Promotion(_) => {
                board[m.origin()] = Some(Piece(piece.color(), Role::Pawn));
                board[m.destination()] = m.capture();
            }
        }

        Game {
            board,
            history: history.to_vec(),
            turn: !self.turn,
        }
    }

    /// The game after the pending promotion is finalized.
    ///
    /// # Panics
    ///
    /// Panics unless the last move is awaiting a promotion.
    pub fn promoting(&self, p: Promotion) -> Game {
        match self.history.last() {
            Some(m) if m.kind() == MoveKind::NeedsPromotion => {
                self.reversing_last_move().performing(m.promoted(p))
            }

            _ => panic!("no promotion is pending"),
        }
    }

    /// The pseudo-legal moves of the piece at a [`Position`], if any.
    pub fn moves(&self, p: Position) -> Option<Vec<Move>> {
        let piece = self.board[p]?;
        Some(piece.possible_moves(p, self).into_iter().collect())
    }

    /// The pseudo-legal moves of every piece of a [`Color`], in enumeration order.
    pub fn all_moves(&self, c: Color) -> Vec<Move> {
        self.board
            .iter()
            .filter(|(_, piece)| piece.color() == c)
            .flat_map(|(p, piece)| piece.possible_moves(p, self))
            .collect()
    }

    /// The legal moves of the side to move.
    pub fn current_moves(&self) -> Vec<Move> {
        arbiter::valid_moves(self.all_moves(self.turn), self)
    }

    /// The [`Position`]s threatened by any piece of a [`Color`].
    pub fn threatened(&self, c: Color) -> Bitboard {
        self.board
            .iter()
            .filter(|(_, piece)| piece.color() == c)
            .fold(Bitboard::empty(), |threats, (p, piece)| {
                threats | piece.threatened_positions(p, self)
            })
    }

    /// The [`Position`] of the king of a [`Color`].
    ///
    /// # Panics
    ///
    /// Panics if the king is not on the board.
    pub fn king(&self, c: Color) -> Position {
        match self.board.king(c) {
            Some(p) => p,
            None => panic!("the {c} king is not on the board"),
        }
    }

    /// The [`State`] of the side to move.
    pub fn state(&self) -> State {
        arbiter::state(self.turn, self)
    }

    /// Plays the legal move designated by the [`Coordinates`].
    ///
    /// A promotion given along with the coordinates is finalized right away.
    pub fn play(&self, c: Coordinates) -> Result<Game, IllegalMove> {
        let moves = self.current_moves();
        let Some(&m) = moves.iter().find(|m| c.matches(m)) else {
            return Err(IllegalMove(c));
        };

        match (m.kind(), c.2) {
            (MoveKind::NeedsPromotion, Some(p)) => Ok(self.performing(m.promoted(p))),
            _ => Ok(self.performing(m)),
        }
    }
}

impl fmt::Display for Game {
    /// Formats the piece placement and side to move fields of FEN.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.turn {
            Color::White => write!(f, "{} w", self.board),
            Color::Black => write!(f, "{} b", self.board),
        }
    }
}

impl Arbitrary for Game {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let promotions = sample::select(Promotion::ALL.to_vec());
        (0..48usize, any::<Selector>(), promotions)
            .prop_map(|(plies, selector, promotion)| {
                let mut game = Game::standard();
                for _ in 0..plies {
                    match selector.try_select(game.current_moves()) {
                        Some(m) if m.kind() == MoveKind::NeedsPromotion => {
                            game = game.performing(m).promoting(promotion)
                        }
                        Some(m) => game = game.performing(m),
                        None => break,
                    }
                }

                game
            })
            .no_shrink()
            .boxed()
    }
}
