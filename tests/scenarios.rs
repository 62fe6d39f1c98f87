use lib::chess::{arbiter, Board, Color, Coordinates, Game, IllegalMove, Move, MoveKind, Piece};
use lib::chess::{Position, Promotion, Role, State};

fn replay(moves: &[&str]) -> Game {
    moves.iter().fold(Game::standard(), |g, m| {
        let c: Coordinates = m.parse().unwrap();
        g.play(c).unwrap()
    })
}

fn castles(g: &Game) -> Vec<Move> {
    g.current_moves()
        .into_iter()
        .filter(|m| m.kind() == MoveKind::Castle)
        .collect()
}

fn en_passants(g: &Game) -> Vec<Move> {
    g.current_moves()
        .into_iter()
        .filter(|m| m.kind() == MoveKind::EnPassant)
        .collect()
}

#[test]
fn white_has_twenty_opening_moves() {
    let g = Game::standard();
    assert_eq!(g.current_moves().len(), 20);
    assert_eq!(g.state(), State::None);
}

#[test]
fn fools_mate_ends_the_game() {
    let g = replay(&["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert_eq!(arbiter::state(Color::White, &g), State::Checkmate);
    assert!(g.current_moves().is_empty());
}

#[test]
fn castling_is_available_with_unmoved_pieces_and_a_clear_path() {
    let g = replay(&["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"]);
    assert_eq!(
        castles(&g),
        vec![Move::new(Position::E1, Position::G1, None, MoveKind::Castle)]
    );
}

#[test]
fn castling_is_lost_once_the_rook_moves_away_and_back() {
    let g = replay(&[
        "e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "h1g1", "a7a6", "g1h1", "a6a5",
    ]);

    assert!(castles(&g).is_empty());
}

#[test]
fn en_passant_is_available_only_right_after_the_double_push() {
    let g = replay(&["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert_eq!(
        en_passants(&g),
        vec![Move::new(
            Position::E5,
            Position::D6,
            Some(Piece(Color::Black, Role::Pawn)),
            MoveKind::EnPassant
        )]
    );

    let g = g.play("h2h3".parse().unwrap()).unwrap();
    let g = g.play("h7h6".parse().unwrap()).unwrap();
    assert!(en_passants(&g).is_empty());
}

#[test]
fn rook_sees_empty_squares_and_the_first_enemy_only() {
    let board: Board = "4k3/8/8/8/p7/8/8/R3K3".parse().unwrap();
    let g = Game::new(board, Color::White);
    let threats = Piece(Color::White, Role::Rook).threatened_positions(Position::A1, &g);

    assert!(threats.contains(Position::A2));
    assert!(threats.contains(Position::A3));
    assert!(threats.contains(Position::A4));
    assert!(!threats.contains(Position::A5));
    assert!(threats.contains(Position::D1));
    assert!(!threats.contains(Position::E1));
    assert!(!threats.contains(Position::F1));
}

#[test]
fn stalemate_is_not_checkmate() {
    let g = replay(&[
        "e2e3", "a7a5", "d1h5", "a8a6", "h5a5", "h7h5", "h2h4", "a6h6", "a5c7", "f7f6", "c7d7",
        "e8f7", "d7b7", "d8d3", "b7b8", "d3h7", "b8c8", "f7g6", "c8e6",
    ]);

    assert_eq!(g.state(), State::Stalemate);
    assert!(g.current_moves().is_empty());
}

#[test]
fn illegal_moves_are_rejected() {
    let g = replay(&["e2e4", "e7e5"]);
    let c: Coordinates = "e1e3".parse().unwrap();
    assert_eq!(g.play(c), Err(IllegalMove(c)));
}

#[test]
fn promotion_is_finalized_with_the_chosen_piece() {
    let g = replay(&[
        "h2h4", "g7g5", "h4g5", "h7h6", "g5h6", "f8g7", "h6g7", "a7a6", "g7h8n",
    ]);

    assert_eq!(g.board()[Position::H8], Some(Piece(Color::White, Role::Knight)));
    assert_eq!(g.history().last().and_then(Move::promotion), Some(Promotion::Knight));
}
