use lib::chess::{Board, Color, Game, ParseBoardError};
use test_strategy::proptest;

fn game(placement: &str, turn: Color) -> Result<Game, ParseBoardError> {
    Ok(Game::new(placement.parse::<Board>()?, turn))
}

#[cfg(not(tarpaulin))]
#[proptest(cases = 1)]
fn perft_expands_expected_number_of_nodes_from_the_initial_position() {
    // https://www.chessprogramming.org/Perft_Results#Initial_Position
    let g = Game::standard();
    assert_eq!(g.perft(1), 20);
    assert_eq!(g.perft(2), 400);
    assert_eq!(g.perft(3), 8902);
}

#[cfg(not(tarpaulin))]
#[proptest(cases = 1)]
fn perft_expands_expected_number_of_nodes_from_kiwipete() {
    // https://www.chessprogramming.org/Perft_Results#Position_2
    let g = game("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R", Color::White)?;
    assert_eq!(g.perft(1), 48);
    assert_eq!(g.perft(2), 2039);
}

#[cfg(not(tarpaulin))]
#[proptest(cases = 1)]
fn perft_expands_expected_number_of_nodes_through_en_passant_pins() {
    // https://www.chessprogramming.org/Perft_Results#Position_3
    let g = game("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8", Color::White)?;
    assert_eq!(g.perft(1), 14);
    assert_eq!(g.perft(2), 191);
    assert_eq!(g.perft(3), 2812);
}

#[cfg(not(tarpaulin))]
#[proptest(cases = 1)]
fn perft_expands_expected_number_of_nodes_through_promotions() {
    // https://www.chessprogramming.org/Perft_Results#Position_4
    let g = game("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1", Color::White)?;
    assert_eq!(g.perft(1), 6);
    assert_eq!(g.perft(2), 264);

    // https://www.chessprogramming.org/Perft_Results#Position_5
    let g = game("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R", Color::White)?;
    assert_eq!(g.perft(1), 44);
    assert_eq!(g.perft(2), 1486);
}

#[cfg(not(tarpaulin))]
#[proptest(cases = 1)]
fn perft_expands_expected_number_of_nodes_from_a_middlegame() {
    // https://www.chessprogramming.org/Perft_Results#Position_6
    let g = game("r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1", Color::White)?;
    assert_eq!(g.perft(1), 46);
    assert_eq!(g.perft(2), 2079);
}
