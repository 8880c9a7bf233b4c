//! Tests for seeded computer moves and invariants over whole random games.

use noughts::invariants::{GameInvariants, InvariantSet};
use noughts::{GameEngine, MoveError, Outcome, Side, Square, Symbols};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn engine(size: usize, seed: u64) -> GameEngine<StdRng> {
    GameEngine::with_rng(size, Symbols::default(), StdRng::seed_from_u64(seed)).expect("board")
}

/// Plays a whole game: the player picks random open squares from `picker`,
/// the computer answers after every non-final move.
fn play_out(game: &mut GameEngine<StdRng>, picker: &mut StdRng) -> Vec<usize> {
    let mut sequence = Vec::new();
    while !game.outcome().is_over() {
        let open = game.board().empty_indices();
        let index = open[picker.random_range(0..open.len())];
        let result = game.attempt_player_move(index).expect("open square on our turn");
        sequence.push(index);
        if *result.completed() {
            break;
        }
        let reply = game.computer_move().expect("computer reply");
        sequence.push(reply.index().expect("computer placed"));
    }
    sequence
}

#[test]
fn test_same_seed_same_computer_moves() {
    let mut first = engine(3, 2024);
    let mut second = engine(3, 2024);
    let a = play_out(&mut first, &mut StdRng::seed_from_u64(5));
    let b = play_out(&mut second, &mut StdRng::seed_from_u64(5));
    assert_eq!(a, b);
    assert_eq!(first.outcome(), second.outcome());
}

#[test]
fn test_random_games_hold_invariants() {
    let mut picker = StdRng::seed_from_u64(99);
    for seed in 0..200 {
        let mut game = engine(3, seed);
        let mut previous = game.board().squares().to_vec();

        while !game.outcome().is_over() {
            let open = game.board().empty_indices();
            let index = open[picker.random_range(0..open.len())];
            let result = game.attempt_player_move(index).expect("legal move");

            assert!(GameInvariants::check_all(game.state()).is_ok());
            assert_occupied_never_changes(&previous, game.board().squares());
            previous = game.board().squares().to_vec();

            if *result.completed() {
                break;
            }
            game.computer_move().expect("legal reply");
            assert!(GameInvariants::check_all(game.state()).is_ok());
            assert_occupied_never_changes(&previous, game.board().squares());
            previous = game.board().squares().to_vec();
        }

        let history = game.state().history();
        assert!(history.windows(2).all(|pair| pair[0].symbol != pair[1].symbol));
        assert_eq!(game.board().filled(), history.len());
        assert!(game.outcome().is_over());
        assert_eq!(game.computer_move(), Err(MoveError::GameOver));
    }
}

fn assert_occupied_never_changes(before: &[Square], after: &[Square]) {
    for (old, new) in before.iter().zip(after) {
        if *old != Square::Empty {
            assert_eq!(old, new);
        }
    }
}

#[test]
fn test_computer_opening_then_player() {
    let mut game = engine(3, 17);
    let opening = game.computer_move().expect("computer may open");
    let taken = opening.index().expect("computer placed");

    let open = game.board().empty_indices();
    assert_eq!(open.len(), 8);
    assert!(!open.contains(&taken));

    game.attempt_player_move(open[0]).expect("player replies");
    assert_eq!(game.state().history()[0].side(), Side::Computer);
}

#[test]
fn test_random_games_on_larger_board_finish() {
    let mut picker = StdRng::seed_from_u64(3);
    let mut game = engine(4, 8);
    let sequence = play_out(&mut game, &mut picker);
    assert!(sequence.len() <= 16);
    assert!(matches!(game.outcome(), Outcome::Won(_) | Outcome::Tie));
}

#[test]
fn test_scores_only_move_on_wins() {
    let mut picker = StdRng::seed_from_u64(1234);
    let mut game = engine(3, 4321);
    let mut expected_player = 0;
    let mut expected_computer = 0;

    for _ in 0..50 {
        game.restart();
        play_out(&mut game, &mut picker);
        if let Outcome::Won(line) = game.outcome() {
            match game.symbols().side_of(line.symbol()) {
                Some(Side::Player) => expected_player += 1,
                Some(Side::Computer) => expected_computer += 1,
                None => panic!("winning symbol belongs to nobody"),
            }
        }
    }

    assert_eq!(*game.scores().player(), expected_player);
    assert_eq!(*game.scores().computer(), expected_computer);
}
