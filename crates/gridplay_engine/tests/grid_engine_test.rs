//! Tests for the grid engine lifecycle and both win policies.

use gridplay_engine::{
    Cell, GameStatus, GridEngine, GridErrorKind, IgnoreReason, MAX_BOARD_SIZE, Mark, MoveOutcome,
    WinPolicy,
};

const POLICIES: [WinPolicy; 2] = [WinPolicy::FullLine, WinPolicy::FixedRun];

fn engine(size: usize, policy: WinPolicy) -> GridEngine {
    GridEngine::new(size, Mark::X, policy).expect("valid size")
}

fn play(engine: &mut GridEngine, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        engine.make_move(row, col).expect("move on board");
    }
}

#[test]
fn test_fresh_board_is_empty_and_live() {
    for policy in POLICIES {
        for size in 3..=7 {
            let engine = engine(size, policy);
            assert!(engine.board().cells().iter().all(|c| *c == Cell::Empty));
            assert!(!engine.is_terminal());
            assert_eq!(engine.check_winner(), None);
            assert_eq!(engine.status(), GameStatus::InProgress);
        }
    }
}

#[test]
fn test_invalid_size_rejected() {
    for size in 0..3 {
        let err = GridEngine::new(size, Mark::X, WinPolicy::FixedRun).unwrap_err();
        assert_eq!(err.kind(), GridErrorKind::InvalidSize { size });
    }
    let size = MAX_BOARD_SIZE + 1;
    let err = GridEngine::new(size, Mark::X, WinPolicy::FullLine).unwrap_err();
    assert_eq!(err.kind(), GridErrorKind::InvalidSize { size });
}

#[test]
fn test_restart_returns_to_initial_configuration() {
    for policy in POLICIES {
        let mut game = GridEngine::new(4, Mark::O, policy).unwrap();
        let initial = game.clone();
        play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2), (3, 3), (0, 3)]);
        assert!(game.is_terminal());

        game.restart();
        assert_eq!(game, initial);
        assert_eq!(game.active_mark(), Mark::O);
    }
}

#[test]
fn test_accepted_moves_alternate() {
    let mut game = engine(5, WinPolicy::FixedRun);
    let mut expected = Mark::X;
    // Includes a repeated cell which must not disturb the alternation.
    for (row, col) in [(0, 0), (2, 2), (2, 2), (4, 4), (1, 3), (0, 0), (3, 1)] {
        match game.make_move(row, col).unwrap() {
            MoveOutcome::Placed { mark } => {
                assert_eq!(mark, expected);
                expected = expected.opponent();
            }
            MoveOutcome::Ignored(reason) => assert_eq!(reason, IgnoreReason::Occupied),
            MoveOutcome::Won { .. } => panic!("No winner expected"),
        }
        assert_eq!(game.active_mark(), expected);
    }
}

#[test]
fn test_occupied_cell_is_noop() {
    let mut game = engine(3, WinPolicy::FullLine);
    play(&mut game, &[(1, 1)]);
    let before = game.clone();

    let outcome = game.make_move(1, 1).unwrap();
    assert_eq!(outcome, MoveOutcome::Ignored(IgnoreReason::Occupied));
    assert_eq!(game, before);
}

#[test]
fn test_move_after_game_over_is_noop() {
    let mut game = engine(3, WinPolicy::FullLine);
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(game.winner(), Some(Mark::X));
    let before = game.clone();

    let outcome = game.make_move(2, 2).unwrap();
    assert_eq!(outcome, MoveOutcome::Ignored(IgnoreReason::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_out_of_range_fails() {
    let mut game = engine(3, WinPolicy::FullLine);
    let err = game.make_move(3, 1).unwrap_err();
    assert_eq!(
        err.kind(),
        GridErrorKind::IndexOutOfRange { row: 3, col: 1, size: 3 }
    );
    assert_eq!(game.active_mark(), Mark::X);
}

#[test]
fn test_full_line_diagonal_win() {
    let mut game = engine(3, WinPolicy::FullLine);
    // X on the main diagonal, O elsewhere.
    play(&mut game, &[(0, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(game.make_move(2, 2).unwrap(), MoveOutcome::Won { mark: Mark::X });
    assert_eq!(game.check_winner(), Some(Mark::X));
}

#[test]
fn test_full_line_filled_board_without_winner() {
    let mut game = engine(3, WinPolicy::FullLine);
    // X O X / X O O / O X X
    play(
        &mut game,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );
    assert!(game.board().is_full());
    assert_eq!(game.check_winner(), None);
    assert!(!game.is_terminal());
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn test_fixed_run_wins_with_partial_row() {
    let mut game = engine(5, WinPolicy::FixedRun);
    play(&mut game, &[(0, 0), (4, 0), (0, 1), (4, 1), (0, 2), (4, 4)]);
    assert_eq!(game.make_move(0, 3).unwrap(), MoveOutcome::Won { mark: Mark::X });
    assert_eq!(game.board().get(0, 4), Some(Cell::Empty));
}

#[test]
fn test_same_position_differs_by_policy() {
    let moves = [(0, 0), (4, 0), (0, 1), (4, 1), (0, 2), (4, 4), (0, 3)];

    let mut full = engine(5, WinPolicy::FullLine);
    play(&mut full, &moves);
    assert_eq!(full.check_winner(), None);

    let mut run = engine(5, WinPolicy::FixedRun);
    play(&mut run, &moves);
    assert_eq!(run.check_winner(), Some(Mark::X));
}

#[test]
fn test_policy_deserializes_from_snake_case() {
    let policy: WinPolicy = serde_json::from_str("\"fixed_run\"").unwrap();
    assert_eq!(policy, WinPolicy::FixedRun);
    let mark: Mark = serde_json::from_str("\"O\"").unwrap();
    assert_eq!(mark, Mark::O);
}
