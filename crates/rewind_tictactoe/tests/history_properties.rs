//! Property tests for history navigation.

use proptest::prelude::*;
use rewind_tictactoe::invariants::{EngineInvariants, InvariantSet};
use rewind_tictactoe::rules::LINES;
use rewind_tictactoe::{Board, GameEngine, Player, Position, Square, check_winner};

/// Mark holding every square of `line`, if one does.
fn line_owner(board: &Board, line: &[Position; 3]) -> Option<Player> {
    match line.map(|pos| board.get(pos)) {
        [Square::Occupied(a), Square::Occupied(b), Square::Occupied(c)] if a == b && b == c => {
            Some(a)
        }
        _ => None,
    }
}

/// Plays `squares` in order, returning how many moves were accepted.
fn play_sequence(engine: &mut GameEngine, squares: &[usize]) -> usize {
    squares
        .iter()
        .filter(|&&i| engine.play_index(i).is_placed())
        .count()
}

proptest! {
    #[test]
    fn history_grows_by_one_per_accepted_move(squares in prop::collection::vec(0usize..9, 0..20)) {
        let mut engine = GameEngine::new();
        let accepted = play_sequence(&mut engine, &squares);
        prop_assert_eq!(engine.history().len(), accepted + 1);
        prop_assert_eq!(engine.current_move(), accepted);
    }

    #[test]
    fn jump_then_play_truncates(
        squares in prop::collection::vec(0usize..9, 1..20),
        jump in any::<prop::sample::Index>(),
        next in 0usize..9,
    ) {
        let mut engine = GameEngine::new();
        play_sequence(&mut engine, &squares);
        let k = jump.index(engine.history().len());
        engine.jump_to(k).unwrap();

        if engine.play_index(next).is_placed() {
            prop_assert_eq!(engine.history().len(), k + 2);
            prop_assert_eq!(engine.current_move(), k + 1);
        } else {
            prop_assert!(engine.current_move() == k);
        }
    }

    #[test]
    fn invariants_hold_under_any_play_and_jump(
        steps in prop::collection::vec(
            (0usize..9, any::<bool>(), any::<prop::sample::Index>()),
            0..30,
        ),
    ) {
        let mut engine = GameEngine::new();
        for (square, jump, target) in steps {
            if jump {
                let k = target.index(engine.history().len());
                engine.jump_to(k).unwrap();
            } else {
                engine.play_index(square);
            }
        }
        prop_assert!(EngineInvariants::check_all(engine.history()).is_ok());
        prop_assert!(engine.current_move() < engine.history().len());
    }

    #[test]
    fn rejected_play_leaves_engine_untouched(
        squares in prop::collection::vec(0usize..9, 0..12),
        repeat in 0usize..9,
    ) {
        let mut engine = GameEngine::new();
        play_sequence(&mut engine, &squares);
        if !engine.board().is_empty(Position::ALL[repeat]) {
            let before = engine.clone();
            prop_assert!(!engine.play_index(repeat).is_placed());
            prop_assert_eq!(engine, before);
        }
    }

    #[test]
    fn winner_agrees_with_every_complete_line(
        steps in prop::collection::vec(
            (0usize..9, any::<bool>(), any::<prop::sample::Index>()),
            0..30,
        ),
    ) {
        let mut engine = GameEngine::new();
        for (square, jump, target) in steps {
            if jump {
                let k = target.index(engine.history().len());
                engine.jump_to(k).unwrap();
            } else {
                engine.play_index(square);
            }
        }

        let board = engine.board();
        let complete: Vec<_> = LINES
            .iter()
            .filter_map(|line| line_owner(board, line).map(|owner| (line, owner)))
            .collect();

        match check_winner(board) {
            None => prop_assert!(complete.is_empty()),
            Some(win) => {
                prop_assert_eq!(line_owner(board, &win.line), Some(win.winner));
                for (line, owner) in complete {
                    // Lines completed together share the final move's square.
                    prop_assert_eq!(owner, win.winner);
                    prop_assert!(line.iter().any(|pos| win.contains(*pos)));
                }
            }
        }
    }
}
