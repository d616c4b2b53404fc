//! Properties over arbitrary move sequences.

use emoji_tictactoe::{
    Board, GameEngine, GameResult, Line, Mark, MoveOutcome, Square, rules,
    invariants::{EngineInvariants, InvariantSet},
};
use proptest::prelude::*;

fn board_strategy() -> impl Strategy<Value = Board> {
    prop::array::uniform9(prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Mark::X)),
        Just(Square::Occupied(Mark::O)),
    ])
    .prop_map(Board::from_squares)
}

proptest! {
    #[test]
    fn written_cells_never_change(moves in prop::collection::vec(0usize..12, 0..40)) {
        let mut engine = GameEngine::new();
        for i in moves {
            let before = *engine.board();
            engine.apply_move(i);
            let after = engine.board();
            for (b, a) in before.squares().iter().zip(after.squares()) {
                if *b != Square::Empty {
                    prop_assert_eq!(b, a);
                }
            }
        }
    }

    #[test]
    fn accepted_moves_alternate(moves in prop::collection::vec(0usize..9, 0..40)) {
        let mut engine = GameEngine::new();
        let mut last: Option<Mark> = None;
        for i in moves {
            let turn = engine.turn();
            if let MoveOutcome::Accepted(mv) = engine.apply_move(i) {
                prop_assert_eq!(mv.mark, turn);
                if let Some(prev) = last {
                    prop_assert_eq!(mv.mark, prev.opponent());
                }
                last = Some(mv.mark);
            }
        }
    }

    #[test]
    fn ignored_moves_change_nothing(moves in prop::collection::vec(0usize..12, 0..40)) {
        let mut engine = GameEngine::new();
        for i in moves {
            let before = engine.snapshot();
            if let MoveOutcome::Ignored(_) = engine.apply_move(i) {
                prop_assert_eq!(engine.snapshot(), before);
            }
        }
    }

    #[test]
    fn terminal_results_are_final(moves in prop::collection::vec(0usize..9, 0..40)) {
        let mut engine = GameEngine::new();
        let mut finished: Option<GameResult> = None;
        for i in moves {
            let outcome = engine.apply_move(i);
            if let Some(result) = finished {
                prop_assert!(!outcome.is_accepted());
                prop_assert_eq!(engine.result(), result);
            } else if engine.result().is_terminal() {
                finished = Some(engine.result());
            }
        }
    }

    #[test]
    fn invariants_hold_for_any_sequence(moves in prop::collection::vec(0usize..12, 0..40)) {
        let mut engine = GameEngine::new();
        for i in moves {
            engine.apply_move(i);
            prop_assert!(EngineInvariants::check_all(&engine).is_ok());
        }
    }

    #[test]
    fn win_detection_symmetric_under_swap(board in board_strategy()) {
        let result = rules::evaluate(&board);
        let swapped = rules::evaluate(&board.swapped());
        match result {
            GameResult::Win { mark, line } => {
                prop_assert_eq!(swapped, GameResult::Win { mark: mark.opponent(), line });
            }
            other => prop_assert_eq!(swapped, other),
        }
    }

    #[test]
    fn reported_line_is_uniform(board in board_strategy()) {
        if let Some((mark, line)) = rules::check_winner(&board) {
            for pos in line.positions() {
                prop_assert_eq!(board.get(pos), Square::Occupied(mark));
            }
            let first = Line::ALL.iter().position(|l| *l == line).unwrap();
            for earlier in &Line::ALL[..first] {
                let [a, b, c] = earlier.positions();
                let uniform = board.get(a) != Square::Empty
                    && board.get(a) == board.get(b)
                    && board.get(a) == board.get(c);
                prop_assert!(!uniform);
            }
        }
    }
}
