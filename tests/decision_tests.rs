//! Decision engine integration tests against the Tab controller.

use std::time::Duration;

use tab_engine::ai::{
    DecisionEngine, GameController, StaleReason, TaskOutcome, TurnPhase, TurnStep, TurnTask,
};
use tab_engine::core::{AiConfig, Board, BoardConfig, Difficulty, Move, Piece, Player};
use tab_engine::games::tab::TabGame;

fn board_with(black: &[usize], gold: &[usize]) -> Board {
    let mut board = Board::empty(BoardConfig::default());
    for &idx in black {
        board.place(idx, Piece::new(Player::Black).moved());
    }
    for &idx in gold {
        board.place(idx, Piece::new(Player::Gold).moved());
    }
    board
}

fn black_engine(difficulty: Difficulty) -> DecisionEngine {
    DecisionEngine::new(Player::Black, AiConfig::new(difficulty).deterministic().with_seed(99))
}

// =============================================================================
// Policy Choices
// =============================================================================

#[test]
fn test_hard_prefers_capture() {
    // Black on 13 reaches 14 (a Gold piece) with a tâb; Black on 24
    // has a quiet step to 23.
    let board = board_with(&[13, 24], &[14]).with_piece(0, Piece::new(Player::Gold));
    let mut game = TabGame::from_board(board, Player::Black, 1);
    game.set_roll(1);

    let mut engine = black_engine(Difficulty::Hard);
    assert_eq!(game.legal_moves(), vec![Move::capture(13, 14), Move::new(24, 23)]);
    assert_eq!(
        engine.take_turn(&mut game),
        TurnStep::MoveScheduled(Move::capture(13, 14))
    );
}

#[test]
fn test_hard_prefers_capture_when_listed_last() {
    // Same position with the capture enumerated second.
    let board = board_with(&[13, 6], &[14]).with_piece(0, Piece::new(Player::Gold));
    let mut game = TabGame::from_board(board, Player::Black, 1);
    game.set_roll(1);

    let moves = game.legal_moves();
    assert_eq!(moves.last(), Some(&Move::capture(13, 14)));

    let mut engine = black_engine(Difficulty::Hard);
    assert_eq!(
        engine.take_turn(&mut game),
        TurnStep::MoveScheduled(Move::capture(13, 14))
    );
}

fn adaptive_mode(black: &[usize], gold: &[usize]) -> (Difficulty, String) {
    let mut game = TabGame::from_board(board_with(black, gold), Player::Black, 1);
    game.set_roll(1);
    let mut engine = black_engine(Difficulty::Adaptive);
    assert!(matches!(engine.take_turn(&mut game), TurnStep::MoveScheduled(_)));
    let text = engine.sink().texts().next().unwrap_or_default().to_string();
    (engine.history()[0].mode, text)
}

#[test]
fn test_adaptive_hard_when_behind() {
    // 1 against 5: advantage -4.
    let (mode, text) = adaptive_mode(&[13], &[9, 10, 11, 19, 20]);
    assert_eq!(mode, Difficulty::Hard);
    assert_eq!(text, "AI switched to HARD mode.");

    // 1 against 4: advantage -3.
    let (mode, _) = adaptive_mode(&[13], &[9, 10, 11, 19]);
    assert_eq!(mode, Difficulty::Hard);
}

#[test]
fn test_adaptive_medium_when_close() {
    for gold in [&[9, 10, 11, 12][..], &[9, 10, 11], &[9, 10], &[9]] {
        let black = [13, 15];
        let (mode, text) = adaptive_mode(&black, gold);
        assert_eq!(mode, Difficulty::Medium, "advantage {}", 2 - gold.len() as i64);
        assert_eq!(text, "AI switched to MEDIUM mode.");
    }
}

#[test]
fn test_adaptive_easy_when_ahead() {
    let (mode, text) = adaptive_mode(&[13, 15, 16, 22, 23], &[9]);
    assert_eq!(mode, Difficulty::Easy);
    assert_eq!(text, "AI switched to EASY mode.");
}

// =============================================================================
// Turn Loop
// =============================================================================

#[test]
fn test_full_turn_through_controller() {
    let mut game = TabGame::new(BoardConfig::default(), 4).unwrap();
    let mut engine = DecisionEngine::new(Player::Gold, AiConfig::new(Difficulty::Medium).with_seed(4));

    assert_eq!(engine.take_turn(&mut game), TurnStep::RollRequested);
    assert!(game.current_roll().is_some());
    assert_eq!(engine.take_turn(&mut game), TurnStep::Pending);

    let outcomes = engine.advance(&mut game, Duration::from_millis(1000));
    assert_eq!(outcomes.len(), 1);
    match outcomes[0].clone() {
        TaskOutcome::Resumed(TurnStep::MoveScheduled(mv)) => {
            // Only a tâb frees a piece, and only column 0 has room.
            assert_eq!(mv, Move::new(0, 9));
            assert_eq!(engine.phase(), TurnPhase::MovePending(mv));
            assert_eq!(engine.run_next(&mut game), Some(TaskOutcome::Applied(mv)));
            assert!(game.board().get(9).is_some());
        }
        TaskOutcome::Resumed(TurnStep::SkipScheduled) => {
            assert_eq!(engine.run_next(&mut game), Some(TaskOutcome::Skipped));
            assert_eq!(game.current_roll(), None);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(engine.phase(), TurnPhase::Idle);
}

#[test]
fn test_not_our_turn_does_nothing() {
    let mut game = TabGame::new(BoardConfig::default(), 4).unwrap();
    let mut engine = black_engine(Difficulty::Easy);
    assert_eq!(engine.take_turn(&mut game), TurnStep::NotOurTurn);
    assert_eq!(game.current_roll(), None);
    assert!(!engine.is_pending());
}

#[test]
fn test_stale_move_after_controller_acts() {
    let board = board_with(&[13], &[0]);
    let mut game = TabGame::from_board(board, Player::Black, 1);
    game.set_roll(2);

    let mut engine = black_engine(Difficulty::Medium);
    let TurnStep::MoveScheduled(mv) = engine.take_turn(&mut game) else {
        panic!("expected a scheduled move");
    };
    assert_eq!(mv, Move::new(13, 15));

    // The controller plays the move itself during the delay.
    game.apply_move(mv.from, mv.to).unwrap();
    assert_eq!(game.current_player(), Player::Gold);

    assert_eq!(
        engine.run_next(&mut game),
        Some(TaskOutcome::Discarded {
            task: TurnTask::ExecuteMove(mv),
            reason: StaleReason::TurnChanged,
        })
    );
    assert_eq!(game.history().len(), 1);
    assert_eq!(engine.stats().stale_discarded, 1);
}

#[test]
fn test_stale_move_when_roll_replaced() {
    let board = board_with(&[13], &[0]);
    let mut game = TabGame::from_board(board, Player::Black, 1);
    game.set_roll(2);

    let mut engine = black_engine(Difficulty::Medium);
    let TurnStep::MoveScheduled(mv) = engine.take_turn(&mut game) else {
        panic!("expected a scheduled move");
    };

    // A different roll makes the chosen destination unreachable.
    game.set_roll(3);
    let Some(TaskOutcome::Discarded { reason, .. }) = engine.run_next(&mut game) else {
        panic!("expected a discard");
    };
    assert_eq!(reason, StaleReason::NoLongerLegal);
    assert_eq!(game.board().get(mv.from).map(|p| p.owner), Some(Player::Black));
}

#[test]
fn test_same_seed_same_choices() {
    let run = || {
        let mut game = TabGame::new(BoardConfig::default(), 12).unwrap();
        let mut engine = DecisionEngine::new(Player::Gold, AiConfig::new(Difficulty::Easy).with_seed(5));
        let mut outcomes = Vec::new();
        for _ in 0..20 {
            if game.current_player() != Player::Gold {
                game.set_roll(3);
                game.skip_turn();
            }
            engine.take_turn(&mut game);
            outcomes.extend(engine.run_next(&mut game));
        }
        outcomes
    };
    assert_eq!(run(), run());
}
