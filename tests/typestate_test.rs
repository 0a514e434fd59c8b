//! Tests for the typestate game lifecycle: turn sequencing, terminal
//! transitions, and rejection without state change.

use tictactoe_minimax::{
    GameResult, GameSetup, Move, MoveError, Outcome, Player, Position,
};

/// Replays a move sequence from a fresh game.
fn replay(first: Player, positions: &[Position]) -> Result<GameResult, MoveError> {
    let mut game = GameSetup::new().start(first);
    let mut player = first;

    for (i, &pos) in positions.iter().enumerate() {
        match game.make_move(Move::new(player, pos))? {
            GameResult::InProgress(next) => game = next,
            GameResult::Finished(done) => {
                assert_eq!(i, positions.len() - 1, "game finished early");
                return Ok(GameResult::Finished(done));
            }
        }
        player = player.opponent();
    }

    Ok(GameResult::InProgress(game))
}

#[test]
fn test_lifecycle_alternates_turns() {
    let game = GameSetup::new().start(Player::Human);
    assert_eq!(game.to_move(), Player::Human);

    let result = game
        .make_move(Move::new(Player::Human, Position::Center))
        .expect("valid move");

    match result {
        GameResult::InProgress(game) => assert_eq!(game.to_move(), Player::Computer),
        GameResult::Finished(_) => panic!("game shouldn't finish after one move"),
    }
}

#[test]
fn test_computer_can_move_first() {
    let game = GameSetup::new().start(Player::Computer);
    assert_eq!(game.to_move(), Player::Computer);
}

#[test]
fn test_occupied_square_rejected() {
    let game = GameSetup::new().start(Player::Human);

    let game = match game
        .make_move(Move::new(Player::Human, Position::Center))
        .expect("valid move")
    {
        GameResult::InProgress(g) => g,
        GameResult::Finished(_) => panic!("unexpected finish"),
    };

    let result = game.make_move(Move::new(Player::Computer, Position::Center));
    assert!(matches!(result, Err(MoveError::SquareOccupied(_))));
}

#[test]
fn test_wrong_player_rejected() {
    let game = GameSetup::new().start(Player::Human);

    let result = game.make_move(Move::new(Player::Computer, Position::Center));
    assert!(matches!(
        result,
        Err(MoveError::WrongPlayer(Player::Computer))
    ));
}

#[test]
fn test_rejection_leaves_state_unchanged() {
    let game = GameSetup::new().start(Player::Human);
    let board_before = game.board().clone();

    let result = game
        .clone()
        .make_move(Move::new(Player::Computer, Position::Center));
    assert!(result.is_err());

    // The retained game is untouched and still accepts the right player.
    assert_eq!(game.to_move(), Player::Human);
    assert_eq!(game.board(), &board_before);
    assert!(
        game.make_move(Move::new(Player::Human, Position::Center))
            .is_ok()
    );
}

#[test]
fn test_win_finishes_game() {
    let result = replay(
        Player::Human,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight, // human wins the top row
        ],
    )
    .expect("valid replay");

    match result {
        GameResult::Finished(game) => {
            assert_eq!(game.outcome(), Outcome::Winner(Player::Human));
            assert_eq!(game.outcome().winner(), Some(Player::Human));
        }
        GameResult::InProgress(_) => panic!("game should be finished"),
    }
}

#[test]
fn test_draw_finishes_game() {
    let result = replay(
        Player::Human,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight, // board full, no line
        ],
    )
    .expect("valid replay");

    match result {
        GameResult::Finished(game) => {
            assert!(game.outcome().is_draw());
            assert_eq!(game.outcome().winner(), None);
        }
        GameResult::InProgress(_) => panic!("game should be finished"),
    }
}

#[test]
fn test_no_moves_after_finish() {
    // GameFinished has no make_move at all; restart is the only way out.
    let result = replay(
        Player::Computer,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight, // computer wins the top row
        ],
    )
    .expect("valid replay");

    if let GameResult::Finished(game) = result {
        assert_eq!(game.outcome(), Outcome::Winner(Player::Computer));
        let fresh = game.restart().start(Player::Human);
        assert_eq!(fresh.board().empty_cells().len(), 9);
    } else {
        panic!("game should be finished");
    }
}
