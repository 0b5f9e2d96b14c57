//! Tests for the game session state machine.

use strictly_search::{Controller, GameSession, GameState, RoleBinding};
use strictly_tictactoe::{MoveError, Player, Position};

fn play_all(session: &mut GameSession, moves: &[(Player, usize)]) -> GameState {
    let mut state = session.state();
    for &(player, index) in moves {
        let position = Position::from_index(index).unwrap();
        state = session.play(position, player).expect("legal move");
    }
    state
}

#[test]
fn test_new_session_is_empty_and_in_progress() {
    let session = GameSession::default();
    assert_eq!(session.state(), GameState::InProgress);
    assert_eq!(session.to_move(), Player::X);
    assert_eq!(session.board().filled(), 0);
    assert!(session.accepts_human_input());
    assert!(!session.awaits_opponent());
}

#[test]
fn test_turns_alternate_and_gate_input() {
    let mut session = GameSession::default();
    session.human_move(Position::Center).unwrap();
    assert_eq!(session.to_move(), Player::O);
    assert!(!session.accepts_human_input());
    assert!(session.awaits_opponent());

    let err = session.human_move(Position::TopLeft).unwrap_err();
    assert_eq!(err, MoveError::NotYourTurn(Player::X));
    assert_eq!(session.board().filled(), 1);
}

#[test]
fn test_occupied_square_is_rejected_without_change() {
    let mut session = GameSession::default();
    session.human_move(Position::Center).unwrap();
    let before = session.clone();
    let err = session.play(Position::Center, Player::O).unwrap_err();
    assert_eq!(err, MoveError::SquareOccupied(Position::Center));
    assert_eq!(session, before);
}

#[test]
fn test_filled_squares_match_history() {
    let mut session = GameSession::default();
    play_all(&mut session, &[(Player::X, 0), (Player::O, 4), (Player::X, 8)]);
    assert_eq!(session.history().len(), 3);
    assert_eq!(session.board().filled(), session.history().len());
}

#[test]
fn test_human_win() {
    let mut session = GameSession::default();
    let state = play_all(
        &mut session,
        &[(Player::X, 0), (Player::O, 3), (Player::X, 1), (Player::O, 4), (Player::X, 2)],
    );
    assert_eq!(state, GameState::HumanWon);
    assert!(!session.accepts_human_input());
    assert_eq!(
        session.play(Position::BottomRight, Player::O),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_opponent_win_when_human_is_o() {
    let mut session = GameSession::new(RoleBinding::new(Player::O));
    assert!(session.awaits_opponent());
    let state = play_all(
        &mut session,
        &[(Player::X, 0), (Player::O, 3), (Player::X, 1), (Player::O, 4), (Player::X, 2)],
    );
    assert_eq!(state, GameState::OpponentWon);
}

#[test]
fn test_draw() {
    let mut session = GameSession::default();
    // X O X / O X X / O X O
    let state = play_all(
        &mut session,
        &[
            (Player::X, 0),
            (Player::O, 1),
            (Player::X, 2),
            (Player::O, 3),
            (Player::X, 4),
            (Player::O, 6),
            (Player::X, 5),
            (Player::O, 8),
            (Player::X, 7),
        ],
    );
    assert_eq!(state, GameState::Draw);
}

#[test]
fn test_reset_after_terminal_state() {
    let mut session = GameSession::default();
    play_all(
        &mut session,
        &[(Player::X, 0), (Player::O, 3), (Player::X, 1), (Player::O, 4), (Player::X, 2)],
    );
    assert!(session.state().is_terminal());

    session.reset();
    assert_eq!(session.state(), GameState::InProgress);
    assert_eq!(session.board().filled(), 0);
    assert!(session.history().is_empty());
    assert_eq!(session.to_move(), Player::X);
    assert!(session.accepts_human_input());
}

#[test]
fn test_terminate_blocks_moves_until_reset() {
    let mut session = GameSession::default();
    session.terminate();
    assert_eq!(session.state(), GameState::Terminated);
    assert!(!session.accepts_human_input());
    assert_eq!(session.human_move(Position::Center), Err(MoveError::GameOver));

    session.reset();
    assert!(session.human_move(Position::Center).is_ok());
}

#[test]
fn test_role_binding() {
    let roles = RoleBinding::new(Player::O);
    assert_eq!(roles.human(), Player::O);
    assert_eq!(roles.opponent(), Player::X);
    assert_eq!(roles.controller(Player::O), Controller::Human);
    assert_eq!(roles.controller(Player::X), Controller::Search);
}

#[test]
fn test_rebind_resets_board() {
    let mut session = GameSession::default();
    session.human_move(Position::Center).unwrap();
    session.rebind(RoleBinding::new(Player::O));
    assert_eq!(session.board().filled(), 0);
    assert_eq!(session.roles().human(), Player::O);
    assert!(session.awaits_opponent());
}
