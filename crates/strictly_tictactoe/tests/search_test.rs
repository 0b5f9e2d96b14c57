//! Tests for the four search strategies.

use strictly_tictactoe::search::depth_limited;
use strictly_tictactoe::{
    Board, ExplorationMode, FallbackPicker, FirstEmpty, Player, Position, RandomFallback,
    SearchConfig, Strategy, is_win,
};
use strum::IntoEnumIterator;

const MODES: [ExplorationMode; 2] = [ExplorationMode::Normalized, ExplorationMode::Parity];

fn config(exploration: ExplorationMode) -> SearchConfig {
    SearchConfig {
        exploration,
        ..SearchConfig::default()
    }
}

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn test_every_strategy_takes_the_immediate_win() {
    let board = board("OO.XX....");
    for mode in MODES {
        for strategy in Strategy::iter() {
            assert_eq!(
                strategy.search(&board, Player::O, &config(mode)),
                Some(Position::TopRight),
                "{strategy} in {mode} mode"
            );
        }
    }
}

#[test]
fn test_immediate_win_on_other_lines() {
    // O needs the center on the anti-diagonal.
    let board = board("X.OX..O..");
    for mode in MODES {
        for strategy in Strategy::iter() {
            assert_eq!(
                strategy.search(&board, Player::O, &config(mode)),
                Some(Position::Center),
                "{strategy} in {mode} mode"
            );
        }
    }
}

#[test]
fn test_full_board_returns_none() {
    let board = board("XOXOXXOXO");
    for mode in MODES {
        for strategy in Strategy::iter() {
            assert_eq!(strategy.search(&board, Player::O, &config(mode)), None);
            assert_eq!(strategy.search(&board, Player::X, &config(mode)), None);
        }
    }
}

#[test]
fn test_fallback_on_full_board_yields_nothing() {
    let board = board("XOXOXXOXO");
    let empties = Position::valid_moves(&board);
    assert!(empties.is_empty());
    assert_eq!(RandomFallback::seeded(1).pick(&empties), None);
}

#[test]
fn test_blocked_board_returns_none() {
    // X holds the center and two opposite corners: every line is blocked for O.
    let board = board("X...X...X");
    for mode in MODES {
        for strategy in Strategy::iter() {
            assert_eq!(
                strategy.search(&board, Player::O, &config(mode)),
                None,
                "{strategy} in {mode} mode"
            );
        }
    }
}

#[test]
fn test_fallback_never_picks_occupied_square() {
    let board = board("X...X...X");
    let empties = Position::valid_moves(&board);
    let mut picker = RandomFallback::seeded(99);
    for _ in 0..50 {
        let chosen = picker.pick(&empties).expect("empties available");
        assert!(board.is_empty(chosen));
    }
    assert_eq!(FirstEmpty.pick(&empties), Some(Position::TopCenter));
}

#[test]
fn test_depth_limit_zero_returns_none() {
    for s in ["OO.XX....", ".........", "X...X...X"] {
        let board = board(s);
        for mode in MODES {
            assert_eq!(depth_limited(&board, Player::O, 0, mode), None);
        }
    }
}

#[test]
fn test_depth_limit_one_finds_immediate_win() {
    let board = board("OO.XX....");
    for mode in MODES {
        assert_eq!(
            depth_limited(&board, Player::O, 1, mode),
            Some(Position::TopRight)
        );
    }
}

#[test]
fn test_search_does_not_touch_the_board() {
    let board = board("O...X....");
    let before = board;
    for mode in MODES {
        for strategy in Strategy::iter() {
            let _ = strategy.search(&board, Player::O, &config(mode));
        }
    }
    assert_eq!(board, before);
}

#[test]
fn test_normalized_moves_lead_toward_a_win() {
    // No immediate win: every normalized strategy must name an empty square
    // from which O can still complete a line.
    let board = board("O...X...X");
    for strategy in Strategy::iter() {
        let chosen = strategy
            .search(&board, Player::O, &config(ExplorationMode::Normalized))
            .expect("O can still win");
        assert!(board.is_empty(chosen), "{strategy} chose {chosen}");
        let after = board.with_mark(chosen, Player::O);
        assert!(
            Strategy::Bfs
                .search(&after, Player::O, &config(ExplorationMode::Normalized))
                .is_some()
                || is_win(&after, Player::O),
            "{strategy} chose a dead square {chosen}"
        );
    }
}

#[test]
fn test_normalized_breadth_first_and_uniform_cost_prefer_lowest_root_move() {
    // From an empty board X's first complete line in ascending order is the top row.
    let empty = Board::new();
    for strategy in [Strategy::Bfs, Strategy::Ucs] {
        assert_eq!(
            strategy.search(&empty, Player::X, &config(ExplorationMode::Normalized)),
            Some(Position::TopLeft),
            "{strategy}"
        );
    }
}

#[test]
fn test_normalized_depth_first_and_iterative_deepening_prefer_highest_root_move() {
    let empty = Board::new();
    for strategy in [Strategy::Dfs, Strategy::Ids] {
        assert_eq!(
            strategy.search(&empty, Player::X, &config(ExplorationMode::Normalized)),
            Some(Position::BottomRight),
            "{strategy}"
        );
    }
}

#[test]
fn test_tie_break_among_several_immediate_wins() {
    // O completes a line at 1, 6 or 8.
    let board = board("O.OXOX.X.");
    for mode in [ExplorationMode::Normalized, ExplorationMode::Parity] {
        for (strategy, expected) in [
            (Strategy::Bfs, Position::TopCenter),
            (Strategy::Ucs, Position::TopCenter),
            (Strategy::Dfs, Position::BottomRight),
            (Strategy::Ids, Position::BottomRight),
        ] {
            assert_eq!(
                strategy.search(&board, Player::O, &config(mode)),
                Some(expected),
                "{strategy} in {mode} mode"
            );
        }
    }
}

#[test]
fn test_parity_breadth_and_depth_first_only_look_one_move_ahead() {
    // No single move wins for O, and no grandchild is explored unless index 0
    // was played, which is occupied here.
    let board = board("X...O....");
    for strategy in [Strategy::Bfs, Strategy::Dfs] {
        assert_eq!(
            strategy.search(&board, Player::O, &config(ExplorationMode::Parity)),
            None
        );
    }
}

#[test]
fn test_parity_index_zero_branch_is_expanded() {
    // O at 3; playing 0 then 6 completes the left column.
    let board = board("...O.X.X.");
    assert_eq!(
        Strategy::Bfs.search(&board, Player::O, &config(ExplorationMode::Parity)),
        Some(Position::BottomLeft)
    );
}

#[test]
fn test_parity_deep_strategies_report_the_last_move() {
    // O in the center; the first two-move goal in breadth order is 0 then 8.
    let board = board("....O....");
    assert_eq!(
        Strategy::Ucs.search(&board, Player::O, &config(ExplorationMode::Parity)),
        Some(Position::BottomRight)
    );
    assert_eq!(
        Strategy::Ucs.search(&board, Player::O, &config(ExplorationMode::Normalized)),
        Some(Position::TopLeft)
    );
}

#[test]
fn test_depth_ceiling_limits_iterative_deepening() {
    // Needs two more O moves, so a ceiling of 1 finds nothing.
    let board = board("....O....");
    let shallow = SearchConfig::new(ExplorationMode::Normalized, 1);
    assert_eq!(Strategy::Ids.search(&board, Player::O, &shallow), None);
    let deep = SearchConfig::new(ExplorationMode::Normalized, 2);
    assert!(Strategy::Ids.search(&board, Player::O, &deep).is_some());
}

#[test]
fn test_strategy_names_round_trip() {
    for strategy in Strategy::iter() {
        let name = strategy.to_string();
        assert_eq!(name.len(), 3);
        assert_eq!(name.parse::<Strategy>().unwrap(), strategy);
        assert_eq!(name.to_lowercase().parse::<Strategy>().unwrap(), strategy);
        assert!(!strategy.description().is_empty());
    }
    assert_eq!("ids".parse::<Strategy>().unwrap(), Strategy::Ids);
    assert!("astar".parse::<Strategy>().is_err());
    assert_eq!(Strategy::Ids.next(), Strategy::Bfs);
}

#[test]
fn test_strategy_serde_names() {
    assert_eq!(serde_json::to_string(&Strategy::Ucs).unwrap(), "\"UCS\"");
    assert_eq!(
        serde_json::from_str::<ExplorationMode>("\"parity\"").unwrap(),
        ExplorationMode::Parity
    );
}
