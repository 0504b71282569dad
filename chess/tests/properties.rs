//! Property-based tests over positions reached by random legal play.

use chess::movegen::pseudo_legal_moves;
use chess::rules;
use chess::{Game, GameStatus, Piece, PieceKind, Position, Team};
use proptest::prelude::*;

/// Play up to `choices.len()` random legal moves from the start position,
/// stopping early if the side to move has none.
fn play_out(choices: &[usize]) -> Game {
    let mut game = Game::new();
    for &choice in choices {
        let moves = game.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[choice % moves.len()];
        game.make_move(mv).unwrap();
    }
    game
}

fn arb_game() -> impl Strategy<Value = Game> {
    proptest::collection::vec(any::<usize>(), 0..40).prop_map(|choices| play_out(&choices))
}

fn arb_position() -> impl Strategy<Value = Position> {
    (1u8..=8, 1u8..=8).prop_map(|(row, column)| Position::new(row, column).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn legal_moves_never_expose_own_king(game in arb_game()) {
        for (square, piece) in game.board().pieces() {
            for mv in game.valid_moves(square) {
                let mut after = game.board().clone();
                after.move_piece(mv, piece);
                prop_assert!(!rules::is_in_check(&after, piece.team), "{} exposes {}", mv, piece.team);
            }
        }
    }

    #[test]
    fn legal_moves_are_pseudo_legal(game in arb_game()) {
        for (square, piece) in game.board().pieces() {
            let pseudo = pseudo_legal_moves(game.board(), square, piece);
            for mv in game.valid_moves(square) {
                prop_assert!(pseudo.contains(&mv));
                prop_assert_eq!(mv.start, square);
            }
        }
    }

    #[test]
    fn side_that_just_moved_is_not_in_check(game in arb_game()) {
        prop_assert!(!game.is_in_check(game.team_turn().opponent()));
    }

    #[test]
    fn committed_moves_alternate_turns(choices in proptest::collection::vec(any::<usize>(), 1..30)) {
        let mut game = Game::new();
        for choice in choices {
            let moves = game.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mover = game.team_turn();
            let mv = moves[choice % moves.len()];
            let entry = game.make_move(mv).unwrap();
            prop_assert_eq!(entry.piece.team, mover);
            prop_assert_eq!(game.team_turn(), mover.opponent());
        }
    }

    #[test]
    fn status_agrees_with_predicates(game in arb_game()) {
        let team = game.team_turn();
        match game.status() {
            GameStatus::Checkmate { winner } => {
                prop_assert_eq!(winner, team.opponent());
                prop_assert!(game.is_in_checkmate(team));
            }
            GameStatus::Stalemate => prop_assert!(game.is_in_stalemate(team)),
            GameStatus::Check(checked) => {
                prop_assert_eq!(checked, team);
                prop_assert!(game.is_in_check(team));
                prop_assert!(!game.legal_moves().is_empty());
            }
            GameStatus::InProgress => {
                prop_assert!(!game.is_in_check(team));
                prop_assert!(!game.legal_moves().is_empty());
            }
        }
        prop_assert!(!(game.is_in_checkmate(team) && game.is_in_stalemate(team)));
    }

    #[test]
    fn rejected_moves_change_nothing(game in arb_game(), from in arb_position(), to in arb_position()) {
        let mut game = game;
        let before = game.clone();
        let mv = chess::Move::new(from, to);
        if game.make_move(mv).is_err() {
            prop_assert_eq!(game, before);
        } else {
            prop_assert_eq!(game.history().len(), before.history().len() + 1);
        }
    }

    #[test]
    fn board_copy_is_independent(game in arb_game(), square in arb_position()) {
        let original = game.board().clone();
        let before = original.piece(square);
        let mut copy = original.clone();
        copy.add_piece(square, Some(Piece::new(Team::White, PieceKind::Knight)));
        prop_assert_eq!(original.piece(square), before);
    }

    #[test]
    fn serde_round_trip_of_reached_games(game in arb_game()) {
        let json = serde_json::to_string(&game).unwrap();
        let restored: Game = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(restored, game);
    }

    #[test]
    fn fen_round_trip_of_reached_games(game in arb_game()) {
        let restored = Game::from_fen(&game.to_fen()).unwrap();
        prop_assert_eq!(restored.board(), game.board());
        prop_assert_eq!(restored.team_turn(), game.team_turn());
    }
}
