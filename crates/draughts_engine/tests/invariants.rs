//! Board invariants over many random games
//!
//! Plays seeded bot-vs-bot games and checks after every ply:
//! - the two sides never share a square
//! - every crown sits on an occupied square of the same side
//! - forced-capture detection agrees with per-square capture checks
//! - the save format round-trips the position

use draughts_engine::bot::{candidates, play_turn};
use draughts_engine::move_gen::{captures_from, forced_capture_exists};
use draughts_engine::persist::{decode, encode};
use draughts_engine::{Game, Side};
use rand::rngs::StdRng;
use rand::SeedableRng;

const MAX_TURNS: usize = 300;

fn check_invariants(game: &Game) {
    let board = game.board();

    assert_eq!(
        board.occupancy(Side::First) & board.occupancy(Side::Second),
        0,
        "sides overlap"
    );
    for side in [Side::First, Side::Second] {
        assert_eq!(
            board.crowned(side) & !board.occupancy(side),
            0,
            "{} has a crown on an empty square",
            side
        );

        let any = board.squares_of(side).any(|sq| captures_from(board, sq));
        assert_eq!(forced_capture_exists(board, side), any);
    }

    let (decoded, turn) = decode(&encode(game)).expect("encoded game must decode");
    assert_eq!(&decoded, board);
    assert_eq!(turn, game.turn());
}

/// Play one game, returning the sequence of packed positions
fn play_game(seed: u64) -> Vec<(u64, u64)> {
    let mut game = Game::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut history = vec![game.board().raw()];

    for _ in 0..MAX_TURNS {
        if game.is_game_over() {
            break;
        }
        let mover = game.turn();
        let plies = play_turn(&mut game, &mut rng);
        assert!(!plies.is_empty(), "game not over but {} could not move", mover);

        for ply in &plies {
            assert_eq!(ply.side, mover);
        }
        // The turn always passes once the bot is done
        assert_eq!(game.chain_anchor(), None);
        assert_eq!(game.turn(), mover.opponent());

        check_invariants(&game);
        history.push(game.board().raw());
    }
    history
}

#[test]
fn test_invariants_hold_in_random_games() {
    for seed in 0..40 {
        play_game(seed);
    }
}

#[test]
fn test_same_seed_replays_same_game() {
    for seed in [3, 17, 99] {
        assert_eq!(play_game(seed), play_game(seed));
    }
}

#[test]
fn test_replaying_moves_is_deterministic() {
    let mut game = Game::new();
    let mut rng = StdRng::seed_from_u64(11);
    let mut moves = Vec::new();
    for _ in 0..30 {
        if game.is_game_over() {
            break;
        }
        for ply in play_turn(&mut game, &mut rng) {
            moves.push(ply.mv);
        }
    }

    let mut replay = Game::new();
    for mv in &moves {
        replay.try_move(mv.from, mv.to).expect("bot moves are legal");
    }
    assert_eq!(replay, game);
}

#[test]
fn test_bot_candidates_are_legal_for_humans() {
    let mut game = Game::new();
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..60 {
        if game.is_game_over() {
            break;
        }
        let mut sorted_bot = candidates(&game);
        let mut sorted_rules = game.legal_moves();
        sorted_bot.sort_by_key(|m| (m.from, m.to));
        sorted_rules.sort_by_key(|m| (m.from, m.to));
        assert_eq!(sorted_bot, sorted_rules);

        for mv in &sorted_rules {
            let mut probe = game.clone();
            assert!(probe.try_move(mv.from, mv.to).is_ok());
        }
        play_turn(&mut game, &mut rng);
    }
}
