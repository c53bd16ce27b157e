//! Dice, replay and scoreboard behaviour shared by all events.

use decathlon_dice::games::discus::DiscusBuilder;
use decathlon_dice::games::four_hundred::FourHundredMetersBuilder;
use decathlon_dice::games::shot_put::ShotPutBuilder;
use decathlon_dice::{
    Action, ActionRecord, ChartStrategy, Die, FaceSet, Freeze, FreezeableDie, GameKind, GameRng, Roll,
    Scoreboard, TurnEngine,
};
use proptest::prelude::*;

#[test]
fn test_faces_are_uniform() {
    let mut rng = GameRng::new(2024);
    let mut die = Die::new(FaceSet::STANDARD);
    let mut counts = [0u32; 6];

    for _ in 0..60_000 {
        let value = die.roll(&mut rng);
        counts[(value - 1) as usize] += 1;
    }

    for count in counts {
        assert!((9_400..=10_600).contains(&count), "face count {} out of range", count);
    }
}

#[test]
fn test_frozen_die_ignores_rolls() {
    let mut rng = GameRng::new(5);
    let mut die = FreezeableDie::new(FaceSet::STANDARD);
    let value = die.roll(&mut rng);
    die.toggle_frozen();

    for _ in 0..20 {
        assert_eq!(die.roll(&mut rng), value);
    }
    die.reset();
    assert!(!die.is_frozen());
    assert_eq!(die.value(), 0);
}

#[test]
fn test_replay_reproduces_discus_game() {
    let (rules, state) = DiscusBuilder::new().player("Mac").build(31).unwrap();
    let mut game = TurnEngine::new(rules, state);
    while !game.is_finished() {
        game.roll().unwrap();
        if let Some(position) = game.state().freezable.iter().position(|&f| f) {
            game.toggle_freeze(position).unwrap();
            game.roll().unwrap();
        }
        game.stop().unwrap();
    }

    let (rules, fresh) = DiscusBuilder::new().player("Mac").build(0).unwrap();
    let replayed = TurnEngine::replay(rules, fresh, game.log()).unwrap();

    assert_eq!(replayed.state().history, game.state().history);
    assert_eq!(replayed.state().score, game.state().score);
    assert_eq!(replayed.log(), game.log());
}

#[test]
fn test_replay_reproduces_computer_runner() {
    let (rules, state) = FourHundredMetersBuilder::new().player("Computer").build(8).unwrap();
    let mut game = TurnEngine::new(rules, state).with_policy(ChartStrategy);
    let score = game.play_out().unwrap();

    let (rules, fresh) = FourHundredMetersBuilder::new().player("Computer").build(9).unwrap();
    let replayed = TurnEngine::replay(rules, fresh, game.log()).unwrap();

    assert_eq!(replayed.state().score, score);
    assert_eq!(replayed.state().rerolls, game.state().rerolls);
    assert!(replayed.is_finished());
}

#[test]
fn test_log_serializes() {
    let (rules, state) = ShotPutBuilder::new().player("Ulf").build(12).unwrap();
    let mut game = TurnEngine::new(rules, state);
    game.roll().unwrap();
    game.stop().unwrap();

    let json = serde_json::to_string(game.log()).unwrap();
    let log: Vec<ActionRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(log.as_slice(), game.log());
    assert_eq!(log[0].action, Action::Roll);
    assert_eq!(log[0].faces.len(), 1);
    assert_eq!(log[1].attempt, 1);
}

#[test]
fn test_scoreboard_snapshot() {
    let (rules, state) = FourHundredMetersBuilder::new().player("Jackie").build(3).unwrap();
    let mut game = TurnEngine::new(rules, state);
    game.load_faces(&[4, 6]);
    game.roll().unwrap();

    let board = game.scoreboard();
    assert_eq!(board.player, "Jackie");
    assert_eq!(board.kind, GameKind::FourHundredMeters);
    assert_eq!(board.dice.len(), 8);
    assert_eq!(board.dice[0].value, 4);
    assert_eq!(board.dice[1].value, -6);
    assert_eq!(board.dice[1].face, Some(6));
    assert_eq!(board.dice[2].face, None);
    assert_eq!(board.attempt_score, -2);
    assert_eq!(board.rerolls, 5);
    assert!(!board.finished);
    assert_eq!(board.message, "Keep or reroll (5 rerolls left)");
    assert!(board.allows(Action::Keep));
    assert!(!board.allows(Action::Stop));

    let json = serde_json::to_string(&board).unwrap();
    let back: Scoreboard = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}

#[test]
fn test_blank_player_rejected_everywhere() {
    assert!(FourHundredMetersBuilder::new().build(1).is_err());
    assert!(DiscusBuilder::new().player(" ").build(1).is_err());
    assert!(ShotPutBuilder::new().player("\t").build(1).is_err());
}

proptest! {
    /// Any seed gives a game that replays to the same result.
    #[test]
    fn prop_shot_put_replays(seed in any::<u64>(), rolls in 1usize..6) {
        let (rules, state) = ShotPutBuilder::new().player("Ulf").build(seed).unwrap();
        let mut game = TurnEngine::new(rules, state);
        while !game.is_finished() {
            for _ in 0..rolls {
                if game.validate(Action::Roll).is_err() {
                    break;
                }
                game.roll().unwrap();
            }
            game.stop().unwrap();
        }

        let (rules, fresh) = ShotPutBuilder::new().player("Ulf").build(seed.wrapping_add(1)).unwrap();
        let replayed = TurnEngine::replay(rules, fresh, game.log()).unwrap();
        prop_assert_eq!(&replayed.state().history, &game.state().history);
        prop_assert_eq!(replayed.state().score, game.state().score);
    }
}
