//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use rust_cluedo::board::{Board, Location};
use rust_cluedo::core::{
    CharacterId, GameConfig, Hypothesis, PlayerId, RoomId, Suggestion, TurnAction, WeaponId,
};
use rust_cluedo::game::{GameBuilder, GameEvent, Interaction, Player, TurnContext};
use rust_cluedo::Game;

pub const RED: CharacterId = CharacterId(0);
pub const BLUE: CharacterId = CharacterId(1);
pub const GREEN: CharacterId = CharacterId(2);
pub const ROPE: WeaponId = WeaponId(0);
pub const KNIFE: WeaponId = WeaponId(1);
pub const HALL: RoomId = RoomId(0);
pub const STUDY: RoomId = RoomId(1);

/// Green with the Knife in the Study.
pub const SOLUTION: Hypothesis = Hypothesis::new(GREEN, KNIFE, STUDY);

/// Two rooms joined by a corridor.
///
/// ```text
///  h h H . .     Hall door at (2,0), Red starts at (3,0)
///  # . . . #     Blue starts at (1,2), Green at (3,2)
///  # . . . #
///  # . . . #
///  s s S . .     Study door at (2,4)
/// ```
pub fn small_config() -> GameConfig {
    GameConfig::new(
        "
        hhH..
        #...#
        #...#
        #...#
        ssS..
        ",
    )
    .with_character("Red", 'R', Location::new(3, 0))
    .with_character("Blue", 'B', Location::new(1, 2))
    .with_character("Green", 'G', Location::new(3, 2))
    .with_weapon("Rope")
    .with_weapon("Knife")
    .with_room("Hall", 'h')
    .with_room("Study", 's')
    .with_secret_passage("Hall", "Study")
}

/// Three players on the small board with a known solution.
pub fn small_game(seed: u64) -> Game {
    GameBuilder::new(small_config())
        .player_count(3)
        .solution(SOLUTION)
        .seed(seed)
        .build()
        .unwrap()
}

/// Interaction that replays queued answers and records what it was told.
#[derive(Default)]
pub struct Script {
    pub player_count: Option<usize>,
    pub characters: VecDeque<CharacterId>,
    pub actions: VecDeque<TurnAction>,
    pub suggestions: VecDeque<Option<Suggestion>>,
    pub turns: Vec<(PlayerId, u32)>,
    pub suggestion_requests: Vec<(PlayerId, RoomId)>,
    pub events: Vec<GameEvent>,
}

impl Script {
    pub fn with_actions(actions: impl IntoIterator<Item = TurnAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn action_requests(&self) -> usize {
        self.turns.len()
    }
}

impl Interaction for Script {
    fn request_player_count(&mut self, allowed: RangeInclusive<usize>) -> usize {
        self.player_count.unwrap_or(*allowed.start())
    }

    fn request_character(&mut self, available: &[CharacterId], _ordinal: usize) -> CharacterId {
        self.characters.pop_front().unwrap_or(available[0])
    }

    fn request_action(&mut self, turn: &TurnContext<'_>) -> TurnAction {
        self.turns.push((turn.player.id(), turn.roll));
        self.actions.pop_front().unwrap_or(TurnAction::Stay)
    }

    fn request_suggestion(
        &mut self,
        player: &Player,
        room: RoomId,
        _board: &Board,
    ) -> Option<Suggestion> {
        self.suggestion_requests.push((player.id(), room));
        self.suggestions.pop_front().flatten()
    }

    fn notify(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
