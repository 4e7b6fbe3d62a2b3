//! The turn state machine.
//!
//! ## Phases
//!
//! ```text
//! PlayerTurn ──> ActionResolution ──> PostActionCheck ──> PlayerTurn (next seat)
//!      │                 │
//!      └──> GameOver <───┘
//! ```
//!
//! `PlayerTurn` skips eliminated seats and ends the game when only one
//! player is left. Otherwise it rolls the dice, works out where the player
//! can go and asks for an action. `ActionResolution` applies the action; a
//! correct accusation ends the game and a wrong one eliminates the player.
//! `PostActionCheck` lets a player who is still in the game and standing in
//! a room make a suggestion.
//!
//! `Game::step` advances exactly one phase; `Game::run` steps until the
//! game is over.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::event::{GameEvent, WinReason};
use super::interaction::{Interaction, TurnContext};
use super::player::Player;
use crate::board::Board;
use crate::cards::Deck;
use crate::core::{
    CharacterId, GameConfig, GameRng, GameRngState, Hypothesis, PlayerId, PlayerMap, Refutation,
    RoomId, Suggestion, SuggestionRecord, TokenId, TurnAction,
};
use crate::error::{SetupError, SetupResult};

/// Where the turn cycle currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// About to start this seat's turn.
    PlayerTurn(PlayerId),
    /// An action was chosen and is about to be applied.
    ActionResolution {
        /// Acting player.
        player: PlayerId,
        /// Dice total for the turn.
        roll: u32,
        /// The chosen action.
        action: TurnAction,
    },
    /// The action is done; a suggestion may follow.
    PostActionCheck(PlayerId),
    /// Terminal.
    GameOver(GameOutcome),
}

impl TurnPhase {
    /// Check whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, TurnPhase::GameOver(_))
    }
}

/// Final result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// The winner.
    pub winner: PlayerId,
    /// How they won.
    pub reason: WinReason,
    /// The hidden solution.
    pub solution: Hypothesis,
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    deck: Deck,
    players: PlayerMap<Player>,
    rng: GameRng,
    phase: TurnPhase,
    turn: u32,
    history: im::Vector<SuggestionRecord>,
}

impl Game {
    /// Build a game, asking `ui` for the player count and each player's
    /// character.
    pub fn setup(config: &GameConfig, ui: &mut impl Interaction) -> SetupResult<Self> {
        let mut rng = GameRng::new(config.seed);
        let board = Board::new(config, &mut rng)?;

        let allowed = config.player_range();
        let count = ui.request_player_count(allowed.clone());
        if !allowed.contains(&count) {
            return Err(SetupError::PlayerCount {
                requested: count,
                min: *allowed.start(),
                max: *allowed.end(),
            });
        }

        let mut available: Vec<CharacterId> = (0..config.characters.len())
            .map(|i| CharacterId(i as u8))
            .collect();
        let mut chosen = Vec::with_capacity(count);
        for ordinal in 1..=count {
            let pick = ui.request_character(&available, ordinal);
            let Some(slot) = available.iter().position(|c| *c == pick) else {
                let name = config
                    .characters
                    .get(pick.index())
                    .map_or_else(|| pick.to_string(), |c| c.name.clone());
                return Err(SetupError::CharacterUnavailable { name });
            };
            chosen.push(available.remove(slot));
        }

        let deck = Deck::new(
            config.characters.len(),
            config.weapons.len(),
            config.rooms.len(),
            &mut rng,
        );
        Ok(Self::assemble(board, deck, &chosen, rng))
    }

    /// Deal hands and seat players. `characters[i]` belongs to seat `i`.
    pub(crate) fn assemble(
        board: Board,
        deck: Deck,
        characters: &[CharacterId],
        mut rng: GameRng,
    ) -> Self {
        let hands = deck.deal(characters.len(), &mut rng);
        let players = PlayerMap::new(characters.len(), |seat| {
            Player::new(
                seat,
                characters[seat.index()],
                hands[seat].iter().copied(),
                deck.cards(),
            )
        });

        info!(
            players = characters.len(),
            seed = rng.seed(),
            "game set up"
        );

        Self {
            board,
            deck,
            players,
            rng,
            phase: TurnPhase::PlayerTurn(PlayerId(0)),
            turn: 0,
            history: im::Vector::new(),
        }
    }

    // === Queries ===

    /// Read-only board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All players by seat.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// One player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Players not yet eliminated.
    #[must_use]
    pub fn remaining_players(&self) -> usize {
        self.players.values().filter(|p| !p.is_eliminated()).count()
    }

    /// Full card universe and the hidden solution.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The hidden solution.
    #[must_use]
    pub fn solution(&self) -> &Hypothesis {
        self.deck.solution()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Turns started so far.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn
    }

    /// The outcome, once the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            TurnPhase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Every resolved suggestion, oldest first.
    #[must_use]
    pub fn history(&self) -> &im::Vector<SuggestionRecord> {
        &self.history
    }

    /// RNG position, for reproducing a game.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Turn cycle ===

    /// Advance one phase and return the new one.
    pub fn step(&mut self, ui: &mut impl Interaction) -> TurnPhase {
        self.phase = match self.phase {
            TurnPhase::PlayerTurn(player) => self.begin_turn(player, ui),
            TurnPhase::ActionResolution {
                player,
                roll,
                action,
            } => self.resolve_action(player, roll, action, ui),
            TurnPhase::PostActionCheck(player) => {
                self.offer_suggestion(player, ui);
                TurnPhase::PlayerTurn(player.next(self.player_count()))
            }
            over @ TurnPhase::GameOver(_) => over,
        };
        self.phase
    }

    /// Step until the game is over.
    pub fn run(&mut self, ui: &mut impl Interaction) -> GameOutcome {
        loop {
            if let TurnPhase::GameOver(outcome) = self.step(ui) {
                return outcome;
            }
        }
    }

    fn begin_turn(&mut self, player: PlayerId, ui: &mut impl Interaction) -> TurnPhase {
        if self.remaining_players() < 2 {
            let winner = self
                .players
                .values()
                .find(|p| !p.is_eliminated())
                .map_or(player, Player::id);
            return self.finish(winner, WinReason::LastPlayerStanding, ui);
        }
        if self.players[player].is_eliminated() {
            return TurnPhase::PlayerTurn(player.next(self.player_count()));
        }

        self.turn += 1;
        let roll = self.rng.roll_dice();
        debug!(turn = self.turn, %player, roll, "turn started");
        ui.notify(&GameEvent::TurnStarted { player, roll });

        let current = &self.players[player];
        let room = self.board.room_of(current.character());
        let reachable = self.board.reachable_tiles(current.character(), roll);
        let context = TurnContext {
            player: current,
            roll,
            room,
            secret_passage: room.and_then(|r| self.board.secret_passage(r)),
            reachable: &reachable,
            board: &self.board,
        };
        let action = ui.request_action(&context);

        TurnPhase::ActionResolution {
            player,
            roll,
            action,
        }
    }

    fn resolve_action(
        &mut self,
        player: PlayerId,
        roll: u32,
        action: TurnAction,
        ui: &mut impl Interaction,
    ) -> TurnPhase {
        let character = self.players[player].character();
        match action {
            TurnAction::Move(destination) => {
                let within_roll = self
                    .board
                    .path_length(character, destination)
                    .is_some_and(|steps| steps <= roll);
                if within_roll && self.board.move_character(character, destination) {
                    ui.notify(&GameEvent::BoardUpdated);
                } else {
                    debug!(%player, %destination, roll, "move ignored");
                }
            }
            TurnAction::SecretPassage => {
                let target = self
                    .board
                    .room_of(character)
                    .and_then(|room| self.board.secret_passage(room));
                match target {
                    Some(room) => {
                        self.board.move_token_to_room(character, room);
                        ui.notify(&GameEvent::TokenMovedToRoom {
                            token: TokenId::Character(character),
                            room,
                        });
                        ui.notify(&GameEvent::BoardUpdated);
                    }
                    None => debug!(%player, "no secret passage here"),
                }
            }
            TurnAction::Accuse(accusation) => {
                if self.deck.accusation_matches(&accusation) {
                    return self.finish(player, WinReason::CorrectAccusation, ui);
                }
                self.players[player].eliminate();
                info!(%player, "wrong accusation, player eliminated");
                ui.notify(&GameEvent::PlayerEliminated { player, accusation });
            }
            TurnAction::Stay => {}
        }
        TurnPhase::PostActionCheck(player)
    }

    fn offer_suggestion(&mut self, player: PlayerId, ui: &mut impl Interaction) {
        let current = &self.players[player];
        if current.is_eliminated() {
            return;
        }
        let Some(room) = self.board.room_of(current.character()) else {
            return;
        };
        if let Some(suggestion) = ui.request_suggestion(current, room, &self.board) {
            self.resolve_suggestion(player, room, suggestion, ui);
        }
    }

    /// Resolve a suggestion made by `suggester` in `room`.
    ///
    /// The named character and weapon are moved into the room. Then each
    /// other player, clockwise from the suggester, is checked in turn; the
    /// first one holding a matching card shows one of them, chosen at random
    /// when they hold several. The shown card is struck off the suggester's
    /// unrefuted set. The result is also appended to the history.
    pub fn resolve_suggestion(
        &mut self,
        suggester: PlayerId,
        room: RoomId,
        suggestion: Suggestion,
        ui: &mut impl Interaction,
    ) -> Refutation {
        for token in [
            TokenId::Character(suggestion.character),
            TokenId::Weapon(suggestion.weapon),
        ] {
            self.board.move_token_to_room(token, room);
            ui.notify(&GameEvent::TokenMovedToRoom { token, room });
        }
        ui.notify(&GameEvent::BoardUpdated);

        let claim = suggestion.in_room(room);
        ui.notify(&GameEvent::SuggestionMade { suggester, claim });

        let mut refutation = Refutation::Unrefuted;
        for other in suggester.others_in_order(self.player_count()) {
            let matches = self.players[other].matching_cards(&claim);
            if let Some(&card) = self.rng.choose(matches.as_slice()) {
                refutation = Refutation::Refuted { by: other, card };
                break;
            }
        }

        match refutation {
            Refutation::Refuted { by, card } => {
                self.players[suggester].refute(card);
                debug!(%suggester, refuter = %by, "suggestion refuted");
                ui.notify(&GameEvent::SuggestionRefuted {
                    suggester,
                    refuter: by,
                    card,
                });
            }
            Refutation::Unrefuted => {
                debug!(%suggester, "suggestion unrefuted");
                ui.notify(&GameEvent::SuggestionUnrefuted { suggester, claim });
            }
        }

        self.history.push_back(SuggestionRecord {
            turn: self.turn,
            suggester,
            claim,
            refutation,
        });
        refutation
    }

    fn finish(
        &mut self,
        winner: PlayerId,
        reason: WinReason,
        ui: &mut impl Interaction,
    ) -> TurnPhase {
        let solution = *self.deck.solution();
        info!(%winner, ?reason, turns = self.turn, "game over");
        ui.notify(&GameEvent::GameOver {
            winner,
            reason,
            solution,
        });
        TurnPhase::GameOver(GameOutcome {
            winner,
            reason,
            solution,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::ops::RangeInclusive;

    use super::*;
    use crate::board::{Location, Position};
    use crate::core::WeaponId;
    use crate::game::GameBuilder;

    /// Two rooms joined by a corridor, three suspects, two weapons.
    fn small_config() -> GameConfig {
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

    const SOLUTION: Hypothesis = Hypothesis::new(CharacterId(2), WeaponId(1), RoomId(1));
    const WRONG: Hypothesis = Hypothesis::new(CharacterId(0), WeaponId(1), RoomId(1));

    fn small_game() -> Game {
        GameBuilder::new(small_config())
            .player_count(3)
            .solution(SOLUTION)
            .seed(11)
            .build()
            .unwrap()
    }

    #[derive(Default)]
    struct Script {
        actions: VecDeque<TurnAction>,
        turns: Vec<PlayerId>,
        events: Vec<GameEvent>,
    }

    impl Script {
        fn new(actions: impl IntoIterator<Item = TurnAction>) -> Self {
            Self {
                actions: actions.into_iter().collect(),
                ..Self::default()
            }
        }
    }

    impl Interaction for Script {
        fn request_player_count(&mut self, allowed: RangeInclusive<usize>) -> usize {
            *allowed.start()
        }

        fn request_character(&mut self, available: &[CharacterId], _ordinal: usize) -> CharacterId {
            available[0]
        }

        fn request_action(&mut self, turn: &TurnContext<'_>) -> TurnAction {
            self.turns.push(turn.player.id());
            self.actions.pop_front().unwrap_or(TurnAction::Stay)
        }

        fn request_suggestion(
            &mut self,
            _player: &Player,
            _room: RoomId,
            _board: &Board,
        ) -> Option<Suggestion> {
            None
        }

        fn notify(&mut self, event: &GameEvent) {
            self.events.push(event.clone());
        }
    }

    #[test]
    fn test_phase_sequence() {
        let mut game = small_game();
        let mut ui = Script::default();

        assert_eq!(game.phase(), TurnPhase::PlayerTurn(PlayerId(0)));
        assert!(matches!(
            game.step(&mut ui),
            TurnPhase::ActionResolution {
                player: PlayerId(0),
                action: TurnAction::Stay,
                ..
            }
        ));
        assert_eq!(game.step(&mut ui), TurnPhase::PostActionCheck(PlayerId(0)));
        assert_eq!(game.step(&mut ui), TurnPhase::PlayerTurn(PlayerId(1)));
        assert_eq!(game.turn_number(), 1);
    }

    #[test]
    fn test_roll_in_range() {
        let mut game = small_game();
        let mut ui = Script::default();
        for _ in 0..60 {
            game.step(&mut ui);
        }
        let rolls: Vec<u32> = ui
            .events
            .iter()
            .filter_map(|e| match e {
                GameEvent::TurnStarted { roll, .. } => Some(*roll),
                _ => None,
            })
            .collect();
        assert_eq!(rolls.len(), 20);
        assert!(rolls.iter().all(|r| (2..=12).contains(r)));
    }

    #[test]
    fn test_correct_accusation_wins() {
        let mut game = small_game();
        let mut ui = Script::new([TurnAction::Accuse(SOLUTION)]);

        let outcome = game.run(&mut ui);
        assert_eq!(outcome.winner, PlayerId(0));
        assert_eq!(outcome.reason, WinReason::CorrectAccusation);
        assert_eq!(outcome.solution, SOLUTION);
        assert_eq!(game.outcome(), Some(outcome));
        assert_eq!(ui.turns, vec![PlayerId(0)]);
    }

    #[test]
    fn test_wrong_accusation_eliminates() {
        let mut game = small_game();
        let mut ui = Script::new([TurnAction::Accuse(WRONG)]);

        game.step(&mut ui);
        assert_eq!(game.step(&mut ui), TurnPhase::PostActionCheck(PlayerId(0)));
        assert!(game.player(PlayerId(0)).is_eliminated());
        assert_eq!(game.remaining_players(), 2);
        assert!(ui.events.contains(&GameEvent::PlayerEliminated {
            player: PlayerId(0),
            accusation: WRONG,
        }));
    }

    #[test]
    fn test_eliminated_player_is_skipped() {
        let mut game = small_game();
        let mut ui = Script::new([TurnAction::Accuse(WRONG)]);

        // P0 accuses wrongly, then P1, P2, and P1 again
        for _ in 0..12 {
            game.step(&mut ui);
        }
        assert_eq!(
            ui.turns,
            vec![PlayerId(0), PlayerId(1), PlayerId(2), PlayerId(1)]
        );
    }

    #[test]
    fn test_last_player_standing() {
        let mut game = small_game();
        let mut ui = Script::new([TurnAction::Accuse(WRONG), TurnAction::Accuse(WRONG)]);

        let outcome = game.run(&mut ui);
        assert_eq!(outcome.winner, PlayerId(2));
        assert_eq!(outcome.reason, WinReason::LastPlayerStanding);
        // P2 was never asked for an action
        assert_eq!(ui.turns, vec![PlayerId(0), PlayerId(1)]);
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut game = small_game();
        let mut ui = Script::new([TurnAction::Accuse(SOLUTION)]);
        let outcome = game.run(&mut ui);

        assert_eq!(game.step(&mut ui), TurnPhase::GameOver(outcome));
        assert!(game.phase().is_over());
    }

    #[test]
    fn test_move_within_roll() {
        let mut game = small_game();
        let mut ui = Script::new([TurnAction::Move(Location::new(3, 1))]);

        game.step(&mut ui);
        game.step(&mut ui);
        assert_eq!(
            game.board().character(CharacterId(0)).position(),
            Position::OnBoard(Location::new(3, 1))
        );
        assert!(ui.events.contains(&GameEvent::BoardUpdated));
    }

    #[test]
    fn test_move_onto_wall_ignored() {
        let mut game = small_game();
        let mut ui = Script::new([TurnAction::Move(Location::new(0, 1))]);

        game.step(&mut ui);
        game.step(&mut ui);
        assert_eq!(
            game.board().character(CharacterId(0)).position(),
            Position::OnBoard(Location::new(3, 0))
        );
        assert!(!ui.events.contains(&GameEvent::BoardUpdated));
    }

    #[test]
    fn test_secret_passage_action() {
        let mut game = small_game();
        let hall = RoomId(0);
        let study = RoomId(1);
        game.board.move_token_to_room(CharacterId(0), hall);

        let mut ui = Script::new([TurnAction::SecretPassage]);
        game.step(&mut ui);
        game.step(&mut ui);
        assert_eq!(game.board().room_of(CharacterId(0)), Some(study));
    }

    #[test]
    fn test_secret_passage_outside_room_ignored() {
        let mut game = small_game();
        let mut ui = Script::new([TurnAction::SecretPassage]);
        game.step(&mut ui);
        game.step(&mut ui);
        assert_eq!(game.board().room_of(CharacterId(0)), None);
    }

    #[test]
    fn test_setup_asks_for_players() {
        let mut ui = Script::default();
        let game = Game::setup(&small_config(), &mut ui).unwrap();
        assert_eq!(game.player_count(), 2);
        assert_eq!(game.player(PlayerId(0)).character(), CharacterId(0));
        assert_eq!(game.player(PlayerId(1)).character(), CharacterId(1));
    }
}
