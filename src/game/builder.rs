//! Non-interactive game construction.
//!
//! `Game::setup` asks the interaction layer for the player count and each
//! character. `GameBuilder` takes those answers up front, and can also fix
//! the solution, which makes scripted games and tests reproducible.

use super::engine::Game;
use crate::board::Board;
use crate::cards::{Card, Deck};
use crate::core::{CharacterId, GameConfig, GameRng, Hypothesis};
use crate::error::{SetupError, SetupResult};

/// Builder for a `Game`.
///
/// ```
/// use rust_cluedo::core::GameConfig;
/// use rust_cluedo::game::GameBuilder;
///
/// let game = GameBuilder::new(GameConfig::classic())
///     .player_count(3)
///     .seed(7)
///     .build()
///     .unwrap();
/// assert_eq!(game.player_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    config: GameConfig,
    characters: Option<Vec<CharacterId>>,
    player_count: Option<usize>,
    solution: Option<Hypothesis>,
}

impl GameBuilder {
    /// Start from `config` with the minimum player count and a drawn solution.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            characters: None,
            player_count: None,
            solution: None,
        }
    }

    /// Seat this many players, taking characters in id order.
    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = Some(count);
        self
    }

    /// Seat one player per listed character, in seat order.
    pub fn characters(mut self, characters: impl IntoIterator<Item = CharacterId>) -> Self {
        self.characters = Some(characters.into_iter().collect());
        self
    }

    /// Override the configuration's RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Use this solution instead of drawing one.
    pub fn solution(mut self, solution: Hypothesis) -> Self {
        self.solution = Some(solution);
        self
    }

    /// Validate the choices, deal the cards and seat the players.
    pub fn build(self) -> SetupResult<Game> {
        let config = self.config;
        let mut rng = GameRng::new(config.seed);
        let board = Board::new(&config, &mut rng)?;

        let allowed = config.player_range();
        let characters = match self.characters {
            Some(list) => list,
            None => {
                let count = self.player_count.unwrap_or(*allowed.start());
                (0..count).map(|i| CharacterId(i as u8)).collect()
            }
        };
        if !allowed.contains(&characters.len()) {
            return Err(SetupError::PlayerCount {
                requested: characters.len(),
                min: *allowed.start(),
                max: *allowed.end(),
            });
        }
        for (seat, character) in characters.iter().enumerate() {
            if character.index() >= config.characters.len() || characters[..seat].contains(character)
            {
                let name = config
                    .characters
                    .get(character.index())
                    .map_or_else(|| character.to_string(), |c| c.name.clone());
                return Err(SetupError::CharacterUnavailable { name });
            }
        }

        let deck = match self.solution {
            Some(solution) => {
                check_solution(&config, &solution)?;
                Deck::with_solution(
                    config.characters.len(),
                    config.weapons.len(),
                    config.rooms.len(),
                    solution,
                )
            }
            None => Deck::new(
                config.characters.len(),
                config.weapons.len(),
                config.rooms.len(),
                &mut rng,
            ),
        };

        Ok(Game::assemble(board, deck, &characters, rng))
    }
}

fn check_solution(config: &GameConfig, solution: &Hypothesis) -> SetupResult<()> {
    let out_of_range = if solution.character.index() >= config.characters.len() {
        Some(Card::Character(solution.character))
    } else if solution.weapon.index() >= config.weapons.len() {
        Some(Card::Weapon(solution.weapon))
    } else if solution.room.index() >= config.rooms.len() {
        Some(Card::Room(solution.room))
    } else {
        None
    };
    match out_of_range {
        Some(card) => Err(SetupError::SolutionOutOfRange {
            card: card.to_string(),
        }),
        None => Ok(()),
    }
}
