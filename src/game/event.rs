//! Notifications sent to the interaction layer.
//!
//! The game loop reports what happened through `Interaction::notify`; the
//! interaction layer decides what to show and to whom. A refutation event
//! carries the revealed card, which only the suggester should see.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{Hypothesis, PlayerId, RoomId, TokenId};

/// How a game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// The winner named the solution.
    CorrectAccusation,
    /// Everybody else was eliminated.
    LastPlayerStanding,
}

/// Something that happened during play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player's turn began with this dice roll.
    TurnStarted {
        /// Whose turn.
        player: PlayerId,
        /// Dice total, 2..=12.
        roll: u32,
    },

    /// Token positions changed.
    BoardUpdated,

    /// A token was summoned or carried into a room.
    TokenMovedToRoom {
        /// The token.
        token: TokenId,
        /// Destination.
        room: RoomId,
    },

    /// A wrong accusation knocked a player out.
    PlayerEliminated {
        /// The eliminated player.
        player: PlayerId,
        /// What they accused.
        accusation: Hypothesis,
    },

    /// A player made a suggestion.
    SuggestionMade {
        /// The suggesting player.
        suggester: PlayerId,
        /// Character, weapon and room suggested.
        claim: Hypothesis,
    },

    /// A suggestion was refuted.
    SuggestionRefuted {
        /// The suggesting player.
        suggester: PlayerId,
        /// Who showed a card.
        refuter: PlayerId,
        /// The card shown.
        card: Card,
    },

    /// Nobody could refute a suggestion.
    SuggestionUnrefuted {
        /// The suggesting player.
        suggester: PlayerId,
        /// The unrefuted claim.
        claim: Hypothesis,
    },

    /// The game ended.
    GameOver {
        /// The winner.
        winner: PlayerId,
        /// How they won.
        reason: WinReason,
        /// The true solution.
        solution: Hypothesis,
    },
}

impl GameEvent {
    /// The player this event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::TurnStarted { player, .. } | GameEvent::PlayerEliminated { player, .. } => {
                Some(*player)
            }
            GameEvent::SuggestionMade { suggester, .. }
            | GameEvent::SuggestionRefuted { suggester, .. }
            | GameEvent::SuggestionUnrefuted { suggester, .. } => Some(*suggester),
            GameEvent::GameOver { winner, .. } => Some(*winner),
            GameEvent::BoardUpdated | GameEvent::TokenMovedToRoom { .. } => None,
        }
    }
}
