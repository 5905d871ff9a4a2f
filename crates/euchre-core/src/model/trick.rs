use crate::model::card::Card;
use crate::model::player::PlayerPosition;
use crate::model::suit::Suit;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Trick {
    leader: PlayerPosition,
    plays: Vec<Play>,
}

#[derive(Debug, Clone, Copy)]
pub struct Play {
    pub seat: PlayerPosition,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrickError {
    TrickComplete,
    OutOfTurn {
        expected: PlayerPosition,
        actual: PlayerPosition,
    },
    AlreadyPlayed(PlayerPosition),
}

impl fmt::Display for TrickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrickError::TrickComplete => write!(f, "trick already complete"),
            TrickError::OutOfTurn { expected, actual } => {
                write!(f, "expected {expected} to play next but got {actual}")
            }
            TrickError::AlreadyPlayed(seat) => {
                write!(f, "{seat} has already played this trick")
            }
        }
    }
}

impl std::error::Error for TrickError {}

impl Trick {
    pub fn new(leader: PlayerPosition) -> Self {
        Self {
            leader,
            plays: Vec::with_capacity(4),
        }
    }

    pub fn leader(&self) -> PlayerPosition {
        self.leader
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == 4
    }

    pub fn lead_card(&self) -> Option<Card> {
        self.plays.first().map(|play| play.card)
    }

    /// The suit that must be followed: the first card's effective suit, so a
    /// led left bower calls for trump, not for its raw suit.
    pub fn lead_suit(&self, trump: Suit) -> Option<Suit> {
        self.lead_card().map(|card| card.effective_suit(trump))
    }

    pub fn play(&mut self, seat: PlayerPosition, card: Card) -> Result<(), TrickError> {
        if self.is_complete() {
            return Err(TrickError::TrickComplete);
        }

        if self.plays.iter().any(|play| play.seat == seat) {
            return Err(TrickError::AlreadyPlayed(seat));
        }

        let expected = self.expected_seat();
        if expected != seat {
            return Err(TrickError::OutOfTurn {
                expected,
                actual: seat,
            });
        }

        self.plays.push(Play { seat, card });
        Ok(())
    }

    /// The play holding the trick so far, by total value under the trump and
    /// lead context. Usable mid-trick; `None` before any card is down.
    pub fn current_winner(&self, trump: Suit) -> Option<Play> {
        let lead = self.lead_suit(trump)?;
        self.plays
            .iter()
            .copied()
            .max_by_key(|play| play.card.total_value(trump, Some(lead)))
    }

    /// The trick winner once all four cards are down; `None` until then.
    pub fn winner(&self, trump: Suit) -> Option<PlayerPosition> {
        if !self.is_complete() {
            return None;
        }
        self.current_winner(trump).map(|play| play.seat)
    }

    fn expected_seat(&self) -> PlayerPosition {
        self.plays
            .last()
            .map(|play| play.seat.next())
            .unwrap_or(self.leader)
    }
}
