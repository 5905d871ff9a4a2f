use super::evaluate::{
    biggest_non_trump, biggest_trump, find_voidable_suits, lowest_card, smallest_winning_card,
};
use euchre_core::model::card::Card;
use euchre_core::model::hand::Hand;
use euchre_core::model::player::PlayerPosition;
use euchre_core::model::suit::Suit;
use euchre_core::model::trick::Trick;

pub struct PlayPlanner;

impl PlayPlanner {
    /// Dealer discard after picking up the ordered card: the cheapest card
    /// of a voidable suit if one exists, otherwise the cheapest non-trump
    /// card, otherwise the cheapest card outright. `None` only on an empty
    /// hand.
    pub fn discard(hand: &Hand, trump: Suit) -> Option<Card> {
        let voidable = find_voidable_suits(hand, trump);
        if !voidable.is_empty() {
            let candidate = hand
                .iter()
                .copied()
                .filter(|card| voidable.contains(&card.effective_suit(trump)))
                .min_by_key(|card| card.total_value(trump, None));
            if candidate.is_some() {
                return candidate;
            }
        }

        lowest_card(hand, trump, None).or_else(|| lowest_overall(hand, trump, None))
    }

    /// Trick-position policy. Leading: pull trump, or push the strongest
    /// off-suit. Following: sacrifice the cheapest card when the partner
    /// already holds the trick, otherwise play the cheapest winner, and give
    /// up the cheapest card when nothing wins. `None` only on an empty hand.
    pub fn choose(hand: &Hand, seat: PlayerPosition, trump: Suit, trick: &Trick) -> Option<Card> {
        if hand.is_empty() {
            return None;
        }

        let Some(winner) = trick.current_winner(trump) else {
            return biggest_trump(hand, trump, None).or_else(|| biggest_non_trump(hand, trump, None));
        };

        let lead = trick.lead_suit(trump);

        if winner.seat.team() == seat.team() {
            return lowest_card(hand, trump, lead).or_else(|| lowest_overall(hand, trump, lead));
        }

        smallest_winning_card(hand, trump, trick)
            .or_else(|| lowest_card(hand, trump, lead))
            .or_else(|| lowest_overall(hand, trump, lead))
    }
}

fn lowest_overall(hand: &Hand, trump: Suit, lead: Option<Suit>) -> Option<Card> {
    hand.iter()
        .copied()
        .min_by_key(|card| card.total_value(trump, lead))
}
