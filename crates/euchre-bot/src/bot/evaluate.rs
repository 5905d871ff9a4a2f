use euchre_core::model::card::Card;
use euchre_core::model::hand::Hand;
use euchre_core::model::suit::Suit;
use euchre_core::model::trick::Trick;

/// Number of cards counting as `suit` once trump is fixed. The left bower
/// counts toward trump, not its raw suit.
pub fn count_suit(hand: &Hand, suit: Suit, trump: Suit) -> usize {
    hand.iter()
        .filter(|card| card.effective_suit(trump) == suit)
        .count()
}

/// Non-trump suits the hand holds exactly one card of. Discarding the lone
/// card opens a future void.
pub fn find_voidable_suits(hand: &Hand, trump: Suit) -> Vec<Suit> {
    Suit::ALL
        .iter()
        .copied()
        .filter(|&suit| suit != trump && count_suit(hand, suit, trump) == 1)
        .collect()
}

/// Every card counting as trump, the left bower included.
pub fn trump_cards(hand: &Hand, trump: Suit) -> Vec<Card> {
    hand.iter()
        .copied()
        .filter(|card| card.effective_suit(trump) == trump)
        .collect()
}

pub fn biggest_trump(hand: &Hand, trump: Suit, lead: Option<Suit>) -> Option<Card> {
    hand.iter()
        .copied()
        .filter(|card| card.effective_suit(trump) == trump)
        .max_by_key(|card| card.total_value(trump, lead))
}

pub fn biggest_non_trump(hand: &Hand, trump: Suit, lead: Option<Suit>) -> Option<Card> {
    hand.iter()
        .copied()
        .filter(|card| card.effective_suit(trump) != trump)
        .max_by_key(|card| card.total_value(trump, lead))
}

/// The cheapest card outside trump, or `None` when every card resolves to
/// trump. Suit membership here is resolved against the lead suit, the same
/// way the follow rules see the hand.
pub fn lowest_card(hand: &Hand, trump: Suit, lead: Option<Suit>) -> Option<Card> {
    hand.iter()
        .copied()
        .filter(|card| {
            let resolved = match lead {
                Some(lead_suit) => card.effective_suit(lead_suit),
                None => card.suit,
            };
            resolved != trump
        })
        .min_by_key(|card| card.total_value(trump, lead))
}

/// The weakest card that still beats the led card. The first card of the
/// trick establishes the lead suit and the value to beat; `None` when the
/// trick is empty or nothing in hand gets past it.
pub fn smallest_winning_card(hand: &Hand, trump: Suit, trick: &Trick) -> Option<Card> {
    let lead_card = trick.lead_card()?;
    let lead_suit = lead_card.effective_suit(trump);
    let to_beat = lead_card.total_value(trump, Some(lead_suit));

    hand.iter()
        .copied()
        .filter(|card| card.total_value(trump, Some(lead_suit)) > to_beat)
        .min_by_key(|card| card.total_value(trump, Some(lead_suit)))
}
