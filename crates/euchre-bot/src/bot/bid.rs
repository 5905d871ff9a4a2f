use super::params::BotParams;
use euchre_core::model::card::Card;
use euchre_core::model::hand::Hand;
use euchre_core::model::rank::Rank;
use euchre_core::model::suit::Suit;

pub struct BidPlanner;

impl BidPlanner {
    /// Round one: order the turned-up card to the dealer when the hand
    /// clears the bid threshold at that card's suit.
    pub fn order_up(hand: &Hand, top_card: Card, params: &BotParams) -> bool {
        hand_strength(hand, top_card.suit, params) >= params.bid_threshold
    }

    /// Round two: name the strongest of the three remaining suits, or pass.
    /// The turned-down card's suit cannot be called. Ties keep the suit
    /// encountered first in `Suit::ALL` order.
    pub fn call_trump(hand: &Hand, top_card: Card, params: &BotParams) -> Option<Suit> {
        let mut best: Option<(Suit, i32)> = None;
        for suit in Suit::ALL.iter().copied() {
            if suit == top_card.suit {
                continue;
            }
            let strength = hand_strength(hand, suit, params);
            if best.is_none_or(|(_, best_strength)| strength > best_strength) {
                best = Some((suit, strength));
            }
        }
        best.filter(|&(_, strength)| strength >= params.bid_threshold)
            .map(|(suit, _)| suit)
    }
}

/// Raw-suit membership test. Bidding runs before trump is fixed, so the
/// bower exception does not apply here.
pub fn has_card(hand: &Hand, rank: Rank, suit: Suit) -> bool {
    hand.contains(Card::new(rank, suit))
}

/// Would naming `prospective_trump` leave the right bower in this hand?
pub fn would_have_right_bower(hand: &Hand, prospective_trump: Suit) -> bool {
    has_card(hand, Rank::Jack, prospective_trump)
}

/// Would naming `prospective_trump` leave the left bower in this hand?
/// False for the right bower; check that separately.
pub fn would_have_left_bower(hand: &Hand, prospective_trump: Suit) -> bool {
    has_card(hand, Rank::Jack, prospective_trump.matching())
}

/// Aces outside the prospective trump suit.
pub fn count_offsuit_aces(hand: &Hand, avoid_suit: Suit) -> usize {
    hand.iter()
        .filter(|card| card.suit != avoid_suit && card.rank == Rank::Ace)
        .count()
}

/// Bid-time strength of the hand if `prospective_trump` were named. A
/// monotonic proxy for hand quality; only the relative ordering across suits
/// is meaningful. The jack of the prospective suit counts once, as the
/// right bower.
pub fn hand_strength(hand: &Hand, prospective_trump: Suit, params: &BotParams) -> i32 {
    let mut strength = 0;

    if would_have_right_bower(hand, prospective_trump) {
        strength += params.bower_strength;
    }
    if would_have_left_bower(hand, prospective_trump) {
        strength += params.bower_strength;
    }

    for rank in [Rank::Ace, Rank::King, Rank::Queen] {
        if has_card(hand, rank, prospective_trump) {
            strength += params.high_trump_strength;
        }
    }
    for rank in [Rank::Ten, Rank::Nine] {
        if has_card(hand, rank, prospective_trump) {
            strength += params.low_trump_strength;
        }
    }

    strength += count_offsuit_aces(hand, prospective_trump) as i32 * params.offsuit_ace_strength;

    strength
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand_of(cards: &[(Rank, Suit)]) -> Hand {
        Hand::with_cards(
            cards
                .iter()
                .map(|&(rank, suit)| Card::new(rank, suit))
                .collect(),
        )
    }

    #[test]
    fn near_solid_spades_scores_nine() {
        // 9S 10S JS QS KS at a spades top card: right bower 3, king and
        // queen 2 each, ten and nine 1 each.
        let hand = hand_of(&[
            (Rank::Nine, Suit::Spades),
            (Rank::Ten, Suit::Spades),
            (Rank::Jack, Suit::Spades),
            (Rank::Queen, Suit::Spades),
            (Rank::King, Suit::Spades),
        ]);
        let params = BotParams::default();
        assert_eq!(hand_strength(&hand, Suit::Spades, &params), 9);
        assert!(BidPlanner::order_up(
            &hand,
            Card::new(Rank::Ace, Suit::Spades),
            &params
        ));
    }

    #[test]
    fn both_bowers_and_an_offsuit_ace() {
        let hand = hand_of(&[
            (Rank::Jack, Suit::Hearts),
            (Rank::Jack, Suit::Diamonds),
            (Rank::Ace, Suit::Spades),
            (Rank::Nine, Suit::Clubs),
            (Rank::Ten, Suit::Clubs),
        ]);
        let params = BotParams::default();
        assert_eq!(hand_strength(&hand, Suit::Hearts, &params), 7);
    }

    #[test]
    fn weak_hand_passes_round_one() {
        let hand = hand_of(&[
            (Rank::Nine, Suit::Spades),
            (Rank::Ten, Suit::Diamonds),
            (Rank::Queen, Suit::Clubs),
            (Rank::Nine, Suit::Hearts),
            (Rank::Ten, Suit::Hearts),
        ]);
        let params = BotParams::default();
        assert!(!BidPlanner::order_up(
            &hand,
            Card::new(Rank::King, Suit::Hearts),
            &params
        ));
    }

    #[test]
    fn round_two_never_calls_the_turned_down_suit() {
        // Strong in spades, but spades were turned down.
        let hand = hand_of(&[
            (Rank::Jack, Suit::Spades),
            (Rank::Jack, Suit::Clubs),
            (Rank::Ace, Suit::Spades),
            (Rank::King, Suit::Spades),
            (Rank::Queen, Suit::Spades),
        ]);
        let params = BotParams::default();
        let called = BidPlanner::call_trump(&hand, Card::new(Rank::Nine, Suit::Spades), &params);
        assert_ne!(called, Some(Suit::Spades));
        // Clubs carries both bowers plus the off-suit ace: 3 + 3 + 1 = 7.
        assert_eq!(called, Some(Suit::Clubs));
    }

    #[test]
    fn round_two_passes_when_every_suit_is_weak() {
        let hand = hand_of(&[
            (Rank::Nine, Suit::Spades),
            (Rank::Ten, Suit::Hearts),
            (Rank::Queen, Suit::Clubs),
            (Rank::King, Suit::Diamonds),
            (Rank::Nine, Suit::Diamonds),
        ]);
        let params = BotParams::default();
        assert_eq!(
            BidPlanner::call_trump(&hand, Card::new(Rank::Ace, Suit::Spades), &params),
            None
        );
    }

    #[test]
    fn round_two_tie_keeps_the_earlier_suit() {
        // Hearts and diamonds trade bowers symmetrically; with the threshold
        // lowered the earlier suit in enumeration order must win the tie.
        let hand = hand_of(&[
            (Rank::Jack, Suit::Hearts),
            (Rank::Jack, Suit::Diamonds),
            (Rank::Nine, Suit::Spades),
        ]);
        let params = BotParams {
            bid_threshold: 6,
            ..BotParams::default()
        };
        assert_eq!(hand_strength(&hand, Suit::Hearts, &params), 6);
        assert_eq!(hand_strength(&hand, Suit::Diamonds, &params), 6);
        assert_eq!(
            BidPlanner::call_trump(&hand, Card::new(Rank::Ace, Suit::Clubs), &params),
            Some(Suit::Hearts)
        );
    }

    #[test]
    fn left_bower_check_ignores_the_right_bower() {
        let hand = hand_of(&[(Rank::Jack, Suit::Hearts)]);
        assert!(would_have_right_bower(&hand, Suit::Hearts));
        assert!(!would_have_left_bower(&hand, Suit::Hearts));
        assert!(would_have_left_bower(&hand, Suit::Diamonds));
    }

    #[test]
    fn offsuit_aces_exclude_the_trump_ace() {
        let hand = hand_of(&[
            (Rank::Ace, Suit::Hearts),
            (Rank::Ace, Suit::Spades),
            (Rank::Ace, Suit::Clubs),
        ]);
        assert_eq!(count_offsuit_aces(&hand, Suit::Hearts), 2);
    }
}
