mod baseline;

pub use baseline::BaselinePolicy;

use euchre_core::model::card::Card;
use euchre_core::model::hand::Hand;
use euchre_core::model::player::PlayerPosition;
use euchre_core::model::suit::Suit;
use euchre_core::model::trick::Trick;

/// Round-one bid: take the turned-up card, or pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidDecision {
    OrderUp,
    Pass,
}

/// Context for the bidding rounds. No trump exists yet; `top_card` is the
/// card the dealer turned up.
#[derive(Debug, Clone, Copy)]
pub struct BidContext {
    pub seat: PlayerPosition,
    pub top_card: Card,
}

/// Context for play decisions. Trump is fixed by this point; the type makes
/// a play decision without trump unrepresentable.
#[derive(Debug, Clone, Copy)]
pub struct PlayContext<'a> {
    pub seat: PlayerPosition,
    pub trump: Suit,
    pub trick: &'a Trick,
}

/// Unified interface for bidding and play decision-making. The baseline
/// heuristic is one implementation; alternative strategies plug in here.
pub trait Policy: Send {
    /// Round one: order the turned-up card to the dealer, or pass.
    fn bid_round_one(&mut self, hand: &Hand, ctx: &BidContext) -> BidDecision;

    /// Round two: name a trump suit other than the turned-down card's, or
    /// pass with `None`.
    fn bid_round_two(&mut self, hand: &Hand, ctx: &BidContext) -> Option<Suit>;

    /// Whether to play the hand without the partner.
    fn go_alone(&mut self, hand: &Hand, ctx: &BidContext) -> bool;

    /// Dealer discard after picking up the ordered card. Removes the chosen
    /// card from the hand and returns it.
    fn choose_discard(&mut self, hand: &mut Hand, trump: Suit) -> Card;

    /// Pick a card for the current trick. Removes the chosen card from the
    /// hand; committing it to the trick is the caller's job.
    fn choose_play(&mut self, hand: &mut Hand, ctx: &PlayContext<'_>) -> Card;
}
