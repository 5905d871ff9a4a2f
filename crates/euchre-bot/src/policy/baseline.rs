use super::{BidContext, BidDecision, PlayContext, Policy};
use crate::bot::{BidPlanner, BotParams, PlayPlanner, hand_strength};
use euchre_core::model::card::Card;
use euchre_core::model::hand::Hand;
use euchre_core::model::suit::Suit;
use tracing::{Level, event};

/// The baseline rule-based player: threshold bidding, void-creating
/// discards, win-if-possible play, and never going alone.
pub struct BaselinePolicy {
    params: BotParams,
}

impl BaselinePolicy {
    pub fn new(params: BotParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BotParams {
        &self.params
    }
}

impl Default for BaselinePolicy {
    fn default() -> Self {
        Self::new(BotParams::default())
    }
}

impl Policy for BaselinePolicy {
    fn bid_round_one(&mut self, hand: &Hand, ctx: &BidContext) -> BidDecision {
        let decision = if BidPlanner::order_up(hand, ctx.top_card, &self.params) {
            BidDecision::OrderUp
        } else {
            BidDecision::Pass
        };
        log_bid_decision(
            hand,
            ctx,
            "round_one",
            decision == BidDecision::OrderUp,
            None,
            &self.params,
        );
        decision
    }

    fn bid_round_two(&mut self, hand: &Hand, ctx: &BidContext) -> Option<Suit> {
        let called = BidPlanner::call_trump(hand, ctx.top_card, &self.params);
        log_bid_decision(hand, ctx, "round_two", called.is_some(), called, &self.params);
        called
    }

    fn go_alone(&mut self, _hand: &Hand, _ctx: &BidContext) -> bool {
        // The baseline always keeps its partner in.
        false
    }

    fn choose_discard(&mut self, hand: &mut Hand, trump: Suit) -> Card {
        let card = PlayPlanner::discard(hand, trump).expect("discard requires a non-empty hand");
        hand.remove(card);

        if tracing::enabled!(Level::INFO) {
            event!(
                target: "euchre_bot::play",
                Level::INFO,
                trump = %trump,
                hand_size = hand.len(),
                chosen = %card,
                reason = "baseline_discard",
            );
        }

        card
    }

    fn choose_play(&mut self, hand: &mut Hand, ctx: &PlayContext<'_>) -> Card {
        let card = PlayPlanner::choose(hand, ctx.seat, ctx.trump, ctx.trick)
            .expect("play requires a non-empty hand");
        hand.remove(card);

        if tracing::enabled!(Level::INFO) {
            event!(
                target: "euchre_bot::play",
                Level::INFO,
                seat = ?ctx.seat,
                trump = %ctx.trump,
                trick_cards = ctx.trick.plays().len(),
                hand_size = hand.len(),
                chosen = %card,
                reason = "baseline_play",
            );
        }

        card
    }
}

fn log_bid_decision(
    hand: &Hand,
    ctx: &BidContext,
    round: &str,
    bid: bool,
    called: Option<Suit>,
    params: &BotParams,
) {
    if !tracing::enabled!(Level::INFO) {
        return;
    }

    if !bid_logging_enabled() {
        return;
    }

    let cards = hand
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(",");

    event!(
        target: "euchre_bot::bid",
        Level::INFO,
        seat = ?ctx.seat,
        round,
        top_card = %ctx.top_card,
        strength = hand_strength(hand, ctx.top_card.suit, params),
        bid,
        called = ?called,
        hand = %cards,
    );
}

fn bid_logging_enabled() -> bool {
    std::env::var("EUCHRE_BOT_DETAILS")
        .map(|raw| matches!(raw.trim(), "1" | "true" | "TRUE" | "on" | "ON"))
        .unwrap_or(false)
}
