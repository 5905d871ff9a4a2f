mod bid;
mod evaluate;
mod params;
mod play;

pub use bid::{
    BidPlanner, count_offsuit_aces, hand_strength, has_card, would_have_left_bower,
    would_have_right_bower,
};
pub use evaluate::{
    biggest_non_trump, biggest_trump, count_suit, find_voidable_suits, lowest_card,
    smallest_winning_card, trump_cards,
};
pub use params::BotParams;
pub use play::PlayPlanner;
