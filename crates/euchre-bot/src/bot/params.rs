/// Tunable weights for the baseline bidding heuristic.
///
/// The defaults follow the common order-up point count: a bower is worth
/// three, a remaining trump honor two, low trump one, and an off-suit ace
/// one, with seven points needed to bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotParams {
    pub bid_threshold: i32,
    pub bower_strength: i32,
    pub high_trump_strength: i32,
    pub low_trump_strength: i32,
    pub offsuit_ace_strength: i32,
}

impl Default for BotParams {
    fn default() -> Self {
        Self {
            bid_threshold: 7,
            bower_strength: 3,
            high_trump_strength: 2,
            low_trump_strength: 1,
            offsuit_ace_strength: 1,
        }
    }
}
