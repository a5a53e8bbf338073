/// v1 matching policy.
///
/// Notes:
/// - `amount_tolerance` absorbs binary floating-point representation error;
///   it is not a business rounding allowance.
/// - `min_signal_matches` is a frozen bootstrap threshold for v1: a single
///   agreeing signal is never enough evidence on its own.
#[derive(Debug, Clone, Copy)]
pub struct MatchPolicy {
    pub amount_tolerance: f64,
    pub date_window_days: i64,
    pub min_signal_matches: u8,
    pub home_company: &'static str,
}

impl MatchPolicy {
    /// Sign-insensitive amount equality: a payable shows up as a negative
    /// transaction against a positive document total.
    pub fn amounts_match(self, first: Option<f64>, second: Option<f64>) -> bool {
        let (Some(first), Some(second)) = (first, second) else {
            return false;
        };
        (first.abs() - second.abs()).abs() < self.amount_tolerance
    }

    pub fn meets_threshold(self, signal_matches: u8) -> bool {
        signal_matches >= self.min_signal_matches
    }
}

pub const MATCH_POLICY_V1: MatchPolicy = MatchPolicy {
    amount_tolerance: 0.01,
    date_window_days: 30,
    min_signal_matches: 2,
    home_company: "Example Company Oy",
};
