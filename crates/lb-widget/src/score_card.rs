use lb_core::{RankTier, ScoreEntry};

use serde::Serialize;

// Enough fractional digits to spell out any finite f64 exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Display-ready text for one leaderboard row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCard {
    pub username: String,
    pub score: String,
    pub accuracy: String,
    pub pops: String,
    pub rank: String,
    pub tier: RankTier,
    /// Background of the rank badge
    pub badge_color: &'static str,
}

impl From<&ScoreEntry> for ScoreCard {
    fn from(entry: &ScoreEntry) -> Self {
        let tier = entry.tier();
        Self {
            username: entry.username.clone(),
            score: format!("{} Score", to_fixed(entry.score, 1)),
            accuracy: format!("{}% Accuracy", to_fixed(entry.accuracy * 100.0, 0)),
            pops: format!("{} Pops", entry.pops),
            rank: format!("Rank {}", entry.rank),
            tier,
            badge_color: tier.color(),
        }
    }
}

/// Format `value` with `digits` decimals, rounding the exact binary value
/// half away from zero.
///
/// `format!("{:.1}")` rounds exact ties to even (2.25 becomes "2.2"); score
/// cards round them up ("2.3"). Values that only look like ties in decimal,
/// such as 1.005, are below the midpoint and round down either way.
pub(crate) fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();

    if fraction.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        carry_one(&mut kept);
    }

    let whole_len = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(kept[..whole_len].iter().map(|&d| char::from(d)));
    if digits > 0 {
        out.push('.');
        out.extend(kept[whole_len..].iter().map(|&d| char::from(d)));
    }
    out
}

fn carry_one(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
