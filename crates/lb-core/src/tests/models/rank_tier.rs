use crate::RankTier;

#[test]
fn test_rank_tier_for_podium_ranks() {
    assert_eq!(RankTier::for_rank(1), RankTier::Gold);
    assert_eq!(RankTier::for_rank(2), RankTier::Cyan);
    assert_eq!(RankTier::for_rank(3), RankTier::Bronze);
}

#[test]
fn test_rank_tier_for_other_ranks() {
    assert_eq!(RankTier::for_rank(0), RankTier::Standard);
    assert_eq!(RankTier::for_rank(4), RankTier::Standard);
    assert_eq!(RankTier::for_rank(20), RankTier::Standard);
}

#[test]
fn test_rank_tier_colors() {
    assert_eq!(RankTier::Gold.color(), "hsla(46,98%,52%,0.75)");
    assert_eq!(RankTier::Standard.color(), "hsla(194,16%,73%,0.75)");
}
