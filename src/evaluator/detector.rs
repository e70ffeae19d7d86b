use super::hand_analysis::HandAnalysis;
use super::rank_groups::mark_first;
use crate::evaluator::HandRank;

/// Strategy pattern: each detector knows how to recognise its hand and
/// which cards it scores.
pub trait HandDetector {
    fn rank(&self) -> HandRank;
    fn detect(&self, analysis: &HandAnalysis) -> bool;
    fn mark(&self, analysis: &HandAnalysis, marks: &mut [bool]);
}

fn mark_all(marks: &mut [bool]) {
    marks.fill(true);
}

// ============================================================================
// Detector Implementations (in priority order: strongest check first)
// ============================================================================

/// Straight Flush: a flush and a straight in the same hand
pub struct StraightFlushDetector;

impl HandDetector for StraightFlushDetector {
    fn rank(&self) -> HandRank {
        HandRank::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush() && analysis.is_straight()
    }

    fn mark(&self, analysis: &HandAnalysis, marks: &mut [bool]) {
        analysis.suit_info.mark(analysis.views, marks);
        if let Some(run) = analysis.straight_info {
            run.mark(analysis.views, marks);
        }
    }
}

/// Flush Five: five of one rank, all counting as one suit
pub struct FlushFiveDetector;

impl HandDetector for FlushFiveDetector {
    fn rank(&self) -> HandRank {
        HandRank::FlushFive
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.five().is_some() && analysis.is_flush()
    }

    fn mark(&self, _analysis: &HandAnalysis, marks: &mut [bool]) {
        mark_all(marks);
    }
}

/// Flush House: a full house that is also a flush
pub struct FlushHouseDetector;

impl HandDetector for FlushHouseDetector {
    fn rank(&self) -> HandRank {
        HandRank::FlushHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.full_house().is_some() && analysis.is_flush()
    }

    fn mark(&self, _analysis: &HandAnalysis, marks: &mut [bool]) {
        mark_all(marks);
    }
}

/// Five of a Kind: five cards of the same rank
pub struct FiveOfAKindDetector;

impl HandDetector for FiveOfAKindDetector {
    fn rank(&self) -> HandRank {
        HandRank::FiveOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.five().is_some()
    }

    fn mark(&self, analysis: &HandAnalysis, marks: &mut [bool]) {
        if let Some(rank) = analysis.rank_groups.five() {
            mark_first(analysis.views, rank, 5, marks);
        }
    }
}

/// Four of a Kind: four cards of the same rank
pub struct FourOfAKindDetector;

impl HandDetector for FourOfAKindDetector {
    fn rank(&self) -> HandRank {
        HandRank::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.quad().is_some()
    }

    fn mark(&self, analysis: &HandAnalysis, marks: &mut [bool]) {
        if let Some(rank) = analysis.rank_groups.quad() {
            mark_first(analysis.views, rank, 4, marks);
        }
    }
}

/// Full House: three of a kind plus a pair
pub struct FullHouseDetector;

impl HandDetector for FullHouseDetector {
    fn rank(&self) -> HandRank {
        HandRank::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.full_house().is_some()
    }

    fn mark(&self, analysis: &HandAnalysis, marks: &mut [bool]) {
        if let Some((trips, pair)) = analysis.rank_groups.full_house() {
            mark_first(analysis.views, trips, 3, marks);
            mark_first(analysis.views, pair, 2, marks);
        }
    }
}

/// Flush: enough cards counting as one suit
pub struct FlushDetector;

impl HandDetector for FlushDetector {
    fn rank(&self) -> HandRank {
        HandRank::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush()
    }

    fn mark(&self, analysis: &HandAnalysis, marks: &mut [bool]) {
        analysis.suit_info.mark(analysis.views, marks);
    }
}

/// Straight: a long enough run of ranks
pub struct StraightDetector;

impl HandDetector for StraightDetector {
    fn rank(&self) -> HandRank {
        HandRank::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_straight()
    }

    fn mark(&self, analysis: &HandAnalysis, marks: &mut [bool]) {
        if let Some(run) = analysis.straight_info {
            run.mark(analysis.views, marks);
        }
    }
}

/// Three of a Kind: three cards of the same rank
pub struct ThreeOfAKindDetector;

impl HandDetector for ThreeOfAKindDetector {
    fn rank(&self) -> HandRank {
        HandRank::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.trips().is_some()
    }

    fn mark(&self, analysis: &HandAnalysis, marks: &mut [bool]) {
        if let Some(rank) = analysis.rank_groups.trips() {
            mark_first(analysis.views, rank, 3, marks);
        }
    }
}

/// Two Pair: two pairs of different ranks
pub struct TwoPairDetector;

impl HandDetector for TwoPairDetector {
    fn rank(&self) -> HandRank {
        HandRank::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.two_pair().is_some()
    }

    fn mark(&self, analysis: &HandAnalysis, marks: &mut [bool]) {
        if let Some((high, low)) = analysis.rank_groups.two_pair() {
            mark_first(analysis.views, high, 2, marks);
            mark_first(analysis.views, low, 2, marks);
        }
    }
}

/// One Pair: two cards of the same rank
pub struct PairDetector;

impl HandDetector for PairDetector {
    fn rank(&self) -> HandRank {
        HandRank::Pair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pair().is_some()
    }

    fn mark(&self, analysis: &HandAnalysis, marks: &mut [bool]) {
        if let Some(rank) = analysis.rank_groups.pair() {
            mark_first(analysis.views, rank, 2, marks);
        }
    }
}

/// High Card: only the single highest card scores
pub struct HighCardDetector;

impl HandDetector for HighCardDetector {
    fn rank(&self) -> HandRank {
        HandRank::HighCard
    }

    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true // Always matches as fallback
    }

    fn mark(&self, analysis: &HandAnalysis, marks: &mut [bool]) {
        if let Some(rank) = analysis.rank_groups.highest_with(1, None) {
            mark_first(analysis.views, rank, 1, marks);
        }
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn HandDetector; HandRank::COUNT] = [
    &StraightFlushDetector,
    &FlushFiveDetector,
    &FlushHouseDetector,
    &FiveOfAKindDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &PairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::evaluator::RuleFlags;
    use crate::view::{CardView, ViewModifiers};

    fn views(text: &str) -> Vec<CardView> {
        parse_cards(text)
            .expect("valid fixture")
            .into_iter()
            .map(|c| CardView::project(c, &ViewModifiers::default()))
            .collect()
    }

    #[test]
    fn test_every_rank_has_one_detector() {
        let mut seen: Vec<HandRank> = DETECTORS.iter().map(|d| d.rank()).collect();
        seen.sort();
        assert_eq!(seen, HandRank::ALL.to_vec());
    }

    #[test]
    fn test_full_house_marks_three_plus_two() {
        // four sixes: only the first three are part of the full house
        let v = views("6c 6d 9h 6h 9s 6s");
        let analysis = HandAnalysis::new(&v, RuleFlags::default());
        assert!(FourOfAKindDetector.detect(&analysis));
        assert!(FullHouseDetector.detect(&analysis));
        let mut marks = [false; 6];
        FullHouseDetector.mark(&analysis, &mut marks);
        assert_eq!(marks, [true, true, true, true, true, false]);
    }

    #[test]
    fn test_two_pair_ignores_kicker() {
        let v = views("Ah Kd As 7c Kh");
        let analysis = HandAnalysis::new(&v, RuleFlags::default());
        assert!(TwoPairDetector.detect(&analysis));
        let mut marks = [false; 5];
        TwoPairDetector.mark(&analysis, &mut marks);
        assert_eq!(marks, [true, true, true, false, true]);
    }

    #[test]
    fn test_detector_priority_straight_flush_over_flush() {
        let v = views("9h 8h 7h 6h 5h");
        let analysis = HandAnalysis::new(&v, RuleFlags::default());

        // Both straight and flush detectors would match, but straight flush comes first
        assert!(StraightFlushDetector.detect(&analysis));
        assert!(FlushDetector.detect(&analysis));
        assert!(StraightDetector.detect(&analysis));
    }

    #[test]
    fn test_pair_marks_first_two() {
        let v = views("3c 8d 8h 8s");
        let analysis = HandAnalysis::new(&v, RuleFlags::default());
        let mut marks = [false; 4];
        ThreeOfAKindDetector.mark(&analysis, &mut marks);
        assert_eq!(marks, [false, true, true, true]);

        let v = views("3c 8d Kh 8s");
        let analysis = HandAnalysis::new(&v, RuleFlags::default());
        let mut marks = [false; 4];
        PairDetector.mark(&analysis, &mut marks);
        assert_eq!(marks, [false, true, false, true]);
    }
}
