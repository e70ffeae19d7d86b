use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::evaluator::RuleFlags;
use crate::view::CardView;

/// Pre-computed analysis of a hand.
/// Built once and shared by all hand detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis<'a> {
    pub views: &'a [CardView],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: Option<StraightInfo>,
}

impl<'a> HandAnalysis<'a> {
    pub fn new(views: &'a [CardView], rules: RuleFlags) -> Self {
        let required = rules.required_len();
        Self {
            views,
            rank_groups: RankGroups::from_views(views),
            suit_info: SuitInfo::detect(views, required),
            straight_info: StraightInfo::detect(views, required, rules.max_gap()),
        }
    }

    pub fn is_flush(&self) -> bool {
        self.suit_info.is_flush()
    }

    pub fn is_straight(&self) -> bool {
        self.straight_info.is_some()
    }
}
