use crate::filter::{default_filters, FilterPredicate};
use crate::types::SelectionContext;
use crate::{Result, SchedulerError};
use agenda_core::{Minutes, Talk, TalkType};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Pool of talks that have not been scheduled yet
///
/// Talks are kept longest-first. Every `take_*` call removes what it returns,
/// so a talk is either in the catalog or in exactly one schedule.
pub struct TalkCatalog {
    talks: Vec<Talk>,
    filters: Vec<Box<dyn FilterPredicate>>,
}

impl TalkCatalog {
    /// Create a catalog, ordered longest-first
    pub fn new(mut talks: Vec<Talk>) -> Self {
        // Stable: equal durations keep source order
        talks.sort_by(|a, b| b.duration().cmp(&a.duration()));
        Self {
            talks,
            filters: default_filters(),
        }
    }

    /// Greedily take talks that fit into `total_duration` minutes
    ///
    /// Talks are scanned longest-first; a talk is selected when it passes every
    /// filter against the budget left at that point. The selection is returned
    /// in shuffled order.
    pub fn take_for_budget<R: Rng + ?Sized>(
        &mut self,
        total_duration: Minutes,
        exclude_types: &[TalkType],
        rng: &mut R,
    ) -> Vec<Talk> {
        let mut remaining_budget = total_duration;
        let mut selected = Vec::new();
        let mut retained = Vec::with_capacity(self.talks.len());

        for talk in std::mem::take(&mut self.talks) {
            let context = SelectionContext::new(remaining_budget, exclude_types);

            if self.passes_filters(&context, &talk) {
                remaining_budget -= talk.duration();
                selected.push(talk);
            } else {
                retained.push(talk);
            }
        }

        self.talks = retained;
        selected.shuffle(rng);

        debug!(
            "Selected {} talks for a {} min budget ({} min unused, {} talks left)",
            selected.len(),
            total_duration,
            remaining_budget,
            self.talks.len()
        );

        selected
    }

    /// Remove and return the first talk of `talk_type`
    pub fn take_one_of_type(&mut self, talk_type: TalkType) -> Result<Talk> {
        let index = self
            .talks
            .iter()
            .position(|t| t.talk_type() == talk_type)
            .ok_or_else(|| SchedulerError::anchor_not_found(talk_type))?;

        Ok(self.talks.remove(index))
    }

    /// Talks still waiting to be scheduled, longest first
    pub fn remaining(&self) -> &[Talk] {
        &self.talks
    }

    pub fn len(&self) -> usize {
        self.talks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.talks.is_empty()
    }

    /// Sum of the durations of all remaining talks
    pub fn total_minutes(&self) -> Minutes {
        self.talks.iter().map(Talk::duration).sum()
    }

    /// Consume the catalog, returning whatever was never scheduled
    pub fn into_remaining(self) -> Vec<Talk> {
        self.talks
    }

    fn passes_filters(&self, context: &SelectionContext<'_>, talk: &Talk) -> bool {
        for filter in &self.filters {
            let result = filter.filter(context, talk);
            if !result.passed {
                debug!(
                    "Talk '{}' skipped by {}: {}",
                    talk.description(),
                    filter.name(),
                    result.reason.unwrap_or_default()
                );
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const NO_ANCHORS: [TalkType; 2] = [TalkType::Keynote, TalkType::Closing];

    fn create_test_catalog() -> TalkCatalog {
        TalkCatalog::new(vec![
            Talk::new(TalkType::Lightning, "lightning-1"),
            Talk::new(TalkType::Keynote, "keynote-1"),
            Talk::new(TalkType::RegularTalk, "regular-1"),
            Talk::new(TalkType::Workshop, "workshop-1"),
            Talk::new(TalkType::RegularTalk, "regular-2"),
            Talk::new(TalkType::Closing, "closing-1"),
            Talk::new(TalkType::Workshop, "workshop-2"),
            Talk::new(TalkType::Lightning, "lightning-2"),
        ])
    }

    fn descriptions(talks: &[Talk]) -> Vec<&str> {
        talks.iter().map(Talk::description).collect()
    }

    #[test]
    fn test_catalog_sorted_longest_first_stable() {
        let catalog = create_test_catalog();

        assert_eq!(
            descriptions(catalog.remaining()),
            vec![
                "workshop-1",
                "workshop-2",
                "keynote-1",
                "regular-1",
                "regular-2",
                "closing-1",
                "lightning-1",
                "lightning-2",
            ]
        );
    }

    #[test]
    fn test_take_for_budget_respects_budget_and_exclusions() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut catalog = create_test_catalog();
        let before = catalog.len();

        let taken = catalog.take_for_budget(100, &NO_ANCHORS, &mut rng);

        let used: Minutes = taken.iter().map(Talk::duration).sum();
        assert!(used <= 100);
        assert!(taken.iter().all(|t| !NO_ANCHORS.contains(&t.talk_type())));
        assert_eq!(before, taken.len() + catalog.len());

        // workshop-1 (60) + regular-1 (30) leaves 10 min, too short for a lightning talk
        let mut names = descriptions(&taken);
        names.sort();
        assert_eq!(names, vec!["regular-1", "workshop-1"]);
    }

    #[test]
    fn test_take_for_budget_keeps_scanning_after_misfit() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut catalog = create_test_catalog();

        // 75: workshop-1 fits (15 left), workshop-2 and regulars do not, lightning-1 does
        let taken = catalog.take_for_budget(75, &NO_ANCHORS, &mut rng);

        let mut names = descriptions(&taken);
        names.sort();
        assert_eq!(names, vec!["lightning-1", "workshop-1"]);
        assert!(catalog
            .remaining()
            .iter()
            .any(|t| t.description() == "lightning-2"));
    }

    #[test]
    fn test_excluded_types_stay_in_catalog() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut catalog = create_test_catalog();

        let taken = catalog.take_for_budget(10_000, &NO_ANCHORS, &mut rng);

        assert_eq!(taken.len(), 6);
        assert_eq!(
            descriptions(catalog.remaining()),
            vec!["keynote-1", "closing-1"]
        );
    }

    #[test]
    fn test_take_for_budget_never_overruns_or_returns_excluded() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut catalog = TalkCatalog::new(vec![
            Talk::new(TalkType::Keynote, "keynote-1"),
            Talk::new(TalkType::Workshop, "workshop-1"),
        ]);

        let taken = catalog.take_for_budget(10, &[TalkType::Keynote], &mut rng);

        assert!(taken.is_empty());
        assert_eq!(catalog.len(), 2);

        let taken = catalog.take_for_budget(45, &[TalkType::Keynote], &mut rng);

        assert!(taken.is_empty());
        assert_eq!(
            descriptions(catalog.remaining()),
            vec!["workshop-1", "keynote-1"]
        );
    }

    #[test]
    fn test_zero_budget_takes_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut catalog = create_test_catalog();

        let taken = catalog.take_for_budget(0, &[], &mut rng);

        assert!(taken.is_empty());
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn test_take_one_of_type() {
        let mut catalog = create_test_catalog();

        let closing = catalog.take_one_of_type(TalkType::Closing).unwrap();
        assert_eq!(closing.description(), "closing-1");
        assert_eq!(catalog.len(), 7);

        let err = catalog.take_one_of_type(TalkType::Closing).unwrap_err();
        assert!(matches!(
            err,
            SchedulerError::AnchorNotFound {
                talk_type: TalkType::Closing
            }
        ));
        assert_eq!(catalog.len(), 7);
    }

    #[test]
    fn test_take_one_of_type_returns_first_in_catalog_order() {
        let mut catalog = create_test_catalog();

        let regular = catalog.take_one_of_type(TalkType::RegularTalk).unwrap();
        assert_eq!(regular.description(), "regular-1");
    }

    #[test]
    fn test_totals() {
        let catalog = create_test_catalog();
        assert_eq!(catalog.total_minutes(), 15 + 30 + 30 + 60 + 30 + 30 + 60 + 15);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.into_remaining().len(), 8);
    }
}
