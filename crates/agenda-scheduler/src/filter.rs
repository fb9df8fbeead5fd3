use crate::types::{FilterResult, SelectionContext};
use agenda_core::Talk;

/// Filter predicate trait
pub trait FilterPredicate: Send + Sync {
    /// Decide whether a talk may be placed in the slot described by `context`
    fn filter(&self, context: &SelectionContext<'_>, talk: &Talk) -> FilterResult;

    /// Name of the filter
    fn name(&self) -> &str;
}

/// Rejects talks whose type is excluded from the slot
pub struct TypeNotExcluded;

impl FilterPredicate for TypeNotExcluded {
    fn filter(&self, context: &SelectionContext<'_>, talk: &Talk) -> FilterResult {
        if context.excludes(talk.talk_type()) {
            return FilterResult::fail(format!(
                "Type {} is excluded from this slot",
                talk.talk_type()
            ));
        }

        FilterResult::pass()
    }

    fn name(&self) -> &str {
        "TypeNotExcluded"
    }
}

/// Rejects talks longer than what is left of the slot budget
pub struct FitsRemainingBudget;

impl FilterPredicate for FitsRemainingBudget {
    fn filter(&self, context: &SelectionContext<'_>, talk: &Talk) -> FilterResult {
        if talk.duration() > context.remaining_budget {
            return FilterResult::fail(format!(
                "Insufficient time: needs {} min, {} min left",
                talk.duration(),
                context.remaining_budget
            ));
        }

        FilterResult::pass()
    }

    fn name(&self) -> &str {
        "FitsRemainingBudget"
    }
}

/// Get default filter predicates
pub fn default_filters() -> Vec<Box<dyn FilterPredicate>> {
    vec![Box::new(TypeNotExcluded), Box::new(FitsRemainingBudget)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_core::TalkType;

    #[test]
    fn test_type_not_excluded() {
        let exclude = [TalkType::Keynote, TalkType::Closing];
        let context = SelectionContext::new(600, &exclude);

        let result = TypeNotExcluded.filter(&context, &Talk::new(TalkType::Keynote, "Opening"));
        assert!(!result.passed);
        assert!(result.reason.unwrap().contains("KEYNOTE"));

        let result = TypeNotExcluded.filter(&context, &Talk::new(TalkType::Workshop, "Hands-on"));
        assert!(result.passed);
    }

    #[test]
    fn test_fits_remaining_budget() {
        let context = SelectionContext::new(45, &[]);

        let result =
            FitsRemainingBudget.filter(&context, &Talk::new(TalkType::Workshop, "Too long"));
        assert!(!result.passed);
        assert!(result.reason.unwrap().contains("Insufficient time"));

        let result =
            FitsRemainingBudget.filter(&context, &Talk::new(TalkType::RegularTalk, "Fits"));
        assert!(result.passed);
    }

    #[test]
    fn test_exact_fit_passes() {
        let context = SelectionContext::new(60, &[]);
        let result = FitsRemainingBudget.filter(&context, &Talk::new(TalkType::Workshop, "Exact"));
        assert!(result.passed);
    }
}
