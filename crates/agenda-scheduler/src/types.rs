use agenda_core::{Minutes, TalkType};

/// Selection context for one pass over the catalog
#[derive(Debug, Clone)]
pub struct SelectionContext<'a> {
    /// Minutes still free in the slot being filled
    pub remaining_budget: Minutes,
    /// Types that may not be placed in this slot
    pub exclude_types: &'a [TalkType],
}

impl<'a> SelectionContext<'a> {
    /// Create a new selection context
    pub fn new(remaining_budget: Minutes, exclude_types: &'a [TalkType]) -> Self {
        Self {
            remaining_budget,
            exclude_types,
        }
    }

    /// Whether `talk_type` is excluded from this slot
    pub fn excludes(&self, talk_type: TalkType) -> bool {
        self.exclude_types.contains(&talk_type)
    }
}

/// Result of filtering a talk
#[derive(Debug, Clone)]
pub struct FilterResult {
    /// Whether the talk passed the filter
    pub passed: bool,
    /// Reason for failure (if any)
    pub reason: Option<String>,
}

impl FilterResult {
    /// Create a passing filter result
    pub fn pass() -> Self {
        Self {
            passed: true,
            reason: None,
        }
    }

    /// Create a failing filter result
    pub fn fail(reason: String) -> Self {
        Self {
            passed: false,
            reason: Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_result() {
        let pass = FilterResult::pass();
        assert!(pass.passed);
        assert!(pass.reason.is_none());

        let fail = FilterResult::fail("Excluded type".to_string());
        assert!(!fail.passed);
        assert_eq!(fail.reason, Some("Excluded type".to_string()));
    }

    #[test]
    fn test_context_excludes() {
        let exclude = [TalkType::Keynote, TalkType::Closing];
        let context = SelectionContext::new(180, &exclude);

        assert!(context.excludes(TalkType::Keynote));
        assert!(context.excludes(TalkType::Closing));
        assert!(!context.excludes(TalkType::RegularTalk));
    }
}
