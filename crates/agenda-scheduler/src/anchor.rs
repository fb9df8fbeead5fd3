use crate::catalog::TalkCatalog;
use crate::Result;
use agenda_core::{ClockTime, ScheduledTalk, Talk, TalkType};
use tracing::debug;

/// Take one talk of `talk_type` from the catalog and pin it at `fixed_time`
pub fn place_anchor(
    catalog: &mut TalkCatalog,
    talk_type: TalkType,
    fixed_time: ClockTime,
) -> Result<ScheduledTalk> {
    let talk = catalog.take_one_of_type(talk_type)?;
    debug!("Anchored {} '{}' at {}", talk_type, talk.description(), fixed_time);
    Ok(ScheduledTalk::new(fixed_time, talk))
}

/// Pin a break (lunch, tea) at `fixed_time`
///
/// A catalog talk of `talk_type` is used when one is left. Otherwise the break
/// is synthesized with an empty description.
pub fn place_break(
    catalog: &mut TalkCatalog,
    talk_type: TalkType,
    fixed_time: ClockTime,
) -> ScheduledTalk {
    let talk = catalog.take_one_of_type(talk_type).unwrap_or_else(|_| {
        debug!("No {} talk in catalog, synthesizing one at {}", talk_type, fixed_time);
        Talk::new(talk_type, "")
    });
    ScheduledTalk::new(fixed_time, talk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchedulerError;

    fn at(hhmm: u32) -> ClockTime {
        ClockTime::new(hhmm).unwrap()
    }

    #[test]
    fn test_place_anchor() {
        let mut catalog = TalkCatalog::new(vec![
            Talk::new(TalkType::RegularTalk, "regular"),
            Talk::new(TalkType::Closing, "Wrap-up"),
        ]);

        let closing = place_anchor(&mut catalog, TalkType::Closing, at(1700)).unwrap();

        assert_eq!(closing.start_time(), at(1700));
        assert_eq!(closing.end_time(), at(1730));
        assert_eq!(closing.description(), "Wrap-up");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_place_anchor_missing() {
        let mut catalog = TalkCatalog::new(vec![Talk::new(TalkType::RegularTalk, "regular")]);

        let err = place_anchor(&mut catalog, TalkType::Keynote, at(900)).unwrap_err();

        assert!(matches!(err, SchedulerError::AnchorNotFound { .. }));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_place_break_synthesized() {
        let mut catalog = TalkCatalog::new(vec![Talk::new(TalkType::RegularTalk, "regular")]);

        let lunch = place_break(&mut catalog, TalkType::Lunch, at(1230));

        assert_eq!(lunch.end_time(), at(1330));
        assert_eq!(lunch.description(), "");
        assert_eq!(lunch.to_string(), "1230 LUNCH ");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_place_break_takes_catalog_talk() {
        let mut catalog = TalkCatalog::new(vec![
            Talk::new(TalkType::Tea, "Tea and biscuits"),
            Talk::new(TalkType::RegularTalk, "regular"),
        ]);

        let tea = place_break(&mut catalog, TalkType::Tea, at(1500));

        assert_eq!((tea.start_time(), tea.end_time()), (at(1500), at(1515)));
        assert_eq!(tea.description(), "Tea and biscuits");
        assert_eq!(catalog.len(), 1);
        assert!(catalog
            .remaining()
            .iter()
            .all(|t| t.talk_type() != TalkType::Tea));
    }
}
