use crate::catalog::TalkCatalog;
use agenda_core::{ClockTime, Minutes, ScheduledTalk, Talk, TalkType};
use rand::Rng;
use tracing::debug;

/// Fill a slot of `total_duration` minutes starting at `start_time`
///
/// Selected talks are removed from the catalog and laid out back to back:
/// the first starts at `start_time` and each next one starts when the
/// previous ends. Which talk lands where depends on `rng`.
pub fn pack<R: Rng + ?Sized>(
    catalog: &mut TalkCatalog,
    total_duration: Minutes,
    start_time: ClockTime,
    exclude_types: &[TalkType],
    rng: &mut R,
) -> Vec<ScheduledTalk> {
    let talks = catalog.take_for_budget(total_duration, exclude_types, rng);
    let scheduled = lay_out(start_time, talks);

    debug!(
        "Packed slot at {} ({} min): {} talks",
        start_time,
        total_duration,
        scheduled.len()
    );

    scheduled
}

/// Assign contiguous start times to `talks` in the given order
pub fn lay_out(start_time: ClockTime, talks: Vec<Talk>) -> Vec<ScheduledTalk> {
    let mut clock = start_time;
    talks
        .into_iter()
        .map(|talk| {
            let scheduled = ScheduledTalk::new(clock, talk);
            clock = scheduled.end_time();
            scheduled
        })
        .collect()
}
