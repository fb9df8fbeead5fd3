use agenda_core::ScheduledTalk;
use std::collections::VecDeque;

/// Interleave a track's talks into a base day schedule
///
/// Both inputs are ordered by start time. While both have entries, a `track`
/// entry that starts inside the current `base` entry's window
/// (`[start, end)`) is emitted in its place and both heads advance; otherwise
/// the `base` entry is emitted. Whatever is left on either side is appended.
pub fn merge(base: &[ScheduledTalk], track: &[ScheduledTalk]) -> Vec<ScheduledTalk> {
    let mut a = sorted(base);
    let mut b = sorted(track);
    let mut merged = Vec::with_capacity(a.len() + b.len());

    loop {
        match (a.front(), b.front()) {
            (Some(anchor), Some(talk)) => {
                if anchor.covers(talk.start_time()) {
                    a.pop_front();
                    merged.extend(b.pop_front());
                } else {
                    merged.extend(a.pop_front());
                }
            }
            (Some(_), None) => {
                merged.extend(a);
                break;
            }
            (None, Some(_)) => {
                merged.extend(b);
                break;
            }
            (None, None) => break,
        }
    }

    merged
}

fn sorted(schedule: &[ScheduledTalk]) -> VecDeque<ScheduledTalk> {
    let mut items = schedule.to_vec();
    items.sort_by_key(ScheduledTalk::start_time);
    items.into()
}
