use crate::anchor::{place_anchor, place_break};
use crate::catalog::TalkCatalog;
use crate::merge::merge;
use crate::packer::pack;
use crate::{Result, SchedulerError};
use agenda_core::{ClockTime, Minutes, ScheduledTalk, Talk, TalkType};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Types kept out of packed slots by the default template
const FIXED_TYPES: [TalkType; 4] = [
    TalkType::Keynote,
    TalkType::Closing,
    TalkType::Lunch,
    TalkType::Tea,
];

/// One entry of a conference day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TemplateEntry {
    /// A catalog talk of `talk_type` at a fixed time (keynote, closing)
    Anchor { talk_type: TalkType, at: ClockTime },
    /// A break at a fixed time (lunch, tea), synthesized when the catalog has none
    Break { talk_type: TalkType, at: ClockTime },
    /// A budgeted window filled from the catalog
    Slot {
        start: ClockTime,
        budget_minutes: Minutes,
        #[serde(default)]
        exclude: Vec<TalkType>,
    },
}

impl TemplateEntry {
    fn slot(hours: u32, minutes: u32, budget_minutes: Minutes) -> Self {
        Self::Slot {
            start: ClockTime::hm(hours, minutes),
            budget_minutes,
            exclude: FIXED_TYPES.to_vec(),
        }
    }
}

/// What to do when a day's anchor talk is missing from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingAnchorPolicy {
    /// Abort planning with `AnchorNotFound`
    #[default]
    Fail,
    /// Leave the anchor's time empty and keep going
    LeaveGap,
}

/// Configuration for the conference planner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Number of conference days
    pub days: u32,
    /// Layout of the first track of every day
    pub day_template: Vec<TemplateEntry>,
    /// Upper bound on parallel tracks per day
    pub max_tracks_per_day: u32,
    /// Handling of days without a keynote or closing talk
    pub missing_anchor: MissingAnchorPolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            days: 2,
            day_template: vec![
                TemplateEntry::Anchor {
                    talk_type: TalkType::Keynote,
                    at: ClockTime::hm(9, 0),
                },
                TemplateEntry::slot(9, 30, 3 * 60),
                TemplateEntry::Break {
                    talk_type: TalkType::Lunch,
                    at: ClockTime::hm(12, 30),
                },
                TemplateEntry::slot(13, 30, 90),
                TemplateEntry::Break {
                    talk_type: TalkType::Tea,
                    at: ClockTime::hm(15, 0),
                },
                TemplateEntry::slot(15, 15, 105),
                TemplateEntry::Anchor {
                    talk_type: TalkType::Closing,
                    at: ClockTime::hm(17, 0),
                },
            ],
            max_tracks_per_day: 16,
            missing_anchor: MissingAnchorPolicy::Fail,
        }
    }
}

impl PlannerConfig {
    /// Parse and validate a YAML planner configuration
    pub fn from_yaml_str(data: &str) -> Result<Self> {
        let config: Self = agenda_core::from_yaml(data)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the planner cannot run
    pub fn validate(&self) -> Result<()> {
        if self.days == 0 {
            return Err(SchedulerError::invalid_config(
                "days must be at least 1",
                "Set days to the number of conference days",
            ));
        }

        if self.max_tracks_per_day == 0 {
            return Err(SchedulerError::invalid_config(
                "max_tracks_per_day must be at least 1",
                "Allow at least the base track on each day",
            ));
        }

        if !self
            .day_template
            .iter()
            .any(|e| matches!(e, TemplateEntry::Slot { .. }))
        {
            return Err(SchedulerError::invalid_config(
                "day_template has no slot entries",
                "Add at least one `kind: slot` entry so talks can be packed",
            ));
        }

        Ok(())
    }
}

/// The talks of one (day, track) pair, in time order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackSchedule {
    pub day: u32,
    pub track: u32,
    pub talks: Vec<ScheduledTalk>,
}

/// Result of a planning run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConferenceSchedule {
    /// Schedules ordered by (day, track)
    pub tracks: Vec<TrackSchedule>,
    /// Talks that could not be placed
    pub unscheduled: Vec<Talk>,
}

impl ConferenceSchedule {
    /// Whether every talk from the catalog found a place
    pub fn is_complete(&self) -> bool {
        self.unscheduled.is_empty()
    }

    pub fn track(&self, day: u32, track: u32) -> Option<&TrackSchedule> {
        self.tracks
            .iter()
            .find(|t| t.day == day && t.track == track)
    }

    /// Number of tracks planned for `day`
    pub fn track_count(&self, day: u32) -> usize {
        self.tracks.iter().filter(|t| t.day == day).count()
    }
}

/// Builds a multi-day, multi-track schedule from a talk catalog
pub struct ConferencePlanner {
    config: PlannerConfig,
}

impl ConferencePlanner {
    /// Create a new planner
    pub fn new(config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan the whole conference, consuming the catalog
    ///
    /// Track 1 of each day follows the full template. Further tracks pack only
    /// the template's slots and are merged over their day's track 1. Planning
    /// stops when the catalog is empty, when a new track packs nothing, or when
    /// the per-day track limit is reached; anything left over is reported in
    /// [`ConferenceSchedule::unscheduled`].
    pub fn plan<R: Rng + ?Sized>(
        &self,
        mut catalog: TalkCatalog,
        rng: &mut R,
    ) -> Result<ConferenceSchedule> {
        let days = self.config.days;
        info!(
            "Planning {} days from {} talks ({} min)",
            days,
            catalog.len(),
            catalog.total_minutes()
        );

        let mut schedules: BTreeMap<(u32, u32), Vec<ScheduledTalk>> = BTreeMap::new();

        for day in 1..=days {
            let base = self.build_base_day(day, &mut catalog, rng)?;
            info!("Day {} track 1: {} entries", day, base.len());
            schedules.insert((day, 1), base);
        }

        while !catalog.is_empty() {
            let n = schedules.len() as u32;
            let track = n / days + 1;
            let day = n % days + 1;

            if track > self.config.max_tracks_per_day {
                warn!(
                    "Track limit of {} per day reached with {} talks left",
                    self.config.max_tracks_per_day,
                    catalog.len()
                );
                break;
            }

            let packed = self.build_track(&mut catalog, rng);
            if packed.is_empty() {
                warn!(
                    "No remaining talk fits any slot, {} talks left unscheduled",
                    catalog.len()
                );
                break;
            }

            let base = schedules.get(&(day, 1)).ok_or_else(|| {
                SchedulerError::internal_error(format!("Day {} has no base track", day))
            })?;
            let merged = merge(base, &packed);

            info!(
                "Day {} track {}: {} talks packed, {} talks left",
                day,
                track,
                packed.len(),
                catalog.len()
            );
            schedules.insert((day, track), merged);
        }

        let tracks = schedules
            .into_iter()
            .map(|((day, track), talks)| TrackSchedule { day, track, talks })
            .collect();

        Ok(ConferenceSchedule {
            tracks,
            unscheduled: catalog.into_remaining(),
        })
    }

    /// Walk the full template for one day
    fn build_base_day<R: Rng + ?Sized>(
        &self,
        day: u32,
        catalog: &mut TalkCatalog,
        rng: &mut R,
    ) -> Result<Vec<ScheduledTalk>> {
        let mut schedule = Vec::new();

        for entry in &self.config.day_template {
            match entry {
                TemplateEntry::Anchor { talk_type, at } => {
                    match place_anchor(catalog, *talk_type, *at) {
                        Ok(anchor) => schedule.push(anchor),
                        Err(SchedulerError::AnchorNotFound { talk_type })
                            if self.config.missing_anchor == MissingAnchorPolicy::LeaveGap =>
                        {
                            warn!("Day {} has no {} talk, leaving {} empty", day, talk_type, at);
                        }
                        Err(e) => return Err(e),
                    }
                }
                TemplateEntry::Break { talk_type, at } => {
                    schedule.push(place_break(catalog, *talk_type, *at));
                }
                TemplateEntry::Slot {
                    start,
                    budget_minutes,
                    exclude,
                } => {
                    schedule.extend(pack(catalog, *budget_minutes, *start, exclude, rng));
                }
            }
        }

        Ok(schedule)
    }

    /// Pack only the template's slots, for an additional track
    fn build_track<R: Rng + ?Sized>(
        &self,
        catalog: &mut TalkCatalog,
        rng: &mut R,
    ) -> Vec<ScheduledTalk> {
        let mut packed = Vec::new();

        for entry in &self.config.day_template {
            if let TemplateEntry::Slot {
                start,
                budget_minutes,
                exclude,
            } = entry
            {
                packed.extend(pack(catalog, *budget_minutes, *start, exclude, rng));
            }
        }

        debug!("Extra track packed {} talks", packed.len());
        packed
    }
}
