use core::fmt;

/// A level configuration that does not fit the engine's fixed state tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    TooManyLanes { lanes: usize, max: usize },
    TooManyGoals { goals: usize, max: usize },
    RoadBandMismatch { road_offset: u8, lanes: usize, num_tracks: u8 },
    MissingTrackColors { colors: usize, rows: usize },
    StartOutOfRange { track: u8, num_tracks: u8 },
    GoalTrackOutOfRange { goal_track: u8, num_tracks: u8 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyLanes { lanes, max } => {
                write!(f, "too many road lanes: {lanes} (capacity {max})")
            }
            Self::TooManyGoals { goals, max } => {
                write!(f, "too many goal slots: {goals} (capacity {max})")
            }
            Self::RoadBandMismatch {
                road_offset,
                lanes,
                num_tracks,
            } => write!(
                f,
                "road band mismatch: offset {road_offset} + {lanes} lanes != {num_tracks} tracks"
            ),
            Self::MissingTrackColors { colors, rows } => {
                write!(f, "track colour table has {colors} entries, need {rows}")
            }
            Self::StartOutOfRange { track, num_tracks } => {
                write!(f, "start track {track} outside 1..={num_tracks}")
            }
            Self::GoalTrackOutOfRange {
                goal_track,
                num_tracks,
            } => write!(
                f,
                "goal track {goal_track} leaves no room below it in {num_tracks} tracks"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}
