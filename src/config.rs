//! Level layout and rule parameters.
//!
//! There is exactly one level. The two rule sets the firmware can be built
//! with differ only in the values below: [`Config::CLASSIC`] has goal slots
//! and a finite number of lives, [`Config::ENDLESS`] has neither.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use crate::error::ConfigError;

/// Vehicles per lane. Never created or destroyed, only moved.
pub const VEHICLES_PER_LANE: usize = 3;

/// Capacity of the lane table in [`GameState`](crate::GameState).
pub const MAX_LANES: usize = 16;

/// Capacity of the goal table in [`GameState`](crate::GameState).
pub const MAX_GOALS: usize = 8;

/// Pixel geometry of the logical canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub screen_width: u16,
    pub screen_height: u16,
    /// Height of one track row.
    pub track_pitch: u16,
    /// Vertical offset of row 0.
    pub offset_px: u16,
    /// Gap between the top of a row and the sprites drawn in it.
    pub lane_inset: u16,
    /// Height of vehicles and of the frog, minus one.
    pub sprite_height: u16,
    /// Width of the frog hitbox.
    pub frog_size: u8,
    /// Horizontal distance of one frog hop.
    pub frog_step: u8,
    /// Base vehicle length and goal window width.
    pub unit_length: u8,
}

impl Layout {
    pub const DEFAULT: Self = Self {
        screen_width: 240,
        screen_height: 320,
        track_pitch: 22,
        offset_px: 12,
        lane_inset: 5,
        sprite_height: 12,
        frog_size: 12,
        frog_step: 22,
        unit_length: 20,
    };
}

/// Constants of one road lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaneConfig {
    /// Pixels per tick; the sign is the direction of travel.
    pub speed: i8,
    pub length: u8,
    pub color: Rgb565,
    /// Leading edge of each vehicle at power-up.
    pub start: [u8; VEHICLES_PER_LANE],
}

impl LaneConfig {
    const fn new(speed: i8, length: u8, color: Rgb565, start: [u8; VEHICLES_PER_LANE]) -> Self {
        Self {
            speed,
            length,
            color,
            start,
        }
    }
}

/// Where the frog appears at the start of every life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrogStart {
    pub x: u8,
    pub track: u8,
    /// Seeded different from `track` so the first refresh paints the frog.
    pub prev_track: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LifeCycle {
    /// Losing the last life ends the round until confirm is pressed.
    Finite { lives: u8 },
    /// Deaths only count down; the round never ends.
    Endless { lives: u8 },
}

impl LifeCycle {
    pub const fn initial_lives(self) -> u8 {
        match self {
            Self::Finite { lives } | Self::Endless { lives } => lives,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scoring {
    /// Awarded each time the frog reaches a new best row.
    pub movement: u16,
    /// Awarded for capturing a goal slot.
    pub goal: u16,
}

/// Periods of the three event sources, in microseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub refresh_us: u32,
    pub tick_us: u32,
    pub stats_us: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub layout: Layout,
    /// Track index of the start row; tracks count down towards the goals.
    pub num_tracks: u8,
    /// First track that carries road lane 0.
    pub road_offset: u8,
    /// Track of the goal strip.
    pub goal_track: u8,
    /// Background colour per screen row.
    pub track_colors: &'static [Rgb565],
    pub lanes: &'static [LaneConfig],
    /// Centre of each goal window. Empty when the level has no goals.
    pub goals: &'static [u8],
    pub goal_color: Rgb565,
    pub frog_color: Rgb565,
    pub frog_start: FrogStart,
    pub life_cycle: LifeCycle,
    pub scoring: Scoring,
    /// Whether the confirm button toggles hit detection during play.
    pub debug_toggle: bool,
    pub reset_score_on_restart: bool,
    pub timing: Timing,
}

const TRACK_COLORS: [Rgb565; 14] = [
    Rgb565::BLACK,
    Rgb565::CSS_FOREST_GREEN,
    Rgb565::CSS_DARK_BLUE,
    Rgb565::CSS_DARK_BLUE,
    Rgb565::CSS_DARK_BLUE,
    Rgb565::CSS_DARK_BLUE,
    Rgb565::CSS_DARK_BLUE,
    Rgb565::CSS_DARK_VIOLET,
    Rgb565::BLACK,
    Rgb565::BLACK,
    Rgb565::BLACK,
    Rgb565::BLACK,
    Rgb565::BLACK,
    Rgb565::CSS_DARK_VIOLET,
];

const SPREAD: [u8; VEHICLES_PER_LANE] = [40, 90, 150];
const STAGGER: [u8; VEHICLES_PER_LANE] = [10, 90, 160];

const ROAD_LANES: [LaneConfig; 11] = [
    LaneConfig::new(1, 40, Rgb565::CSS_BURLY_WOOD, SPREAD),
    LaneConfig::new(-2, 40, Rgb565::RED, SPREAD),
    LaneConfig::new(3, 20, Rgb565::CSS_BURLY_WOOD, STAGGER),
    LaneConfig::new(1, 20, Rgb565::CSS_BURLY_WOOD, SPREAD),
    LaneConfig::new(-2, 20, Rgb565::RED, SPREAD),
    // Median: parked, zero-length vehicles.
    LaneConfig::new(0, 0, Rgb565::BLACK, SPREAD),
    LaneConfig::new(-1, 40, Rgb565::CSS_GOLD, SPREAD),
    LaneConfig::new(3, 40, Rgb565::CSS_GREEN_YELLOW, STAGGER),
    LaneConfig::new(-2, 20, Rgb565::CSS_PALE_TURQUOISE, SPREAD),
    LaneConfig::new(2, 20, Rgb565::CSS_CRIMSON, SPREAD),
    LaneConfig::new(1, 20, Rgb565::CSS_LAVENDER, SPREAD),
];

const GOAL_POSITIONS: [u8; 5] = [32, 76, 120, 164, 208];

impl Config {
    /// Five goal slots, three lives, game over when they run out.
    pub const CLASSIC: Self = Self {
        layout: Layout::DEFAULT,
        num_tracks: 14,
        road_offset: 3,
        goal_track: 1,
        track_colors: &TRACK_COLORS,
        lanes: &ROAD_LANES,
        goals: &GOAL_POSITIONS,
        goal_color: Rgb565::CSS_DARK_GREEN,
        frog_color: Rgb565::CSS_LIME_GREEN,
        frog_start: FrogStart {
            x: 120 + 12 / 2,
            track: 14,
            prev_track: 13,
        },
        life_cycle: LifeCycle::Finite { lives: 3 },
        scoring: Scoring {
            movement: 10,
            goal: 100,
        },
        debug_toggle: true,
        reset_score_on_restart: false,
        timing: Timing {
            refresh_us: 1_000_000 / 61,
            tick_us: 31_250,
            stats_us: 1_000_000,
        },
    };

    /// No goals and no game over; deaths only count the lives display down.
    pub const ENDLESS: Self = Self {
        goals: &[],
        life_cycle: LifeCycle::Endless { lives: 3 },
        ..Self::CLASSIC
    };

    /// Check the tables against the fixed capacities of the game state.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lanes.len() > MAX_LANES {
            return Err(ConfigError::TooManyLanes {
                lanes: self.lanes.len(),
                max: MAX_LANES,
            });
        }
        if self.goals.len() > MAX_GOALS {
            return Err(ConfigError::TooManyGoals {
                goals: self.goals.len(),
                max: MAX_GOALS,
            });
        }
        if usize::from(self.road_offset) + self.lanes.len() != usize::from(self.num_tracks) {
            return Err(ConfigError::RoadBandMismatch {
                road_offset: self.road_offset,
                lanes: self.lanes.len(),
                num_tracks: self.num_tracks,
            });
        }
        if self.track_colors.len() < usize::from(self.num_tracks) {
            return Err(ConfigError::MissingTrackColors {
                colors: self.track_colors.len(),
                rows: usize::from(self.num_tracks),
            });
        }
        let start = self.frog_start;
        if start.track == 0
            || start.track > self.num_tracks
            || start.prev_track == 0
            || start.prev_track > self.num_tracks
        {
            return Err(ConfigError::StartOutOfRange {
                track: start.track,
                num_tracks: self.num_tracks,
            });
        }
        if self.goal_track == 0 || self.goal_track.saturating_add(1) >= self.road_offset {
            return Err(ConfigError::GoalTrackOutOfRange {
                goal_track: self.goal_track,
                num_tracks: self.num_tracks,
            });
        }
        Ok(())
    }

    /// Highest (numerically lowest) track the frog may hop up to.
    pub const fn top_track(&self) -> u8 {
        self.goal_track.saturating_add(1)
    }

    pub fn has_goals(&self) -> bool {
        !self.goals.is_empty()
    }

    /// Road lane under `track`, if the track is inside the road band.
    pub fn lane_at(&self, track: u8) -> Option<usize> {
        if self.road_offset <= track && track < self.num_tracks {
            Some(usize::from(track - self.road_offset))
        } else {
            None
        }
    }

    /// Background colour of screen row `row`.
    pub fn row_color(&self, row: u8) -> Rgb565 {
        self.track_colors
            .get(usize::from(row))
            .copied()
            .unwrap_or(Rgb565::BLACK)
    }

    /// Background colour behind a sprite standing on `track`.
    ///
    /// Sprites on track `t` are drawn into screen row `t - 1`.
    pub fn track_background(&self, track: u8) -> Rgb565 {
        self.row_color(track.wrapping_sub(1))
    }
}
