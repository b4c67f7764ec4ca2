//! The game state aggregate.
//!
//! Every handler borrows this mutably, one at a time, through
//! [`Engine`](crate::Engine). Nothing here knows about the display.

use crate::config::{Config, FrogStart, MAX_GOALS, MAX_LANES, VEHICLES_PER_LANE};

/// One vehicle's leading edge, now and as last drawn.
///
/// Both coordinates wrap at 256; the wrap is what makes the lane loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vehicle {
    pub prev_pos: u8,
    pub pos: u8,
}

impl Vehicle {
    pub const fn parked(pos: u8) -> Self {
        Self { prev_pos: pos, pos }
    }
}

pub type LaneVehicles = [Vehicle; VEHICLES_PER_LANE];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frog {
    pub track: u8,
    pub prev_track: u8,
    /// Right edge of the hitbox.
    pub x: u8,
    pub prev_x: u8,
    /// Best track reached this life. Only ever decreases.
    pub hi_track: u8,
}

impl Frog {
    pub const fn spawn(start: FrogStart) -> Self {
        Self {
            track: start.track,
            prev_track: start.prev_track,
            x: start.x,
            prev_x: start.x,
            hi_track: start.track,
        }
    }

    /// Back to the start row. The previous position is kept so the renderer
    /// can erase the sprite where it was.
    pub fn respawn(&mut self, start: FrogStart) {
        self.x = start.x;
        self.track = start.track;
        self.hi_track = start.track;
    }

    pub const fn moved(&self) -> bool {
        self.track != self.prev_track || self.x != self.prev_x
    }

    pub fn commit(&mut self) {
        self.prev_track = self.track;
        self.prev_x = self.x;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GoalSlot {
    pub position: u8,
    pub reached: bool,
}

/// Lives, score and the debug switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Session {
    pub lives: u8,
    pub score: u16,
    pub collision_enabled: bool,
    /// Refreshes since the last stats event.
    pub fps: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    lanes: [LaneVehicles; MAX_LANES],
    lane_count: usize,
    goals: [GoalSlot; MAX_GOALS],
    goal_count: usize,
    pub frog: Frog,
    pub session: Session,
}

impl GameState {
    /// Power-up state. `config` must already have passed
    /// [`Config::validate`].
    pub fn new(config: &Config) -> Self {
        let mut lanes = [[Vehicle::default(); VEHICLES_PER_LANE]; MAX_LANES];
        for (vehicles, lane) in lanes.iter_mut().zip(config.lanes) {
            *vehicles = lane.start.map(Vehicle::parked);
        }

        let mut goals = [GoalSlot::default(); MAX_GOALS];
        for (slot, &position) in goals.iter_mut().zip(config.goals) {
            slot.position = position;
        }

        Self {
            lanes,
            lane_count: config.lanes.len().min(MAX_LANES),
            goals,
            goal_count: config.goals.len().min(MAX_GOALS),
            frog: Frog::spawn(config.frog_start),
            session: Session {
                lives: config.life_cycle.initial_lives(),
                score: 0,
                collision_enabled: true,
                fps: 0,
            },
        }
    }

    pub fn lanes(&self) -> &[LaneVehicles] {
        &self.lanes[..self.lane_count]
    }

    pub fn lanes_mut(&mut self) -> &mut [LaneVehicles] {
        &mut self.lanes[..self.lane_count]
    }

    pub fn goals(&self) -> &[GoalSlot] {
        &self.goals[..self.goal_count]
    }

    pub fn goals_mut(&mut self) -> &mut [GoalSlot] {
        &mut self.goals[..self.goal_count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_up_parks_every_vehicle() {
        let config = Config::CLASSIC;
        let state = GameState::new(&config);

        assert_eq!(state.lanes().len(), config.lanes.len());
        assert_eq!(state.lanes()[0][1], Vehicle::parked(90));
        assert_eq!(state.lanes()[2][0], Vehicle::parked(10));
        assert!(state.goals().iter().all(|g| !g.reached));
        assert_eq!(state.goals()[4].position, 208);
    }

    #[test]
    fn spawned_frog_needs_a_first_draw() {
        let frog = Frog::spawn(Config::CLASSIC.frog_start);
        assert!(frog.moved());
        assert_eq!((frog.track, frog.hi_track, frog.x), (14, 14, 126));
    }

    #[test]
    fn respawn_keeps_the_last_drawn_position() {
        let start = Config::CLASSIC.frog_start;
        let mut frog = Frog::spawn(start);
        frog.commit();
        frog.track = 6;
        frog.x = 60;
        frog.hi_track = 6;
        frog.commit();

        frog.respawn(start);
        assert_eq!((frog.track, frog.x, frog.hi_track), (14, 126, 14));
        assert_eq!((frog.prev_track, frog.prev_x), (6, 60));
    }

    #[test]
    fn endless_state_has_no_goal_slots() {
        let state = GameState::new(&Config::ENDLESS);
        assert!(state.goals().is_empty());
        assert_eq!(state.session.lives, 3);
    }
}
