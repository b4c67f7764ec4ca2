//! Player movement, goal capture and movement scoring.

use crate::{config::Config, state::GameState};

/// What an upward hop did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Hop {
    /// Already on the top track.
    Blocked,
    Moved,
    /// Reached a new best track; the movement bonus was paid.
    NewBest,
    /// Captured the goal slot at this index and respawned.
    Captured(usize),
}

pub fn step_left(state: &mut GameState, config: &Config) {
    let step = config.layout.frog_step;
    if state.frog.x > step {
        state.frog.x -= step;
    }
}

pub fn step_right(state: &mut GameState, config: &Config) {
    let step = config.layout.frog_step;
    if u16::from(state.frog.x) < config.layout.screen_width - u16::from(step) {
        state.frog.x = state.frog.x.saturating_add(step);
    }
}

pub fn hop_down(state: &mut GameState, config: &Config) {
    if state.frog.track < config.num_tracks {
        state.frog.track += 1;
    }
}

/// Hop towards the goals.
///
/// From the row just below the goal strip the frog first tries to land in an
/// unclaimed slot it is lined up with. A capture respawns it; otherwise it
/// climbs one track like anywhere else.
pub fn hop_up(state: &mut GameState, config: &Config) -> Hop {
    if state.frog.track <= config.top_track() {
        return Hop::Blocked;
    }

    if state.frog.track == config.goal_track + 2 {
        if let Some(slot) = aligned_goal(state, config) {
            state.goals_mut()[slot].reached = true;
            state.frog.respawn(config.frog_start);
            state.session.score = state.session.score.wrapping_add(config.scoring.goal);
            return Hop::Captured(slot);
        }
    }

    state.frog.track -= 1;
    if state.frog.track < state.frog.hi_track {
        state.frog.hi_track = state.frog.track;
        state.session.score = state.session.score.wrapping_add(config.scoring.movement);
        Hop::NewBest
    } else {
        Hop::Moved
    }
}

/// First unclaimed goal whose window strictly contains the frog's `x`.
fn aligned_goal(state: &GameState, config: &Config) -> Option<usize> {
    let half = i16::from(config.layout.unit_length / 2);
    let x = i16::from(state.frog.x);
    state.goals().iter().position(|goal| {
        let centre = i16::from(goal.position);
        !goal.reached && centre - half < x && x < centre + half
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> (Config, GameState) {
        let config = Config::CLASSIC;
        let state = GameState::new(&config);
        (config, state)
    }

    #[test]
    fn sideways_steps_stop_at_the_edges() {
        let (config, mut state) = classic();
        for _ in 0..20 {
            step_left(&mut state, &config);
        }
        assert_eq!(state.frog.x, 16);

        for _ in 0..20 {
            step_right(&mut state, &config);
        }
        assert_eq!(state.frog.x, 236);
        assert!(u16::from(state.frog.x) <= config.layout.screen_width);
    }

    #[test]
    fn climbing_pays_once_per_new_best() {
        let (config, mut state) = classic();

        assert_eq!(hop_up(&mut state, &config), Hop::NewBest);
        assert_eq!(state.session.score, 10);

        hop_down(&mut state, &config);
        assert_eq!(state.frog.track, 14);
        assert_eq!(hop_up(&mut state, &config), Hop::Moved);
        assert_eq!(state.session.score, 10);

        assert_eq!(hop_up(&mut state, &config), Hop::NewBest);
        assert_eq!(state.frog.hi_track, 12);
        assert_eq!(state.session.score, 20);
    }

    #[test]
    fn high_water_mark_never_rises() {
        let (config, mut state) = classic();
        let mut best = state.frog.hi_track;
        let moves = [0, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 1, 0];
        for m in moves {
            if m == 0 {
                hop_up(&mut state, &config);
            } else {
                hop_down(&mut state, &config);
            }
            assert!(state.frog.hi_track <= best);
            best = state.frog.hi_track;
        }
    }

    #[test]
    fn down_stops_at_the_start_row() {
        let (config, mut state) = classic();
        hop_down(&mut state, &config);
        assert_eq!(state.frog.track, config.num_tracks);
    }

    #[test]
    fn aligned_hop_captures_goal() {
        let (config, mut state) = classic();
        state.frog.track = 3;
        state.frog.hi_track = 3;
        state.frog.x = 126;

        assert_eq!(hop_up(&mut state, &config), Hop::Captured(2));
        assert!(state.goals()[2].reached);
        assert_eq!(state.session.score, 100);
        assert_eq!((state.frog.track, state.frog.x, state.frog.hi_track), (14, 126, 14));
    }

    #[test]
    fn claimed_goal_is_not_captured_twice() {
        let (config, mut state) = classic();
        state.goals_mut()[2].reached = true;
        state.frog.track = 3;
        state.frog.hi_track = 3;
        state.frog.x = 126;

        assert_eq!(hop_up(&mut state, &config), Hop::NewBest);
        assert_eq!(state.session.score, 10);
        assert_eq!(state.goals().iter().filter(|g| g.reached).count(), 1);
        assert_eq!(state.frog.track, 2);
    }

    #[test]
    fn goal_window_is_exclusive() {
        let (config, mut state) = classic();
        state.frog.track = 3;
        state.frog.x = 130;
        assert_ne!(hop_up(&mut state, &config), Hop::Captured(2));
    }

    #[test]
    fn top_track_blocks() {
        let (config, mut state) = classic();
        state.frog.track = 2;
        assert_eq!(hop_up(&mut state, &config), Hop::Blocked);
        assert_eq!(state.frog.track, 2);
    }

    #[test]
    fn without_goals_the_frog_just_climbs() {
        let config = Config::ENDLESS;
        let mut state = GameState::new(&config);
        state.frog.track = 3;
        state.frog.x = 126;
        assert_eq!(hop_up(&mut state, &config), Hop::NewBest);
        assert_eq!(state.frog.track, 2);
    }
}
