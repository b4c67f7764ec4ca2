//! Lives, deaths and the round life cycle.

use crate::{
    config::{Config, LifeCycle},
    state::{Frog, GameState},
};

/// What a death did to the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Death {
    /// A life was spent and the frog is back at the start.
    Respawned,
    /// Endless rules: as `Respawned`, but hit detection stays off until
    /// [`GameState::resume_collision`] is called once the redraw is done.
    Suspended,
    /// The last life is gone.
    GameOver,
}

impl GameState {
    pub fn on_death(&mut self, config: &Config) -> Death {
        match config.life_cycle {
            LifeCycle::Finite { .. } => {
                self.session.lives = self.session.lives.saturating_sub(1);
                self.frog.respawn(config.frog_start);
                if self.session.lives == 0 {
                    Death::GameOver
                } else {
                    Death::Respawned
                }
            }
            LifeCycle::Endless { .. } => {
                self.session.collision_enabled = false;
                // No floor: the counter rolls over after enough deaths.
                self.session.lives = self.session.lives.wrapping_sub(1);
                self.frog.respawn(config.frog_start);
                Death::Suspended
            }
        }
    }

    pub fn resume_collision(&mut self) {
        self.session.collision_enabled = true;
    }

    pub fn toggle_collision(&mut self) -> bool {
        self.session.collision_enabled = !self.session.collision_enabled;
        self.session.collision_enabled
    }

    /// True once a finite-lives round has run out.
    pub fn is_over(&self, config: &Config) -> bool {
        matches!(config.life_cycle, LifeCycle::Finite { .. }) && self.session.lives == 0
    }

    /// Start a new round after game over.
    ///
    /// Lives are refilled, every goal is released and the frog starts over.
    /// Vehicles keep driving from wherever they are.
    pub fn restart(&mut self, config: &Config) {
        self.session.lives = config.life_cycle.initial_lives();
        if config.reset_score_on_restart {
            self.session.score = 0;
        }
        for goal in self.goals_mut() {
            goal.reached = false;
        }
        self.frog = Frog::spawn(config.frog_start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_deaths_end_a_classic_round() {
        let config = Config::CLASSIC;
        let mut state = GameState::new(&config);

        assert_eq!(state.on_death(&config), Death::Respawned);
        assert_eq!(state.on_death(&config), Death::Respawned);
        assert!(!state.is_over(&config));
        assert_eq!(state.on_death(&config), Death::GameOver);
        assert!(state.is_over(&config));
    }

    #[test]
    fn death_respawns_without_touching_score() {
        let config = Config::CLASSIC;
        let mut state = GameState::new(&config);
        state.session.score = 40;
        state.frog.track = 5;
        state.frog.hi_track = 5;

        state.on_death(&config);
        assert_eq!(state.session.score, 40);
        assert_eq!(state.session.lives, 2);
        assert_eq!((state.frog.track, state.frog.hi_track), (14, 14));
    }

    #[test]
    fn endless_counter_rolls_over() {
        let config = Config::ENDLESS;
        let mut state = GameState::new(&config);

        for _ in 0..4 {
            assert_eq!(state.on_death(&config), Death::Suspended);
            assert!(!state.session.collision_enabled);
            state.resume_collision();
        }
        assert_eq!(state.session.lives, 255);
        assert!(!state.is_over(&config));
    }

    #[test]
    fn restart_refills_lives_and_clears_goals() {
        let config = Config::CLASSIC;
        let mut state = GameState::new(&config);
        state.goals_mut()[0].reached = true;
        state.goals_mut()[3].reached = true;
        state.session.score = 230;
        while state.on_death(&config) != Death::GameOver {}

        state.restart(&config);
        assert_eq!(state.session.lives, 3);
        assert_eq!(state.session.score, 230);
        assert!(state.goals().iter().all(|g| !g.reached));
        assert_eq!(state.frog, Frog::spawn(config.frog_start));
    }

    #[test]
    fn restart_can_reset_score() {
        let config = Config {
            reset_score_on_restart: true,
            ..Config::CLASSIC
        };
        let mut state = GameState::new(&config);
        state.session.score = 230;
        state.restart(&config);
        assert_eq!(state.session.score, 0);
    }

    #[test]
    fn toggle_flips_hit_detection() {
        let mut state = GameState::new(&Config::CLASSIC);
        assert!(!state.toggle_collision());
        assert!(state.toggle_collision());
    }
}
