//! Event dispatch.
//!
//! The three event sources never touch the game state themselves. Each event
//! is handed to [`Engine::dispatch`], which runs the matching handler to
//! completion before the next one starts, so every handler sees the state
//! whole.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use crate::{
    collision,
    config::Config,
    error::ConfigError,
    frog::{self, Hop},
    input::InputPoller,
    render::Renderer,
    session::Death,
    state::GameState,
    traffic,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Display frame boundary: repaint what moved.
    Refresh,
    /// Game logic step: read buttons, move traffic, test for hits.
    Tick,
    /// Slow HUD refresh and frame counter report.
    Stats,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Playing,
    GameOver,
}

pub struct Engine<'c> {
    config: &'c Config,
    renderer: Renderer<'c>,
    state: GameState,
}

impl<'c> Engine<'c> {
    pub fn new(config: &'c Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            renderer: Renderer::new(config),
            state: GameState::new(config),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> Phase {
        if self.state.is_over(self.config) {
            Phase::GameOver
        } else {
            Phase::Playing
        }
    }

    /// Paint the field and HUD for a fresh round.
    pub fn start_round<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        info!(
            "round started: {} lives, score {}",
            self.state.session.lives,
            self.state.session.score
        );
        self.renderer.draw_layout(display, &self.state)?;
        self.renderer.draw_hud(display, &self.state.session)
    }

    /// Run the handler for `event`.
    ///
    /// A lost round is terminal: refresh and stats are ignored, and a tick
    /// only reads the buttons and waits for confirm to start a new round.
    pub fn dispatch<D, I>(&mut self, event: Event, display: &mut D, input: &mut I) -> Result<Phase, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
        I: InputPoller,
    {
        if self.phase() == Phase::GameOver {
            if event == Event::Tick && input.poll().confirm {
                self.restart(display)?;
            }
            return Ok(self.phase());
        }
        match event {
            Event::Refresh => self.on_refresh(display)?,
            Event::Tick => self.on_tick(display, input)?,
            Event::Stats => self.on_stats(display)?,
        }
        Ok(self.phase())
    }

    fn on_refresh<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.renderer.draw_vehicles(display, &mut self.state)?;
        self.renderer.draw_frog(display, &mut self.state)?;
        self.state.session.fps = self.state.session.fps.wrapping_add(1);
        Ok(())
    }

    fn on_tick<D, I>(&mut self, display: &mut D, input: &mut I) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
        I: InputPoller,
    {
        let config = self.config;
        let controls = input.poll();

        if controls.confirm && config.debug_toggle {
            let enabled = self.state.toggle_collision();
            info!("collision {}", enabled);
            self.renderer.draw_hud(display, &self.state.session)?;
        }
        if controls.left {
            frog::step_left(&mut self.state, config);
        }
        if controls.right {
            frog::step_right(&mut self.state, config);
        }
        if controls.up {
            match frog::hop_up(&mut self.state, config) {
                Hop::Captured(slot) => {
                    debug!("goal {} captured", slot);
                    self.renderer.draw_goals(display, &self.state)?;
                    self.redraw_sprites(display)?;
                    self.renderer.draw_hud(display, &self.state.session)?;
                }
                Hop::NewBest => self.renderer.draw_hud(display, &self.state.session)?,
                Hop::Moved | Hop::Blocked => {}
            }
        }
        if controls.down {
            frog::hop_down(&mut self.state, config);
        }

        traffic::advance(self.state.lanes_mut(), config.lanes);

        if let Some(lane) = collision::check(&self.state, config) {
            debug!("hit on lane {}", lane);
            self.on_death(display)?;
        }
        Ok(())
    }

    fn on_death<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let death = self.state.on_death(self.config);
        self.redraw_sprites(display)?;
        self.renderer.draw_hud(display, &self.state.session)?;
        match death {
            Death::Respawned => {}
            Death::Suspended => self.state.resume_collision(),
            Death::GameOver => {
                info!("game over, score {}", self.state.session.score);
                self.renderer.draw_game_over(display)?;
            }
        }
        Ok(())
    }

    fn on_stats<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        trace!("fps {}", self.state.session.fps);
        self.renderer.draw_hud(display, &self.state.session)?;
        self.renderer.draw_fps(display, self.state.session.fps)?;
        self.state.session.fps = 0;
        Ok(())
    }

    /// Frog first, then traffic, as after any respawn.
    fn redraw_sprites<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.renderer.draw_frog(display, &mut self.state)?;
        self.renderer.draw_vehicles(display, &mut self.state)
    }

    /// New round after game over: lives refilled, goals cleared, field
    /// repainted.
    fn restart<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.state.restart(self.config);
        self.start_round(display)
    }
}
