//! D-pad plus joystick click, the five buttons the game reads.
//!
//! The buttons are sampled once per tick and turned into press edges, so a
//! held button acts once and bounces shorter than a tick are never seen.

use esp_hal::gpio::{
    Input,
    InputConfig,
    Pull,
};

use crate::{
    ButtonResources,
    input::{
        Controls,
        EdgeLatch,
        InputPoller,
    },
};

/// The game's buttons. All are active low.
pub struct Buttons {
    pub up: Input<'static>,
    pub down: Input<'static>,
    pub left: Input<'static>,
    pub right: Input<'static>,
    /// Joystick click.
    pub confirm: Input<'static>,
    latch: EdgeLatch,
}

impl From<ButtonResources<'static>> for Buttons {
    fn from(res: ButtonResources<'static>) -> Self {
        let pull_up = InputConfig::default().with_pull(Pull::Up);
        Self {
            up: Input::new(res.up, pull_up),
            down: Input::new(res.down, pull_up),
            left: Input::new(res.left, pull_up),
            right: Input::new(res.right, pull_up),
            confirm: Input::new(res.confirm, pull_up),
            latch: EdgeLatch::new(),
        }
    }
}

impl Buttons {
    /// Which buttons are held right now.
    pub fn levels(&self) -> Controls {
        Controls {
            up: self.up.is_low(),
            down: self.down.is_low(),
            left: self.left.is_low(),
            right: self.right.is_low(),
            confirm: self.confirm.is_low(),
        }
    }
}

impl InputPoller for Buttons {
    fn poll(&mut self) -> Controls {
        let levels = self.levels();
        self.latch.rising(levels)
    }
}
