//! Button snapshots.

/// The five buttons the game reads, one flag each.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub confirm: bool,
}

impl Controls {
    pub const NONE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
        confirm: false,
    };
}

/// Source of button presses, polled once per tick.
pub trait InputPoller {
    fn poll(&mut self) -> Controls;
}

/// Turns raw held levels into presses: a held button fires on the first
/// poll only.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeLatch {
    held: Controls,
}

impl EdgeLatch {
    pub const fn new() -> Self {
        Self {
            held: Controls::NONE,
        }
    }

    pub fn rising(&mut self, levels: Controls) -> Controls {
        let was = self.held;
        self.held = levels;
        Controls {
            up: levels.up && !was.up,
            down: levels.down && !was.down,
            left: levels.left && !was.left,
            right: levels.right && !was.right,
            confirm: levels.confirm && !was.confirm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_button_fires_once() {
        let mut latch = EdgeLatch::new();
        let up = Controls {
            up: true,
            ..Controls::NONE
        };

        assert!(latch.rising(up).up);
        assert!(!latch.rising(up).up);
        assert!(!latch.rising(Controls::NONE).up);
        assert!(latch.rising(up).up);
    }
}
