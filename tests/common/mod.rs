#![allow(dead_code)]

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};
use frogger_badge::{Controls, InputPoller};

pub const W: usize = 240;
pub const H: usize = 320;

/// Framebuffer that also keeps a log of every rectangle fill.
pub struct Screen {
    pixels: Vec<Rgb565>,
    pub fills: Vec<(Rectangle, Rgb565)>,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            pixels: vec![Rgb565::BLACK; W * H],
            fills: Vec::new(),
        }
    }

    pub fn at(&self, x: usize, y: usize) -> Rgb565 {
        self.pixels[y * W + x]
    }

    /// Fills whose top row is `y`, as inclusive column ranges.
    pub fn fills_in_row(&self, y: i32) -> Vec<(i32, i32, Rgb565)> {
        self.fills
            .iter()
            .filter(|(r, _)| r.top_left.y == y)
            .map(|(r, c)| (r.top_left.x, r.top_left.x + r.size.width as i32 - 1, *c))
            .collect()
    }
}

impl DrawTarget for Screen {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x >= 0 && (x as usize) < W && y >= 0 && (y as usize) < H {
                self.pixels[y as usize * W + x as usize] = color;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.fills.push((*area, color));
        self.draw_iter(area.points().map(|p| Pixel(p, color)))
    }
}

impl OriginDimensions for Screen {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

/// Replays a fixed list of presses, then nothing.
#[derive(Default)]
pub struct Script(Vec<Controls>);

impl Script {
    pub fn push(&mut self, controls: Controls) {
        self.0.push(controls);
    }
}

impl InputPoller for Script {
    fn poll(&mut self) -> Controls {
        if self.0.is_empty() {
            Controls::NONE
        } else {
            self.0.remove(0)
        }
    }
}

pub fn up() -> Controls {
    Controls {
        up: true,
        ..Controls::NONE
    }
}

pub fn confirm() -> Controls {
    Controls {
        confirm: true,
        ..Controls::NONE
    }
}
