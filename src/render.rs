//! Incremental screen updates.
//!
//! Nothing is ever cleared and redrawn whole during play. Vehicles and the
//! frog repaint only the columns they entered and left since the last draw;
//! the static field is painted at round start and when a goal is taken.

use core::fmt::Write as _;

use embedded_graphics::{
    mono_font::{MonoTextStyle, MonoTextStyleBuilder, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
    text::{Baseline, Text},
};
use heapless::String;

use crate::{
    config::Config,
    state::{GameState, Session, Vehicle},
};

// HUD text positions, top-left of each string.
const FPS_AT: Point = Point::new(0, 0);
const LIVES_LABEL_AT: Point = Point::new(20, 0);
const LIVES_AT: Point = Point::new(60, 0);
const SCORE_LABEL_AT: Point = Point::new(80, 0);
const SCORE_AT: Point = Point::new(120, 0);
const COLLISION_LABEL_AT: Point = Point::new(150, 0);
const COLLISION_AT: Point = Point::new(210, 0);
const GAME_OVER_AT: Point = Point::new(100, 50);

/// Height of the strip drawn above the goal row.
const BORDER_HEIGHT: u16 = 2;

/// Columns `x0..=x1`. Reversed spans are empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Span {
    pub x0: u16,
    pub x1: u16,
}

impl Span {
    pub const fn new(x0: u8, x1: u8) -> Self {
        Self {
            x0: x0 as u16,
            x1: x1 as u16,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.x0 > self.x1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Paint {
    Vehicle,
    Background,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stroke {
    pub span: Span,
    pub paint: Paint,
}

/// The repaint for one vehicle on one refresh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VehiclePlan {
    /// Leading edge, trailing edge, wrapped tail; applied in that order.
    pub strokes: [Option<Stroke>; 3],
    /// Whether `prev_pos` catches up to `pos` afterwards.
    pub commit: bool,
}

/// Work out which columns of a vehicle changed since it was last drawn.
///
/// A forward move paints `[prev_pos, pos]` in the vehicle colour and the
/// same width one vehicle length behind in the background colour. A move
/// that looks backwards is the lane wrapping around: nothing is painted and
/// `prev_pos` just catches up. Reverse lanes mirror this on the tail edge.
///
/// While the leading edge is within one length of column 0 the body also
/// shows at the far end of the lane; that tail is patched separately when it
/// lands on screen.
pub fn plan_vehicle(speed: i8, length: u8, vehicle: Vehicle, screen_width: u16) -> VehiclePlan {
    let Vehicle { prev_pos, pos } = vehicle;
    let mut plan = VehiclePlan::default();

    if speed > 0 {
        if pos < prev_pos {
            plan.commit = true;
        } else if pos > prev_pos {
            plan.strokes[0] = Some(Stroke {
                span: Span::new(prev_pos, pos),
                paint: Paint::Vehicle,
            });
            plan.strokes[1] = Some(Stroke {
                span: Span::new(prev_pos.wrapping_sub(length), pos.wrapping_sub(length)),
                paint: Paint::Background,
            });
            plan.commit = true;
        }
    } else {
        let tail = pos.wrapping_sub(length);
        let prev_tail = prev_pos.wrapping_sub(length);
        if tail > prev_tail {
            plan.commit = true;
        } else if tail < prev_tail {
            plan.strokes[0] = Some(Stroke {
                span: Span::new(tail, prev_tail),
                paint: Paint::Vehicle,
            });
            plan.strokes[1] = Some(Stroke {
                span: Span::new(pos, prev_pos),
                paint: Paint::Background,
            });
            plan.commit = true;
        }
    }

    if pos < length {
        let near = pos.wrapping_sub(length);
        let far = prev_pos.wrapping_sub(length).wrapping_sub(1);
        if u16::from(near) < screen_width {
            plan.strokes[2] = Some(Stroke {
                span: Span::new(far, near),
                paint: if speed > 0 {
                    Paint::Background
                } else {
                    Paint::Vehicle
                },
            });
        }
    }

    plan
}

/// Draws the game through any `Rgb565` target.
#[derive(Clone, Copy, Debug)]
pub struct Renderer<'c> {
    config: &'c Config,
}

impl<'c> Renderer<'c> {
    pub const fn new(config: &'c Config) -> Self {
        Self { config }
    }

    /// Top pixel row of screen row `row`.
    fn row_top(&self, row: u16) -> u16 {
        let layout = &self.config.layout;
        row * layout.track_pitch + layout.offset_px
    }

    /// Top pixel row of a sprite standing on `track`.
    fn sprite_top(&self, track: u8) -> u16 {
        self.row_top(u16::from(track).saturating_sub(1)) + self.config.layout.lane_inset
    }

    /// Fill `x0..=x1` by `y0..=y1`, clipped to the canvas. Empty ranges
    /// draw nothing.
    fn fill<D>(&self, display: &mut D, span: Span, y0: u16, y1: u16, color: Rgb565) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let layout = &self.config.layout;
        let x1 = span.x1.min(layout.screen_width - 1);
        let y1 = y1.min(layout.screen_height - 1);
        if span.x0 > x1 || y0 > y1 {
            return Ok(());
        }
        let area = Rectangle::with_corners(
            Point::new(i32::from(span.x0), i32::from(y0)),
            Point::new(i32::from(x1), i32::from(y1)),
        );
        display.fill_solid(&area, color)
    }

    /// Full-width background rows, the goal strip and its top border.
    pub fn draw_layout<D>(&self, display: &mut D, state: &GameState) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let config = self.config;
        let full = Span {
            x0: 0,
            x1: config.layout.screen_width,
        };
        for row in 0..config.num_tracks {
            let top = self.row_top(u16::from(row));
            let bottom = self.row_top(u16::from(row) + 1);
            self.fill(display, full, top, bottom, config.row_color(row))?;
        }

        self.draw_goals(display, state)?;

        let goal_top = self.row_top(u16::from(config.goal_track));
        self.fill(
            display,
            full,
            goal_top - BORDER_HEIGHT,
            goal_top,
            config.row_color(config.goal_track),
        )
    }

    /// Goal windows, with a frog-sized marker in every captured one.
    pub fn draw_goals<D>(&self, display: &mut D, state: &GameState) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let config = self.config;
        let half_window = config.layout.unit_length / 2;
        let half_frog = config.layout.frog_size / 2;
        let top = self.row_top(u16::from(config.goal_track));
        let bottom = self.row_top(u16::from(config.goal_track) + 1);
        let marker_top = self.sprite_top(config.goal_track + 1);

        for goal in state.goals() {
            let window = Span::new(
                goal.position.saturating_sub(half_window),
                goal.position.saturating_add(half_window),
            );
            self.fill(display, window, top, bottom, config.goal_color)?;
            if goal.reached {
                let marker = Span::new(
                    goal.position.saturating_sub(half_frog),
                    goal.position.saturating_add(half_frog),
                );
                self.fill(
                    display,
                    marker,
                    marker_top,
                    marker_top + config.layout.sprite_height,
                    config.frog_color,
                )?;
            }
        }
        Ok(())
    }

    /// Repaint what every vehicle changed and mark it drawn.
    pub fn draw_vehicles<D>(&self, display: &mut D, state: &mut GameState) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let config = self.config;
        let width = config.layout.screen_width;

        for (index, (vehicles, lane)) in state.lanes_mut().iter_mut().zip(config.lanes).enumerate() {
            // Lane indices are bounded by MAX_LANES.
            let track = config.road_offset + index as u8;
            let top = self.sprite_top(track);
            let bottom = top + config.layout.sprite_height;
            let background = config.track_background(track);

            for vehicle in vehicles.iter_mut() {
                let plan = plan_vehicle(lane.speed, lane.length, *vehicle, width);
                for stroke in plan.strokes.iter().flatten() {
                    let color = match stroke.paint {
                        Paint::Vehicle => lane.color,
                        Paint::Background => background,
                    };
                    self.fill(display, stroke.span, top, bottom, color)?;
                }
                if plan.commit {
                    vehicle.prev_pos = vehicle.pos;
                }
            }
        }
        Ok(())
    }

    /// Move the frog sprite if it moved. With hit detection off it is
    /// repainted every call.
    pub fn draw_frog<D>(&self, display: &mut D, state: &mut GameState) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let config = self.config;
        let size = config.layout.frog_size;
        let height = config.layout.sprite_height;
        let frog = state.frog;

        let top = self.sprite_top(frog.track);
        let here = Span::new(frog.x.saturating_sub(size), frog.x);

        if frog.moved() {
            let prev_top = self.sprite_top(frog.prev_track);
            let there = Span::new(frog.prev_x.saturating_sub(size), frog.prev_x);
            self.fill(display, here, top, top + height, config.frog_color)?;
            self.fill(
                display,
                there,
                prev_top,
                prev_top + height,
                config.track_background(frog.prev_track),
            )?;
            state.frog.commit();
        } else if !state.session.collision_enabled {
            self.fill(display, here, top, top + height, config.frog_color)?;
        }
        Ok(())
    }

    /// Lives, score and the hit-detection flag.
    pub fn draw_hud<D>(&self, display: &mut D, session: &Session) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        text(display, "Lives:", LIVES_LABEL_AT)?;
        text(display, &field(session.lives, 3), LIVES_AT)?;
        text(display, "Score:", SCORE_LABEL_AT)?;
        text(display, &field(session.score, 3), SCORE_AT)?;
        text(display, "Collision:", COLLISION_LABEL_AT)?;
        text(display, &field(u8::from(session.collision_enabled), 1), COLLISION_AT)
    }

    pub fn draw_fps<D>(&self, display: &mut D, fps: u8) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        text(display, &field(fps, 3), FPS_AT)
    }

    pub fn draw_game_over<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        text(display, "GAME OVER", GAME_OVER_AT)
    }
}

fn hud_style() -> MonoTextStyle<'static, Rgb565> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(Rgb565::WHITE)
        .background_color(Rgb565::BLACK)
        .build()
}

fn text<D>(display: &mut D, s: &str, at: Point) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_baseline(s, at, hud_style(), Baseline::Top)
        .draw(display)
        .map(|_| ())
}

/// Zero-padded decimal, at least `width` digits.
pub fn field(value: impl Into<u32>, width: usize) -> String<8> {
    let mut s = String::new();
    // u32::MAX has ten digits; HUD values are at most five.
    write!(s, "{:0width$}", value.into()).ok();
    s
}
