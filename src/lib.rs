//! # frogger-badge
//!
//! A lane-crossing arcade game for the Disobey 2026 badge.
//!
//! The engine is portable and draws through any `embedded-graphics` target:
//! - **Traffic**: per-lane vehicles on 8-bit wrapping positions, so every
//!   lane loops without bookkeeping
//! - **Renderer**: dirty-rectangle updates; only columns that changed are
//!   repainted
//! - **Frog**: hop movement, goal capture, movement scoring
//! - **Collision**: per-tick hit test against the frog's lane
//! - **Session**: lives, score, game over and restart
//! - **Engine**: one dispatcher for the refresh, tick and stats events
//!
//! With the `badge` feature the crate also binds the badge's ST7789 panel and
//! D-pad, and builds the `frogger` firmware.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let mut engine = frogger_badge::Engine::new(&frogger_badge::Config::CLASSIC)?;
//! engine.start_round(&mut display)?;
//! loop {
//!     let event = next_event().await;
//!     if engine.dispatch(event, &mut display, &mut buttons)? == Phase::GameOver {
//!         break;
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod canvas;
pub mod collision;
pub mod config;
pub mod engine;
mod error;
pub mod frog;
pub mod input;
pub mod render;
pub mod session;
pub mod state;
pub mod traffic;

pub use canvas::FitWidth;
pub use config::{Config, LifeCycle};
pub use engine::{Engine, Event, Phase};
pub use error::ConfigError;
pub use input::{Controls, EdgeLatch, InputPoller};
pub use state::{Frog, GameState, GoalSlot, Session, Vehicle};

#[cfg(feature = "badge")]
mod buttons;
#[cfg(feature = "badge")]
mod display;

#[cfg(feature = "badge")]
pub use buttons::Buttons;
#[cfg(feature = "badge")]
pub use display::{Display, PANEL_SIZE};
#[cfg(feature = "badge")]
use esp_hal::{
    assign_resources,
    clock::{
        Clock,
        CpuClock,
    },
    rom,
};

/// StaticCell helper: allocates a value into a `static` exactly once.
#[cfg(feature = "badge")]
#[macro_export]
macro_rules! mk_static {
    ($t:ty, $val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write($val);
        x
    }};
}

// ── Pin / peripheral assignments ────────────────────────────────────────────

#[cfg(feature = "badge")]
assign_resources! {
    pub Resources<'d> {
        display: DisplayResources<'d> {
            dc: GPIO15,
            rst: GPIO7,
            sck: GPIO4,
            cs: GPIO6,
            miso: GPIO16,
            mosi: GPIO5,
            spi: SPI2,
            dma: DMA_CH0,
            backlight: GPIO19,
        },
        buttons: ButtonResources<'d> {
            up: GPIO11,
            down: GPIO1,
            left: GPIO21,
            right: GPIO2,
            confirm: GPIO14,
        },
    }
}

// ── Board initialisation ────────────────────────────────────────────────────

/// Minimal CPU clock switcher for ESP32-S3.
///
/// Steps through an intermediate frequency before reaching the target,
/// which is required by the hardware.
#[cfg(feature = "badge")]
fn set_cpu_clock(cpu_clock_speed: CpuClock) {
    let _ = esp_hal::peripherals::SYSTEM::regs()
        .sysclk_conf()
        .modify(|_, w| unsafe { w.soc_clk_sel().bits(1) });
    let _ = esp_hal::peripherals::SYSTEM::regs()
        .cpu_per_conf()
        .modify(|_, w| unsafe {
            let _ = w.pll_freq_sel().set_bit();
            w.cpuperiod_sel().bits(match cpu_clock_speed {
                CpuClock::_80MHz => 0,
                CpuClock::_160MHz => 1,
                CpuClock::_240MHz => 2,
                _ => panic!("Unsupported CPU clock speed"),
            })
        });

    rom::ets_update_cpu_frequency_rom(cpu_clock_speed.frequency().as_mhz());
}

/// Initialise the badge at full clock and return the raw peripheral set.
///
/// Call this once at the top of `main`, then split the peripherals with
/// [`split_resources!`].
#[cfg(feature = "badge")]
#[must_use]
pub fn init() -> esp_hal::peripherals::Peripherals {
    set_cpu_clock(CpuClock::_160MHz);
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    esp_hal::init(config)
}
