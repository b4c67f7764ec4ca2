//! Frogger for the Disobey 2026 badge.
//!
//! - D-pad hops the frog across the traffic
//! - Joystick click toggles hit detection during play
//! - Joystick click restarts after game over
//!
//! Three clock tasks stand in for the refresh, tick and stats interrupts.
//! They only post events; the engine task owns the game state, the display
//! and the buttons, and handles one event at a time. After game over the
//! engine keeps taking ticks and waits for the joystick click.

#![no_std]
#![no_main]

use defmt::{error, info};
#[allow(clippy::wildcard_imports)]
use frogger_badge::*;
use embassy_executor::Spawner;
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};
use embassy_time::{Duration, Ticker, Timer};
use embedded_graphics::prelude::Size;
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;

extern crate alloc;

esp_bootloader_esp_idf::esp_app_desc!();

#[cfg(not(feature = "endless"))]
static CONFIG: Config = Config::CLASSIC;
#[cfg(feature = "endless")]
static CONFIG: Config = Config::ENDLESS;

/// Pending events, oldest first.
static EVENTS: Channel<CriticalSectionRawMutex, Event, 8> = Channel::new();

#[embassy_executor::task(pool_size = 3)]
async fn clock_task(event: Event, period: Duration) {
    info!("{} every {} us", event, period.as_micros());
    let mut ticker = Ticker::every(period);
    loop {
        ticker.next().await;
        // Dropped when the engine falls behind.
        EVENTS.try_send(event).ok();
    }
}

#[embassy_executor::task]
async fn engine_task(display: &'static mut Display<'static>, buttons: &'static mut Buttons) {
    let layout = CONFIG.layout;
    let logical = Size::new(
        u32::from(layout.screen_width),
        u32::from(layout.screen_height),
    );
    let mut canvas = FitWidth::new(display, logical);

    let mut engine = match Engine::new(&CONFIG) {
        Ok(engine) => engine,
        Err(e) => {
            error!("Refusing to start: {}", e);
            return;
        }
    };
    info!("Engine task started, {}", CONFIG.life_cycle);

    if engine.start_round(&mut canvas).is_err() {
        error!("Display write failed while painting the field");
    }

    let mut phase = Phase::Playing;
    loop {
        let event = EVENTS.receive().await;
        match engine.dispatch(event, &mut canvas, &mut *buttons) {
            Ok(next) if next != phase => {
                info!("{} -> {}, score {}", phase, next, engine.state().session.score);
                phase = next;
            }
            Ok(_) => {}
            Err(_) => error!("Display write failed during {}", event),
        }
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = frogger_badge::init();
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 32 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let display = mk_static!(Display<'static>, resources.display.into());
    let buttons = mk_static!(Buttons, resources.buttons.into());

    let timing = CONFIG.timing;
    let period = |us: u32| Duration::from_micros(u64::from(us));
    spawner.must_spawn(clock_task(Event::Refresh, period(timing.refresh_us)));
    spawner.must_spawn(clock_task(Event::Tick, period(timing.tick_us)));
    spawner.must_spawn(clock_task(Event::Stats, period(timing.stats_us)));
    spawner.must_spawn(engine_task(display, buttons));

    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
