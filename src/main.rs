//! Embedded entry point for the tally counter.
//!
//! Wires the nRF52840 peripherals to the application core: four button
//! tasks feed the input queue, the event loop in `main` applies events to
//! the shared state, and the render task repaints the OLED on demand.

#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{AnyPin, Pin};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};

use tally::channels::{INPUT_QUEUE, REDRAW, RELEASED, SHUTDOWN, STATE};
use tally::counter::Step;
use tally::ui::display::{self, Display};
use tally::ui::{buttons, Key};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("tally starting");

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let oled = unwrap!(display::init(i2c));

    unwrap!(spawner.spawn(render(oled)));
    unwrap!(spawner.spawn(button(p.P0_11.degrade(), Key::Up)));
    unwrap!(spawner.spawn(button(p.P0_12.degrade(), Key::Down)));
    unwrap!(spawner.spawn(button(p.P0_24.degrade(), Key::Ok)));
    unwrap!(spawner.spawn(button(p.P0_25.degrade(), Key::Back)));

    // First frame before any input arrives.
    REDRAW.signal(());

    // Event loop: block until the next classified press, apply it under
    // the state lock, then request a repaint - until BACK stops the app.
    loop {
        let event = INPUT_QUEUE.receive().await;
        let step = STATE.lock(|state| state.borrow_mut().handle_key(event.key));
        match step {
            Step::Redraw => REDRAW.signal(()),
            Step::Exit => break,
        }
    }

    // BACK: have the render task release the panel exactly once, then stop.
    SHUTDOWN.signal(());
    RELEASED.wait().await;
    info!("tally stopped");
    tally::exit()
}

#[embassy_executor::task]
async fn render(mut oled: Display<Twim<'static, peripherals::TWISPI0>>) {
    loop {
        // Shutdown is polled first: a pending teardown wins over a
        // pending redraw, so a just-changed count is never painted on
        // the way out.
        match select(SHUTDOWN.wait(), REDRAW.wait()).await {
            Either::First(()) => break,
            Either::Second(()) => {
                let (count, flash) = STATE.lock(|state| {
                    let mut state = state.borrow_mut();
                    (state.count(), state.take_flash())
                });
                display::paint(&mut oled, count, flash);
            }
        }
    }
    display::shutdown(&mut oled);
    RELEASED.signal(());
}

#[embassy_executor::task(pool_size = 4)]
async fn button(pin: AnyPin, key: Key) {
    buttons::button_task(pin, key, &INPUT_QUEUE.sender()).await
}
