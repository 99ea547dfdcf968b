//! SSD1306 OLED display wrapper.

use crate::error::Error;
use crate::ui::screen;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
///
/// Bring-up failure is fatal for the application; the caller aborts.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(display)
}

/// Paint one frame of the counter screen and push it to the panel.
///
/// A transient flush failure is tolerated; the next redraw repaints.
pub fn paint<I2C>(display: &mut Display<I2C>, count: u8, flash: bool)
where
    I2C: embedded_hal::i2c::I2c,
{
    let _ = screen::draw(display, count, flash);
    let _ = display.flush();
}

/// Release the panel: blank it and switch it off.
pub fn shutdown<I2C>(display: &mut Display<I2C>)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    let _ = display.flush();
    let _ = display.set_display_on(false);
}
