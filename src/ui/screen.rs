//! The counter screen scene.
//!
//! Drawing is generic over `DrawTarget<Color = BinaryColor>` so the same
//! code paints the SSD1306 RAM buffer on target and a plain pixel buffer
//! in host tests.

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};

use crate::config::{
    BOX_CORNER_RADIUS, BOX_OFFSET_Y, BOX_SIZE, DISPLAY_HEIGHT, DISPLAY_WIDTH, SCREEN_TITLE,
    TITLE_Y,
};

/// Number of concentric frames drawn while the flash animation is active.
const FLASH_FRAMES: i32 = 3;

/// Format the count as a decimal string with no leading zeros; the 0..=99
/// invariant bounds it to two digits.
pub fn format_count(count: u8) -> heapless::String<3> {
    let mut s = heapless::String::new();
    let _ = write!(s, "{}", count);
    s
}

fn box_top_left() -> Point {
    Point::new(
        (DISPLAY_WIDTH as i32 - BOX_SIZE as i32) / 2,
        (DISPLAY_HEIGHT as i32 - BOX_SIZE as i32) / 2 + BOX_OFFSET_Y,
    )
}

/// The counter box outline, grown by `grow` pixels on every side.
fn frame(grow: i32) -> RoundedRectangle {
    let rect = Rectangle::new(
        box_top_left() - Point::new(grow, grow),
        Size::new(BOX_SIZE + 2 * grow as u32, BOX_SIZE + 2 * grow as u32),
    );
    RoundedRectangle::with_equal_corners(rect, Size::new_equal(BOX_CORNER_RADIUS))
}

fn centered() -> TextStyle {
    TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build()
}

/// Paint one frame of the counter screen.
///
/// Title row on top, the count centered in the rounded box below. While
/// the flash animation is active the box gets three concentric frames
/// instead of one.
pub fn draw<D>(target: &mut D, count: u8, flash: bool) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;

    let outline = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
    let title_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let count_style = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);

    Text::with_text_style(
        SCREEN_TITLE,
        Point::new(DISPLAY_WIDTH as i32 / 2, TITLE_Y),
        title_style,
        centered(),
    )
    .draw(target)?;

    let rings = if flash { FLASH_FRAMES } else { 1 };
    for grow in 0..rings {
        frame(grow).into_styled(outline).draw(target)?;
    }

    let text = format_count(count);
    let box_center = box_top_left() + Point::new(BOX_SIZE as i32 / 2, BOX_SIZE as i32 / 2);
    Text::with_text_style(&text, box_center, count_style, centered()).draw(target)?;

    Ok(())
}
