//! Color constants shared by the frame emitters.

use crate::sink::Color;

/// The text foreground color: white.
pub(super) const TEXT_COLOR: Color = [1.0, 1.0, 1.0, 1.0];

/// The selection highlight color: #6a9ae8
pub(super) const SELECTION_COLOR: Color = [
    0.416, // 0x6a / 255
    0.604, // 0x9a / 255
    0.910, // 0xe8 / 255
    1.0,
];

/// The gutter background color: #202c44
pub(super) const GUTTER_BACKGROUND_COLOR: Color = [
    0.125, // 0x20 / 255
    0.173, // 0x2c / 255
    0.267, // 0x44 / 255
    1.0,
];

/// The line-number text color: white, same as the body text.
pub(super) const GUTTER_TEXT_COLOR: Color = TEXT_COLOR;

/// The caret bar color: white.
pub(super) const CARET_COLOR: Color = [1.0, 1.0, 1.0, 1.0];
