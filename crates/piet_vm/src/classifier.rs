//! Maps a raw RGB triple to a [`Cell`]. The only thing the image-decoding
//! collaborator needs to know is how to hand this function one pixel at a
//! time; sampling, codel-size reduction, and file format are its problem.

use crate::cell::{Cell, Hue, Lightness};

const HUES: [Hue; 6] = [
    Hue::Red,
    Hue::Yellow,
    Hue::Green,
    Hue::Cyan,
    Hue::Blue,
    Hue::Magenta,
];

const LIGHTNESSES: [Lightness; 3] = [Lightness::Light, Lightness::Normal, Lightness::Dark];

/// The 18 chromatic palette entries, in (hue, lightness) order, paired
/// with their hex RGB value from spec §6.
const PALETTE: [(u8, u8, u8); 18] = [
    (0xFF, 0xC0, 0xC0), // light red
    (0xFF, 0x00, 0x00), // red
    (0xC0, 0x00, 0x00), // dark red
    (0xFF, 0xFF, 0xC0), // light yellow
    (0xFF, 0xFF, 0x00), // yellow
    (0xC0, 0xC0, 0x00), // dark yellow
    (0xC0, 0xFF, 0xC0), // light green
    (0x00, 0xFF, 0x00), // green
    (0x00, 0xC0, 0x00), // dark green
    (0xC0, 0xFF, 0xFF), // light cyan
    (0x00, 0xFF, 0xFF), // cyan
    (0x00, 0xC0, 0xC0), // dark cyan
    (0xC0, 0xC0, 0xFF), // light blue
    (0x00, 0x00, 0xFF), // blue
    (0x00, 0x00, 0xC0), // dark blue
    (0xFF, 0xC0, 0xFF), // light magenta
    (0xFF, 0x00, 0xFF), // magenta
    (0xC0, 0x00, 0xC0), // dark magenta
];

/// Classifies a single pixel's RGB value into a [`Cell`].
///
/// Unrecognised colours get [`Cell::invalid`]; the executor treats those
/// as black. `#FFFFFF` and `#000000` are the two special colours.
pub fn classify(r: u8, g: u8, b: u8) -> Cell {
    match (r, g, b) {
        (0xFF, 0xFF, 0xFF) => Cell::white(),
        (0x00, 0x00, 0x00) => Cell::black(),
        _ => PALETTE
            .iter()
            .position(|&rgb| rgb == (r, g, b))
            .map(|idx| Cell::chromatic(HUES[idx / 3], LIGHTNESSES[idx % 3]))
            .unwrap_or_else(Cell::invalid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifier_is_injective_on_palette() {
        let mut seen = Vec::new();
        for &(r, g, b) in PALETTE.iter() {
            let cell = classify(r, g, b);
            assert!(
                !seen.contains(&cell),
                "colour {:?} collided with a previous entry",
                (r, g, b)
            );
            seen.push(cell);
        }
    }

    #[test]
    fn specials_round_trip() {
        assert!(classify(0xFF, 0xFF, 0xFF).is_white());
        assert!(classify(0x00, 0x00, 0x00).is_black());
    }

    #[test]
    fn unknown_colour_is_invalid_and_blocks_like_black() {
        let cell = classify(0x12, 0x34, 0x56);
        assert!(cell.is_invalid());
        assert!(cell.is_black());
    }

    #[test]
    fn hue_and_lightness_match_palette_order() {
        let light_red = classify(0xFF, 0xC0, 0xC0);
        assert_eq!(light_red.hue(), Some(0));
        assert_eq!(light_red.lightness(), Some(0));

        let dark_magenta = classify(0xC0, 0x00, 0xC0);
        assert_eq!(dark_magenta.hue(), Some(5));
        assert_eq!(dark_magenta.lightness(), Some(2));
    }
}
