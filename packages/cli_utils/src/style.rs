//! Terminal styling for rating bands.
//!
//! Maps each band's hex [`ColorPair`] onto the nearest xterm 256-color
//! index so the terminal shows the same palette as the published index.

use console::{Style, StyledObject};
use hazard_risk_hazard_models::{ColorPair, RatingBand};

/// The `console` style for `band`: its background and text colors.
#[must_use]
pub fn band_style(band: RatingBand) -> Style {
    let ColorPair { background, text } = band.colors();
    let mut style = Style::new();

    if let Some(bg) = hex_to_ansi256(background) {
        style = style.on_color256(bg);
    }
    if let Some(fg) = hex_to_ansi256(text) {
        style = style.color256(fg);
    }
    if band.has_data() {
        style = style.bold();
    }

    style
}

/// `label` padded by one space on either side and styled for `band`.
#[must_use]
pub fn styled_band(band: RatingBand, label: &str) -> StyledObject<String> {
    band_style(band).apply_to(format!(" {label} "))
}

/// Parses `#RRGGBB` and maps it onto the 6x6x6 color cube.
fn hex_to_ansi256(hex: &str) -> Option<u8> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some(rgb_to_ansi256(channel(0)?, channel(2)?, channel(4)?))
}

const fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    const fn level(c: u8) -> u8 {
        // Cube steps are 0, 95, 135, 175, 215, 255.
        if c < 48 {
            0
        } else if c < 115 {
            1
        } else {
            (c - 35) / 40
        }
    }
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_colors_map_to_cube_corners() {
        assert_eq!(rgb_to_ansi256(0, 0, 0), 16);
        assert_eq!(rgb_to_ansi256(255, 255, 255), 231);
        assert_eq!(rgb_to_ansi256(255, 0, 0), 196);
        assert_eq!(rgb_to_ansi256(0, 0, 255), 21);
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(hex_to_ansi256("#FFFFFF"), Some(231));
        assert_eq!(hex_to_ansi256("#ff0000"), Some(196));
        assert_eq!(hex_to_ansi256("FFFFFF"), None);
        assert_eq!(hex_to_ansi256("#FFF"), None);
        assert_eq!(hex_to_ansi256("#GG0000"), None);
    }

    #[test]
    fn every_band_color_parses() {
        for &band in RatingBand::TIERS.iter().chain([RatingBand::NoData].iter()) {
            let colors = band.colors();
            assert!(hex_to_ansi256(colors.background).is_some(), "{band}");
            assert!(hex_to_ansi256(colors.text).is_some(), "{band}");
        }
    }

    #[test]
    fn styled_band_keeps_label() {
        let styled = styled_band(RatingBand::VeryHigh, "Very High").force_styling(false);
        assert_eq!(styled.to_string(), " Very High ");
    }
}
