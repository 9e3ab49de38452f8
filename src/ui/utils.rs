use ratatui::style::Color;

pub fn hex_to_rgb(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);
        Color::Rgb(r, g, b)
    } else {
        Color::White
    }
}

// fixed palette, there is no theming
pub const BG: &str = "#2c2e34";
pub const BRAND: &str = "#e2b714"; // title, focused button
pub const TEXT: &str = "#d1d0c5"; // fortunes
pub const SUB: &str = "#646669"; // hints, placeholder
pub const SUB_ALT: &str = "#45474d"; // borders

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#e2b714"), Color::Rgb(0xe2, 0xb7, 0x14));
        assert_eq!(hex_to_rgb("2c2e34"), Color::Rgb(0x2c, 0x2e, 0x34));
        assert_eq!(hex_to_rgb("#fff"), Color::White);
    }
}
