use crate::error::{OvermarkError, OvermarkResult};

/// RGB triple plus straight alpha in 0..1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a `#rrggbb` string. Alpha is fixed to 1.0 on this path.
    pub fn from_hex(s: &str) -> OvermarkResult<Self> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| OvermarkError::color(format!("expected leading '#' in '{s}'")))?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(OvermarkError::color(format!(
                "expected 6 hex digits in '{s}'"
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| OvermarkError::color(format!("bad channel in '{s}': {e}")))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
            a: 1.0,
        })
    }

    /// CSS `rgba(...)` form consumed by presentation hosts.
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        let c = Color::from_hex("#1a2B3c").unwrap();
        assert_eq!((c.r, c.g, c.b), (0x1a, 0x2b, 0x3c));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn rejects_missing_hash() {
        assert!(Color::from_hex("1a2b3c").is_err());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("#ff00ff00").is_err());
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert!(Color::from_hex("#12345g").is_err());
        assert!(Color::from_hex("#12345é").is_err());
    }

    #[test]
    fn css_form_is_stable() {
        assert_eq!(Color::rgb(255, 0, 10).to_css(), "rgba(255, 0, 10, 1)");
        assert_eq!(
            Color::rgba(0, 0, 0, 0.5).to_css(),
            "rgba(0, 0, 0, 0.5)"
        );
    }
}
