//! Display-only px ↔ rem conversion for the panels.

/// Root font size the rem display assumes.
pub const ROOT_FONT_SIZE_PX: f64 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Px,
    Rem,
}

impl Unit {
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Rem => "rem",
        }
    }

    /// Format a pixel length in this unit.
    pub fn format(&self, px: f64) -> String {
        match self {
            Unit::Px => format!("{}px", trim_number(px)),
            Unit::Rem => format!("{}rem", trim_number(px_to_rem(px))),
        }
    }
}

pub fn px_to_rem(px: f64) -> f64 {
    px / ROOT_FONT_SIZE_PX
}

pub fn rem_to_px(rem: f64) -> f64 {
    rem * ROOT_FONT_SIZE_PX
}

/// Render a length without trailing zeros: 12.0 -> "12", 12.5 -> "12.5".
fn trim_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_px_to_rem() {
        assert_eq!(px_to_rem(16.0), 1.0);
        assert_eq!(px_to_rem(32.0), 2.0);
        assert_eq!(rem_to_px(1.5), 24.0);
    }

    #[test]
    fn formats_without_trailing_zeros() {
        assert_eq!(Unit::Px.format(12.0), "12px");
        assert_eq!(Unit::Px.format(12.5), "12.5px");
        assert_eq!(Unit::Rem.format(24.0), "1.5rem");
    }
}
