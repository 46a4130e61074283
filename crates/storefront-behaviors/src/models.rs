//! Storefront Models
//!
//! Small value types shared by the page behaviors.

/// Visual presentation mode, persisted under the `theme` key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored preference. Only `"dark"` selects the dark theme;
    /// missing or unrecognised values fall back to light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// One-way fade-in latch for an observed element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Unobserved,
    Observed,
    Revealed,
}

/// Where a sparkle may land inside its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// 10%..90% of the anchor box, keeps small controls from clipping
    Bounded,
    /// Anywhere in the anchor box
    Full,
}

impl Placement {
    /// Map a unit random value to a percentage offset
    pub fn percent(self, unit: f64) -> f64 {
        match self {
            Placement::Bounded => unit * 80.0 + 10.0,
            Placement::Full => unit * 100.0,
        }
    }
}

/// Wishlist glyph for the control's current state
pub fn wishlist_glyph(active: bool) -> &'static str {
    if active {
        "❤"
    } else {
        "♡"
    }
}

/// Parse badge text the way the page markup expects: leading whitespace,
/// optional sign, then as many digits as follow. Anything else counts as 0.
/// Digit runs too long for `i64` saturate.
pub fn parse_badge(text: Option<&str>) -> i64 {
    let Some(text) = text else { return 0 };
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return 0;
    }
    match digits.parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    }
}
