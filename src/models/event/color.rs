//! Fixed palette of event colors.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One of the six colors an event may carry, stored as its hex value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventColor {
    #[default]
    Blue,
    Red,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl EventColor {
    pub const ALL: [EventColor; 6] = [
        EventColor::Blue,
        EventColor::Red,
        EventColor::Green,
        EventColor::Yellow,
        EventColor::Purple,
        EventColor::Orange,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EventColor::Blue => "Blue",
            EventColor::Red => "Red",
            EventColor::Green => "Green",
            EventColor::Yellow => "Yellow",
            EventColor::Purple => "Purple",
            EventColor::Orange => "Orange",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            EventColor::Blue => "#4285f4",
            EventColor::Red => "#ea4335",
            EventColor::Green => "#34a853",
            EventColor::Yellow => "#fbbc04",
            EventColor::Purple => "#9334e9",
            EventColor::Orange => "#ff6d00",
        }
    }

    /// Red, green and blue channels of the hex value
    pub fn rgb(self) -> (u8, u8, u8) {
        let value = u32::from_str_radix(&self.hex()[1..], 16).unwrap_or(0);
        (
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    /// Match a stored hex value against the palette (case-insensitive)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        Self::ALL
            .into_iter()
            .find(|color| color.hex().eq_ignore_ascii_case(hex))
    }

    /// Palette lookup that falls back to the default color
    pub fn from_hex_or_default(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or_else(|| {
            log::warn!("Color '{}' is not in the event palette, using default", hex);
            Self::default()
        })
    }
}

impl Serialize for EventColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

impl<'de> Deserialize<'de> for EventColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .map(Self::from_hex_or_default)
            .unwrap_or_default())
    }
}
