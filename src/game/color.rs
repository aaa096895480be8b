//! Brick, paddle and ball colors.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Palette entry with a light and a dark tint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BreakoutColor {
    Grey,
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
}

impl BreakoutColor {
    /// All colors in palette order.
    pub const ALL: [BreakoutColor; 6] = [
        BreakoutColor::Grey,
        BreakoutColor::Green,
        BreakoutColor::Yellow,
        BreakoutColor::Orange,
        BreakoutColor::Red,
        BreakoutColor::Purple,
    ];

    /// Light tint, `0xRRGGBB`.
    #[must_use]
    pub const fn light(self) -> u32 {
        match self {
            BreakoutColor::Grey => 0x99A09A,
            BreakoutColor::Green => 0xC9E9BD,
            BreakoutColor::Yellow => 0xFFE9C4,
            BreakoutColor::Orange => 0xE9AF91,
            BreakoutColor::Red => 0xC27F87,
            BreakoutColor::Purple => 0xB6A8AF,
        }
    }

    /// Dark tint, `0xRRGGBB`.
    #[must_use]
    pub const fn dark(self) -> u32 {
        match self {
            BreakoutColor::Grey => 0x606170,
            BreakoutColor::Green => 0x507044,
            BreakoutColor::Yellow => 0xCAA05A,
            BreakoutColor::Orange => 0xAE6A47,
            BreakoutColor::Red => 0x8B4049,
            BreakoutColor::Purple => 0xB6A8AF,
        }
    }

    /// Name as written in test cases.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BreakoutColor::Grey => "GREY",
            BreakoutColor::Green => "GREEN",
            BreakoutColor::Yellow => "YELLOW",
            BreakoutColor::Orange => "ORANGE",
            BreakoutColor::Red => "RED",
            BreakoutColor::Purple => "PURPLE",
        }
    }
}

impl std::fmt::Display for BreakoutColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown color name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown color: {0:?}")]
pub struct UnknownColor(pub String);

impl FromStr for BreakoutColor {
    type Err = UnknownColor;

    /// Names are matched exactly, like the test case format requires.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BreakoutColor::ALL
            .into_iter()
            .find(|color| color.name() == s)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}
