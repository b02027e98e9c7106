//! Game name → color table used by the grid and the legend.

use crate::utils::colors;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Red,
    Blue,
    Pink,
    Green,
    Purple,
    Gray,
    Yellow,
    Cyan,
    Orange,
}

impl ColorToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::Red => "red",
            ColorToken::Blue => "blue",
            ColorToken::Pink => "pink",
            ColorToken::Green => "green",
            ColorToken::Purple => "purple",
            ColorToken::Gray => "gray",
            ColorToken::Yellow => "yellow",
            ColorToken::Cyan => "cyan",
            ColorToken::Orange => "orange",
        }
    }

    /// ANSI background sequence for a block of this color.
    pub fn ansi_bg(&self) -> &'static str {
        match self {
            ColorToken::Red => colors::BG_RED,
            ColorToken::Blue => colors::BG_BLUE,
            ColorToken::Pink => colors::BG_PINK,
            ColorToken::Green => colors::BG_GREEN,
            ColorToken::Purple => colors::BG_PURPLE,
            ColorToken::Gray => colors::BG_GREY,
            ColorToken::Yellow => colors::BG_YELLOW,
            ColorToken::Cyan => colors::BG_CYAN,
            ColorToken::Orange => colors::BG_ORANGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default)]
    pub colors: IndexMap<String, ColorToken>,
    #[serde(default = "default_token")]
    pub default: ColorToken,
}

fn default_token() -> ColorToken {
    ColorToken::Gray
}

impl Default for Palette {
    fn default() -> Self {
        let colors = [
            ("Apex Legends", ColorToken::Red),
            ("Valorant", ColorToken::Blue),
            ("osu!", ColorToken::Pink),
            ("Minecraft", ColorToken::Green),
            ("League of Legends", ColorToken::Purple),
        ]
        .into_iter()
        .map(|(g, c)| (g.to_string(), c))
        .collect();

        Self {
            colors,
            default: default_token(),
        }
    }
}

impl Palette {
    pub fn new(default: ColorToken) -> Self {
        Self {
            colors: IndexMap::new(),
            default,
        }
    }

    pub fn with(mut self, game: &str, color: ColorToken) -> Self {
        self.colors.insert(game.to_string(), color);
        self
    }

    /// Exact-match lookup; unknown names get the default token.
    pub fn color_for(&self, game: &str) -> ColorToken {
        self.colors.get(game).copied().unwrap_or(self.default)
    }

    pub fn is_mapped(&self, game: &str) -> bool {
        self.colors.contains_key(game)
    }
}
