use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SnakeColor {
    Blue,
    Yellow,
    #[default]
    Green,
    Purple,
    Pink,
    Orange,
}

impl SnakeColor {
    /// Every choice, in the order the colour screen lists them.
    pub const ALL: [SnakeColor; 6] = [
        SnakeColor::Blue,
        SnakeColor::Yellow,
        SnakeColor::Green,
        SnakeColor::Purple,
        SnakeColor::Pink,
        SnakeColor::Orange,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SnakeColor::Blue => "Blue",
            SnakeColor::Yellow => "Yellow",
            SnakeColor::Green => "Green",
            SnakeColor::Purple => "Purple",
            SnakeColor::Pink => "Pink",
            SnakeColor::Orange => "Orange",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            SnakeColor::Blue => (0, 0, 255),
            SnakeColor::Yellow => (255, 255, 0),
            SnakeColor::Green => (0, 255, 0),
            SnakeColor::Purple => (128, 0, 128),
            SnakeColor::Pink => (255, 175, 175),
            SnakeColor::Orange => (255, 200, 0),
        }
    }

    /// Shade used for the body behind the head.
    pub fn body_rgb(self) -> (u8, u8, u8) {
        let (r, g, b) = self.rgb();
        (darken(r), darken(g), darken(b))
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

fn darken(channel: u8) -> u8 {
    (f32::from(channel) * 0.7) as u8
}
