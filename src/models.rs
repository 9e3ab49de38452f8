use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct FortuneData {
    pub name: String,
    pub fortunes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    ReadFortune,
    Quit,
}

impl Button {
    pub const ALL: [Button; 2] = [Button::ReadFortune, Button::Quit];

    pub fn label(self) -> &'static str {
        match self {
            Button::ReadFortune => "Read My Fortune!",
            Button::Quit => "Quit",
        }
    }

    /// Focus order wraps around, so both directions end up at the other button.
    pub fn next(self) -> Self {
        match self {
            Button::ReadFortune => Button::Quit,
            Button::Quit => Button::ReadFortune,
        }
    }
}

/// Text graphic shown above the title.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleArt {
    pub lines: Vec<String>,
}

impl TitleArt {
    pub fn width(&self) -> usize {
        self.lines.iter().map(|l| l.chars().count()).max().unwrap_or(0)
    }

    pub fn height(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }
}
