use crate::archive::{Emotion, FortuneEntry};

pub const FORTUNE_BOX_ID: &str = "fortune-box";

const IDLE_PROMPT: &str = "Click the wheel to reveal your fortune.";
const PENDING_TEXT: &str = "Spinning…";

/// Visual highlight applied to the result message. At most one is active.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Emphasis {
    Blessing,
    Curse,
}

#[derive(Clone, PartialEq, Eq, Debug)]
enum DisplayContent {
    Prompt,
    Pending,
    Fortune { headline: String, meaning: String },
}

/// The region under the wheel that shows the divination text.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FortuneDisplay {
    content: DisplayContent,
    emphasis: Option<Emphasis>,
}

impl Default for FortuneDisplay {
    fn default() -> Self {
        Self {
            content: DisplayContent::Prompt,
            emphasis: None,
        }
    }
}

impl FortuneDisplay {
    pub fn emphasis(&self) -> Option<Emphasis> {
        self.emphasis
    }

    pub fn set_pending(&mut self) {
        self.content = DisplayContent::Pending;
        self.emphasis = None;
    }

    pub fn publish(&mut self, entry: &FortuneEntry) {
        self.content = DisplayContent::Fortune {
            headline: format!("{} — {}", entry.label_cn, entry.label_en),
            meaning: entry.meaning.to_owned(),
        };
        self.emphasis = match entry.emotion {
            Emotion::Good => Some(Emphasis::Blessing),
            Emotion::Bad => Some(Emphasis::Curse),
            Emotion::Neutral => None,
        };
    }

    /// Text lines as they should appear on screen.
    pub fn lines(&self) -> (&str, Option<&str>) {
        match &self.content {
            DisplayContent::Prompt => (IDLE_PROMPT, None),
            DisplayContent::Pending => (PENDING_TEXT, None),
            DisplayContent::Fortune { headline, meaning } => {
                (headline.as_str(), Some(meaning.as_str()))
            }
        }
    }
}
