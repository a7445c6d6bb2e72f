//! Static reply content and the keyboard labels that select it.

/// A reply-keyboard button. Each one selects a fixed reply collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Joke,
    Motivation,
    Productivity,
}

impl Label {
    /// All labels, in keyboard order.
    pub const ALL: [Label; 3] = [Label::Joke, Label::Motivation, Label::Productivity];

    /// Text shown on the button and matched against incoming messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Label::Joke => "Tell me a joke",
            Label::Motivation => "Motivate me",
            Label::Productivity => "Give me a productivity tip",
        }
    }

    /// Match incoming text against the labels. Surrounding whitespace is ignored,
    /// everything else must match exactly.
    pub fn from_text(text: &str) -> Option<Label> {
        let text = text.trim();
        Self::ALL.into_iter().find(|label| label.as_str() == text)
    }

    pub const fn replies(self) -> &'static [&'static str] {
        match self {
            Label::Joke => JOKES,
            Label::Motivation => MOTIVATIONS,
            Label::Productivity => PRODUCTIVITY_TIPS,
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const JOKES: &[&str] = &[
    "I told my computer I needed a break — it said 'No problem, I'll go to sleep.'",
    "Why did the programmer quit his job? Because he didn't get arrays.",
    "I would tell you a UDP joke, but you might not get it.",
];

const MOTIVATIONS: &[&str] = &[
    "Small progress each day adds up to big results. Keep going!",
    "You are capable of more than you think — try one small bold step today.",
    "Mistakes are proof you are trying. Learn, adjust, repeat.",
];

const PRODUCTIVITY_TIPS: &[&str] = &[
    "Use the Pomodoro technique: 25 minutes focused, 5 minutes break.",
    "Tackle your hardest task first — your future self will thank you.",
    "Batch similar tasks together to reduce context switching.",
];
