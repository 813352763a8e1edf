/// Characters that count as special when judging a password. Unlike the generator's set it
/// has no `|`.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};:,.<>?";

/// Substrings that give a password away, matched ignoring ASCII case.
pub const COMMON_PATTERNS: [&str; 5] = ["123", "abc", "password", "qwerty", "admin"];

/// Three ascending digits in a row.
pub const SEQUENTIAL_RUNS: [&str; 8] = ["012", "123", "234", "345", "456", "567", "678", "789"];

pub const COMMON_PATTERN_MESSAGE: &str = "Ah yes, \"password123\". Pure genius. Try harder.";
pub const SEQUENTIAL_MESSAGE: &str = "123? What's next, \"abc\"? Get creative!";
pub const REPEATING_MESSAGE: &str = "Repeating chars? Your keyboard has other keys, you know.";
pub const SHORT_MESSAGE: &str = "A password shorter than a tweet? Seriously?";
pub const VARIETY_MESSAGE: &str = "Spice it up! This isn't your grandma's cookbook password.";
pub const PRAISE_MESSAGE: &str = "Look who finally learned how to make a proper password!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthCategory {
    None,
    VeryWeak,
    Weak,
    Good,
    Strong,
}

impl StrengthCategory {
    fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => StrengthCategory::VeryWeak,
            2 => StrengthCategory::Weak,
            3 | 4 => StrengthCategory::Good,
            _ => StrengthCategory::Strong,
        }
    }

    /// Human readable name, empty for `None`.
    pub fn label(self) -> &'static str {
        match self {
            StrengthCategory::None => "",
            StrengthCategory::VeryWeak => "Very Weak",
            StrengthCategory::Weak => "Weak",
            StrengthCategory::Good => "Good",
            StrengthCategory::Strong => "Strong",
        }
    }

    pub fn indicator(self) -> Indicator {
        match self {
            StrengthCategory::None | StrengthCategory::Good => Indicator::Lock,
            StrengthCategory::VeryWeak => Indicator::CriticalX,
            StrengthCategory::Weak => Indicator::Warning,
            StrengthCategory::Strong => Indicator::Shield,
        }
    }
}

impl std::fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which icon a front end should show next to a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Lock,
    Warning,
    CriticalX,
    Shield,
}

/// The outcome of analysing one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthVerdict {
    pub category: StrengthCategory,
    pub message: Option<&'static str>,
    pub indicator: Indicator,
}

impl StrengthVerdict {
    fn none() -> Self {
        Self {
            category: StrengthCategory::None,
            message: None,
            indicator: Indicator::Lock,
        }
    }
}

/// The facts about a password that the score is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Features {
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_number: bool,
    pub has_special: bool,
    /// Number of characters, not bytes.
    pub length: usize,
    pub has_common_pattern: bool,
    pub has_repeating_chars: bool,
    pub has_sequential: bool,
}

impl Features {
    pub fn of(password: &str) -> Self {
        let lowered = password.to_ascii_lowercase();
        let chars: Vec<char> = password.chars().collect();

        Self {
            has_upper: chars.iter().any(char::is_ascii_uppercase),
            has_lower: chars.iter().any(char::is_ascii_lowercase),
            has_number: chars.iter().any(char::is_ascii_digit),
            has_special: chars.iter().any(|c| SPECIAL_CHARACTERS.contains(*c)),
            length: chars.len(),
            has_common_pattern: COMMON_PATTERNS.iter().any(|p| lowered.contains(p)),
            has_repeating_chars: has_repeating_chars(&chars),
            has_sequential: SEQUENTIAL_RUNS.iter().any(|run| password.contains(run)),
        }
    }

    /// One point per character class present, one for reaching 12 characters and one more
    /// for reaching 16.
    pub fn base_score(&self) -> u8 {
        [
            self.has_upper,
            self.has_lower,
            self.has_number,
            self.has_special,
            self.length >= 12,
            self.length >= 16,
        ]
        .into_iter()
        .map(u8::from)
        .sum()
    }
}

// Line terminators never form a run.
fn has_repeating_chars(chars: &[char]) -> bool {
    chars.windows(3).any(|w| {
        w[0] == w[1] && w[1] == w[2] && !matches!(w[0], '\n' | '\r' | '\u{2028}' | '\u{2029}')
    })
}

struct Rule {
    name: &'static str,
    applies: fn(&Features, u8) -> bool,
    penalty: u8,
    message: Option<&'static str>,
}

/// Evaluated top to bottom, the first rule that applies decides both the penalty and the
/// message. The last rule always applies.
const RULES: [Rule; 7] = [
    Rule {
        name: "common pattern",
        applies: |f, _| f.has_common_pattern,
        penalty: 2,
        message: Some(COMMON_PATTERN_MESSAGE),
    },
    Rule {
        name: "sequential digits",
        applies: |f, _| f.has_sequential,
        penalty: 1,
        message: Some(SEQUENTIAL_MESSAGE),
    },
    Rule {
        name: "repeating characters",
        applies: |f, _| f.has_repeating_chars,
        penalty: 1,
        message: Some(REPEATING_MESSAGE),
    },
    Rule {
        name: "short",
        applies: |f, _| f.length < 8,
        penalty: 0,
        message: Some(SHORT_MESSAGE),
    },
    Rule {
        name: "low variety",
        applies: |f, _| !f.has_special && !f.has_number,
        penalty: 0,
        message: Some(VARIETY_MESSAGE),
    },
    Rule {
        name: "strong",
        applies: |_, score| score >= 5,
        penalty: 0,
        message: Some(PRAISE_MESSAGE),
    },
    Rule {
        name: "plain",
        applies: |_, _| true,
        penalty: 0,
        message: None,
    },
];

/// Judges a password, an empty one gets the neutral `None` verdict.
pub fn analyze(password: &str) -> StrengthVerdict {
    if password.is_empty() {
        return StrengthVerdict::none();
    }

    let features = Features::of(password);
    let mut score = features.base_score();
    let mut message = None;

    if let Some(rule) = RULES.iter().find(|rule| (rule.applies)(&features, score)) {
        log::trace!("password matched the {} rule", rule.name);
        score = score.saturating_sub(rule.penalty);
        message = rule.message;
    }

    let category = StrengthCategory::from_score(score);
    StrengthVerdict {
        category,
        message,
        indicator: category.indicator(),
    }
}

#[cfg(test)]
#[path = "tests/strength.rs"]
mod strength;
