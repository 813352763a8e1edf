use rand::Rng;

/// Shortest length a front end should offer.
pub const MIN_LENGTH: usize = 8;
/// Longest length a front end should offer.
pub const MAX_LENGTH: usize = 32;
/// Length used when nothing else is configured.
pub const DEFAULT_LENGTH: usize = 12;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// The groups of characters a password can be drawn from, in pool order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Upper,
    Lower,
    Digits,
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Upper,
        CharacterClass::Lower,
        CharacterClass::Digits,
        CharacterClass::Special,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }
}

/// What the user asked for: a length and which character classes may appear.
///
/// The length is not validated here, a policy with length 0 simply produces an empty
/// password. Keeping it within `MIN_LENGTH..=MAX_LENGTH` is up to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationPolicy {
    pub length: usize,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_special: bool,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_upper: true,
            include_lower: true,
            include_digits: true,
            include_special: true,
        }
    }
}

impl GenerationPolicy {
    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Upper => self.include_upper,
            CharacterClass::Lower => self.include_lower,
            CharacterClass::Digits => self.include_digits,
            CharacterClass::Special => self.include_special,
        }
    }

    /// The enabled classes, in pool order.
    pub fn classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.includes(*class))
    }
}

/// Concatenates the alphabets of every enabled class, upper, lower, digits then special.
pub fn character_pool(policy: &GenerationPolicy) -> Vec<char> {
    policy
        .classes()
        .flat_map(|class| class.alphabet().chars())
        .collect()
}

/// Generates a password using the thread local random number generator.
pub fn generate(policy: &GenerationPolicy) -> String {
    let mut rng = rand::thread_rng();
    generate_with(policy, &mut rng)
}

/// Generates a password drawing from `rng`.
///
/// Every character is picked independently and uniformly from the pool, so there is no
/// guarantee that each enabled class shows up in the result. Returns an empty string
/// when no class is enabled.
pub fn generate_with<R: Rng + ?Sized>(policy: &GenerationPolicy, rng: &mut R) -> String {
    let pool = character_pool(policy);
    if pool.is_empty() {
        log::debug!("no character class enabled, nothing to generate");
        return String::new();
    }
    log::trace!(
        "drawing {} characters from a pool of {}",
        policy.length,
        pool.len()
    );

    (0..policy.length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect()
}

#[cfg(test)]
#[path = "tests/password_generator.rs"]
mod password_generator;
