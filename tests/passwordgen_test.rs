use passwordgen::{
    analyze,
    clipboard::{copy_password, Clipboard, CopyFeedback},
    generate, generate_with,
    password_generator::character_pool,
    reveal::Reveal,
    GenerationPolicy, Result, StrengthCategory,
};
use rand::{rngs::StdRng, SeedableRng};

struct RecordingClipboard(Vec<String>);

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.0.push(text.to_owned());
        Ok(())
    }
}

// Generate, reveal, judge and copy, the way a front end drives the library.
#[test]
fn generate_reveal_check_and_copy() -> Result<()> {
    let policy = GenerationPolicy {
        length: 20,
        ..GenerationPolicy::default()
    };
    let password = generate_with(&policy, &mut StdRng::seed_from_u64(2024));
    assert_eq!(20, password.chars().count());

    let last = Reveal::new(&password).last();
    assert_eq!(Some(password.as_str()), last);

    let verdict = analyze(&password);
    assert_ne!(StrengthCategory::None, verdict.category);
    assert_eq!(verdict.category.indicator(), verdict.indicator);

    let mut clipboard = RecordingClipboard(vec![]);
    let mut feedback = CopyFeedback::default();
    let now = std::time::Instant::now();
    assert!(copy_password(&mut clipboard, &password, &mut feedback, now)?);
    assert_eq!(vec![password], clipboard.0);
    assert!(feedback.is_active(now));
    Ok(())
}

#[test]
fn every_offered_length_and_class_combination() {
    for mask in 0u8..16 {
        for length in [8, 12, 16, 32] {
            let policy = GenerationPolicy {
                length,
                include_upper: mask & 1 != 0,
                include_lower: mask & 2 != 0,
                include_digits: mask & 4 != 0,
                include_special: mask & 8 != 0,
            };
            let pool = character_pool(&policy);
            let password = generate(&policy);

            if mask == 0 {
                assert_eq!("", password);
            } else {
                assert_eq!(length, password.chars().count());
                assert!(password.chars().all(|c| pool.contains(&c)));
            }
        }
    }
}

#[test]
fn checker_examples() {
    assert_eq!(StrengthCategory::None, analyze("").category);
    assert_eq!(StrengthCategory::VeryWeak, analyze("password123").category);
    assert_eq!(StrengthCategory::Weak, analyze("aaaaXyZ!").category);
    assert_eq!(
        StrengthCategory::Strong,
        analyze("Tr0ub4dor&3xyzLongEnough").category
    );
}
