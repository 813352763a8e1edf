use super::*;
use passwordgen::{strength::COMMON_PATTERN_MESSAGE, Error};

#[derive(Default)]
struct MockClipboard {
    contents: Option<String>,
}

impl Clipboard for MockClipboard {
    fn set_text(&mut self, text: &str) -> passwordgen::Result<()> {
        self.contents = Some(text.to_owned());
        Ok(())
    }
}

#[test]
fn verdict_line_empty_password() {
    assert_eq!(None, verdict_line(&analyze("")));
}

#[test]
fn verdict_line_very_weak() {
    let line = verdict_line(&analyze("password123")).unwrap();

    assert!(line.starts_with("✖ "));
    assert!(line.contains("Very Weak Password"));
    assert!(line.contains(COMMON_PATTERN_MESSAGE));
}

#[test]
fn verdict_line_without_message() {
    let verdict = analyze("Xkq9!mPzr7T");
    assert_eq!(None, verdict.message);

    let line = verdict_line(&verdict).unwrap();

    assert!(line.starts_with("🔒 "));
    assert!(line.contains("Good Password"));
    assert!(!line.contains("  "));
}

#[test]
fn every_indicator_has_its_own_glyph() {
    let glyphs = [
        indicator_glyph(Indicator::Lock),
        indicator_glyph(Indicator::Warning),
        indicator_glyph(Indicator::CriticalX),
        indicator_glyph(Indicator::Shield),
    ];

    for (i, glyph) in glyphs.iter().enumerate() {
        assert!(!glyph.is_empty());
        assert!(!glyphs[i + 1..].contains(glyph));
    }
}

#[test]
fn category_colors() {
    assert_eq!(Color::Red, category_color(StrengthCategory::VeryWeak));
    assert_eq!(Color::Color256(208), category_color(StrengthCategory::Weak));
    assert_eq!(Color::Yellow, category_color(StrengthCategory::Good));
    assert_eq!(Color::Green, category_color(StrengthCategory::Strong));
}

#[test]
fn try_copy_acknowledges() {
    let mut feedback = CopyFeedback::default();
    let now = Instant::now();

    let clipboard = try_copy(Ok(MockClipboard::default()), "s3cr3t!", &mut feedback, now);

    assert_eq!(Some("s3cr3t!".to_owned()), clipboard.unwrap().contents);
    assert!(feedback.is_active(now));
}

#[test]
fn try_copy_without_clipboard_does_not_acknowledge() {
    let mut feedback = CopyFeedback::default();
    let now = Instant::now();

    let clipboard = try_copy::<MockClipboard>(
        Err(Error::Generic("no clipboard available")),
        "s3cr3t!",
        &mut feedback,
        now,
    );

    assert!(clipboard.is_none());
    assert!(!feedback.is_active(now));
    assert_eq!(None, feedback.expires_at());
}
