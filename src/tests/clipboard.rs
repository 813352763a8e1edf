use std::time::{Duration, Instant};

use crate::clipboard::{copy_password, Clipboard, CopyFeedback, Error, Result};

#[derive(Default)]
struct MockClipboard {
    contents: Option<String>,
    writes: usize,
    fail: bool,
}

impl Clipboard for MockClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.writes += 1;
        if self.fail {
            return Err(Error::Generic("no clipboard available"));
        }
        self.contents = Some(text.to_owned());
        Ok(())
    }
}

#[test]
fn copy_puts_password_on_clipboard() -> Result<()> {
    let mut clipboard = MockClipboard::default();
    let mut feedback = CopyFeedback::default();
    let now = Instant::now();

    assert!(copy_password(&mut clipboard, "s3cr3t!", &mut feedback, now)?);

    assert_eq!(Some("s3cr3t!".to_owned()), clipboard.contents);
    assert!(feedback.is_active(now));
    Ok(())
}

#[test]
fn copy_empty_password_is_a_no_op() -> Result<()> {
    let mut clipboard = MockClipboard::default();
    let mut feedback = CopyFeedback::default();
    let now = Instant::now();

    assert!(!copy_password(&mut clipboard, "", &mut feedback, now)?);

    assert_eq!(0, clipboard.writes);
    assert!(!feedback.is_active(now));
    Ok(())
}

#[test]
fn failed_copy_still_acknowledges() {
    let mut clipboard = MockClipboard {
        fail: true,
        ..MockClipboard::default()
    };
    let mut feedback = CopyFeedback::default();
    let now = Instant::now();

    let res = copy_password(&mut clipboard, "s3cr3t!", &mut feedback, now);

    assert!(res.is_err());
    assert!(feedback.is_active(now));
}

#[test]
fn feedback_goes_away_after_window() {
    let mut feedback = CopyFeedback::new(Duration::from_secs(2));
    let now = Instant::now();
    feedback.mark(now);

    assert!(feedback.is_active(now + Duration::from_millis(1999)));
    assert!(!feedback.is_active(now + Duration::from_secs(2)));
    assert_eq!(Some(now + Duration::from_secs(2)), feedback.expires_at());
}

#[test]
fn feedback_starts_inactive() {
    let feedback = CopyFeedback::default();

    assert!(!feedback.is_active(Instant::now()));
    assert_eq!(None, feedback.expires_at());
}

#[test]
fn copying_again_restarts_window() {
    let mut feedback = CopyFeedback::new(Duration::from_secs(2));
    let start = Instant::now();
    feedback.mark(start);
    feedback.mark(start + Duration::from_secs(1));

    assert!(feedback.is_active(start + Duration::from_millis(2500)));
}
