//! Keeps untrusted player input printable as a single bounded log line.

/// Flatten a string for logging: whitespace runs collapse to one space,
/// control characters become U+FFFD, and anything past the cap is dropped
/// behind an ellipsis.
pub fn clean_for_log(s: &str) -> String {
    const MAX_CHARS: usize = 160;
    let mut out = String::with_capacity(s.len().min(MAX_CHARS));
    let mut in_space = true;
    let mut count = 0;
    for ch in s.chars() {
        if count >= MAX_CHARS {
            out.push('…');
            break;
        }
        if ch.is_whitespace() {
            if !in_space {
                out.push(' ');
                in_space = true;
                count += 1;
            }
        } else if ch.is_control() {
            out.push('\u{FFFD}');
            in_space = false;
            count += 1;
        } else {
            out.push(ch);
            in_space = false;
            count += 1;
        }
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::clean_for_log;

    #[test]
    fn collapses_whitespace_and_flattens_newlines() {
        assert_eq!(clean_for_log("take\n  old\t key "), "take old key");
        assert_eq!(clean_for_log("   "), "");
    }

    #[test]
    fn replaces_control_characters() {
        assert_eq!(clean_for_log("go\u{0007}north"), "go\u{FFFD}north");
    }

    #[test]
    fn caps_very_long_input() {
        let long = "a".repeat(500);
        let cleaned = clean_for_log(&long);
        assert!(cleaned.chars().count() <= 161);
        assert!(cleaned.ends_with('…'));
    }
}
