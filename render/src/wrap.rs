//! Word wrapping for option descriptions.

use std::io::{self, Write};

/// Writes `width` spaces.
pub(crate) fn pad(out: &mut dyn Write, width: usize) -> io::Result<()> {
    write!(out, "{:width$}", "")
}

fn break_line(out: &mut dyn Write, indent: usize) -> io::Result<()> {
    writeln!(out)?;
    pad(out, indent)
}

/// Writes `text` word by word, breaking lines at word boundaries.
///
/// Words are separated by single spaces until more than `width` characters
/// have been printed on the current line; the next word then starts a new
/// line indented by `indent`. An embedded `\n` always starts a new line. A
/// word longer than `width` is never split, so lines may run over.
///
/// No trailing newline is written.
///
/// # Examples
///
/// ```
/// use cmdhelp_render::wrap_text;
///
/// let mut out = Vec::new();
/// wrap_text("json text", 2, 4, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "json\n    text");
/// ```
pub fn wrap_text(text: &str, width: usize, indent: usize, out: &mut dyn Write) -> io::Result<()> {
    let mut printed = 0;
    let mut line_start = true;

    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            break_line(out, indent)?;
            printed = 0;
            line_start = true;
        }
        for word in line.split(' ').filter(|word| !word.is_empty()) {
            if !line_start {
                if printed > width {
                    break_line(out, indent)?;
                    printed = 0;
                } else {
                    out.write_all(b" ")?;
                }
            }
            out.write_all(word.as_bytes())?;
            printed += word.chars().count();
            line_start = false;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapped(text: &str, width: usize, indent: usize) -> String {
        let mut out = Vec::new();
        wrap_text(text, width, indent, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_short_text_stays_on_one_line() {
        assert_eq!(wrapped("do not wrap me", 50, 30), "do not wrap me");
    }

    #[test]
    fn test_breaks_only_at_word_boundaries() {
        let out = wrapped("json text", 2, 4);
        assert_eq!(out, "json\n    text");
        for line in out.lines() {
            let word = line.trim_start();
            assert!(word == "json" || word == "text", "split inside word: {word:?}");
        }
    }

    #[test]
    fn test_wraps_after_exceeding_width() {
        // Only word characters count towards the width.
        assert_eq!(wrapped("aaa bbb ccc ddd", 5, 2), "aaa bbb\n  ccc ddd");
    }

    #[test]
    fn test_long_word_is_not_split() {
        assert_eq!(wrapped("supercalifragilistic", 5, 2), "supercalifragilistic");
    }

    #[test]
    fn test_newline_forces_break_and_resets_count() {
        assert_eq!(wrapped("first\nsecond line", 50, 3), "first\n   second line");
        assert_eq!(wrapped("aaaaaa\nb c", 5, 1), "aaaaaa\n b c");
    }

    #[test]
    fn test_repeated_spaces_collapse() {
        assert_eq!(wrapped("a   b ", 50, 0), "a b");
    }
}
