/// Reduces raw input to lowercase ASCII letters separated by single spaces.
///
/// Digits, punctuation, symbols and non-ASCII letters are dropped outright rather than
/// replaced, so `"don't"` becomes `"dont"` and `"$1000 prize"` becomes `"prize"`.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let letters: String = lowered
        .chars()
        .filter(|&c| c.is_ascii_lowercase() || is_separator(c))
        .collect();
    words(&letters).collect::<Vec<_>>().join(" ")
}

pub fn word_count(normalized: &str) -> usize {
    words(normalized).count()
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators
/// (U+001C..=U+001F), which `char::is_whitespace` leaves out.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

pub(crate) fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|word| !word.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_digits() {
        assert_eq!(
            normalize("Congratulations! You won a $1000 prize!"),
            "congratulations you won a prize"
        );
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  Hello \t\n  There  "), "hello there");
    }

    #[test]
    fn control_separators_split_words() {
        assert_eq!(normalize("hello\x1fworld"), "hello world");
        assert_eq!(normalize("\x1cwin\x1dfree\x1emoney\x1f"), "win free money");
        assert_eq!(word_count("hello\x1fworld"), 2);
    }

    #[test]
    fn non_letters_only_yields_empty() {
        assert_eq!(normalize("1234 !!! 🎉"), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn drops_non_ascii_letters() {
        assert_eq!(normalize("Café Ünïcode"), "caf ncode");
    }
}
