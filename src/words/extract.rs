//! Turning raw input lines into the word list fed to the layout engine.

use log::debug;
use rustc_hash::FxHashSet;

use super::word::Word;

/// Title prefixes that are skipped when a name has enough tokens after them.
pub const TITLE_PREFIXES: &[&str] = &["MD"];

/// Pick one representative first name per full-name entry.
///
/// Blank entries are skipped. When the first token is a title prefix
/// followed by at least two more tokens, the token after the title is
/// used; otherwise the first token is. Duplicates collapse to their first
/// occurrence.
///
/// ```
/// use name_crossword::words::extract_first_names;
///
/// let names = extract_first_names(["MD ASTAFAR ALAM", "Milan Arjel", "MILAN POKHAREL", "MD"]);
/// let texts: Vec<_> = names.iter().map(|w| w.as_str()).collect();
/// assert_eq!(texts, ["ASTAFAR", "MILAN", "MD"]);
/// ```
pub fn extract_first_names<I, S>(full_names: I) -> Vec<Word>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    dedup(full_names.into_iter().filter_map(|name| {
        let tokens: Vec<&str> = name.as_ref().split_whitespace().collect();
        let token = match tokens.as_slice() {
            [] => return None,
            [title, name, _, ..] if is_title(title) => name,
            [first, ..] => first,
        };
        Word::new(token).ok()
    }))
}

/// Treat every non-blank line as a ready-made word.
///
/// Lines that are not a single token are skipped.
pub fn words_from_lines<I, S>(lines: I) -> Vec<Word>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    dedup(lines.into_iter().filter_map(|line| {
        let line = line.as_ref();
        match Word::new(line) {
            Ok(word) => Some(word),
            Err(err) => {
                if !line.trim().is_empty() {
                    debug!("skipping input line {line:?}: {err}");
                }
                None
            }
        }
    }))
}

fn is_title(token: &str) -> bool {
    TITLE_PREFIXES
        .iter()
        .any(|title| token.eq_ignore_ascii_case(title))
}

fn dedup(words: impl Iterator<Item = Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words.filter(|word| seen.insert(word.clone())).collect()
}
