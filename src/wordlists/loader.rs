//! Word list loading
//!
//! Dictionaries hold one word per line. Common-word lists may prefix each word
//! with a rank ("12 crane"), so the last token on a line is taken as the word.
//! Lines that are not valid words of the requested length are skipped.

use crate::core::{CandidateSet, Word};
use crate::error::WordListError;
use std::fs;
use std::path::Path;

/// Load a dictionary file into a candidate set
///
/// # Errors
///
/// Returns `WordListError::Read` if the file cannot be read and
/// `WordListError::Empty` if it contains no usable words.
///
/// # Examples
/// ```no_run
/// use wordle_assistant::wordlists::loader::load_dictionary;
///
/// let dictionary = load_dictionary("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(
    path: P,
    word_length: usize,
) -> Result<CandidateSet, WordListError> {
    let path = path.as_ref();
    let words = read_words(path, word_length)?;
    if words.is_empty() {
        return Err(WordListError::Empty {
            path: path.to_path_buf(),
            word_length,
        });
    }
    Ok(words.into_iter().collect())
}

/// Load an ordered common-word list, most common first
///
/// Duplicates are kept; ranking ignores repeats.
///
/// # Errors
///
/// Returns `WordListError::Read` if the file cannot be read.
pub fn load_common_words<P: AsRef<Path>>(
    path: P,
    word_length: usize,
) -> Result<Vec<Word>, WordListError> {
    read_words(path.as_ref(), word_length)
}

fn read_words(path: &Path, word_length: usize) -> Result<Vec<Word>, WordListError> {
    let content = fs::read_to_string(path).map_err(|source| WordListError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let (words, skipped) = parse_lines(&content, word_length);
    if skipped > 0 {
        log::warn!(
            "{}: skipped {skipped} lines that are not {word_length}-letter words",
            path.display()
        );
    }
    log::info!("{}: loaded {} words", path.display(), words.len());
    Ok(words)
}

/// Parse word list text, returning the words and the number of skipped lines
fn parse_lines(content: &str, word_length: usize) -> (Vec<Word>, usize) {
    let mut skipped = 0;
    let words = content
        .lines()
        .filter_map(|line| line.split_whitespace().last())
        .filter_map(|token| match Word::with_length(token, word_length) {
            Ok(word) => Some(word),
            Err(e) => {
                log::debug!("skipping '{token}': {e}");
                skipped += 1;
                None
            }
        })
        .collect();
    (words, skipped)
}

/// Build a dictionary from an embedded slice
///
/// # Examples
/// ```
/// use wordle_assistant::wordlists::loader::dictionary_from_slice;
/// use wordle_assistant::wordlists::DICTIONARY;
///
/// let dictionary = dictionary_from_slice(DICTIONARY, 5);
/// assert_eq!(dictionary.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str], word_length: usize) -> CandidateSet {
    words_from_slice(slice, word_length).into_iter().collect()
}

/// Convert an embedded slice to words, keeping its order
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_length(s, word_length).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordle_assistant_{}_{name}",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn words_from_slice_keeps_order_and_skips_invalid() {
        let words = words_from_slice(&["slate", "toolong", "abc", "Crane", "cr4ne"], 5);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["slate", "crane"]);
    }

    #[test]
    fn dictionary_from_slice_sorts_and_dedupes() {
        let dictionary = dictionary_from_slice(&["slate", "crane", "slate"], 5);
        let texts: Vec<&str> = dictionary.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn parse_lines_takes_last_token() {
        let (words, skipped) = parse_lines("1 which\n2 there\n\n3 toolong\nabout\n", 5);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["which", "there", "about"]);
        assert_eq!(skipped, 1);
    }

    #[test]
    fn other_word_lengths() {
        let (words, skipped) = parse_lines("cat\ndog\nhorse\n", 3);
        assert_eq!(words.len(), 2);
        assert_eq!(skipped, 1);
    }

    #[test]
    fn load_dictionary_from_file() {
        let path = temp_file("dict.txt", "crane\nslate\n\nbad!!\n");
        let dictionary = load_dictionary(&path, 5).unwrap();
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("slate"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn load_dictionary_rejects_empty_file() {
        let path = temp_file("empty.txt", "abc\n\n");
        assert!(matches!(
            load_dictionary(&path, 5),
            Err(WordListError::Empty { word_length: 5, .. })
        ));
        fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_read_error() {
        let path = std::env::temp_dir().join("wordle_assistant_does_not_exist.txt");
        assert!(matches!(
            load_common_words(&path, 5),
            Err(WordListError::Read { .. })
        ));
    }
}
