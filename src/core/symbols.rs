//! Feedback code symbol tables
//!
//! The textual feedback code uses one symbol per letter. Which three symbols
//! stand for which outcome is a caller choice: `-+=` and `byg` are both common.

use super::LetterOutcome;
use crate::error::SymbolError;
use std::fmt;

/// Mapping between code symbols and letter outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolTable {
    absent: char,
    present: char,
    correct: char,
}

impl SymbolTable {
    /// `-` absent, `+` present, `=` correct
    pub const ARITHMETIC: Self = Self {
        absent: '-',
        present: '+',
        correct: '=',
    };

    /// `b` black, `y` yellow, `g` green
    pub const COLORS: Self = Self {
        absent: 'b',
        present: 'y',
        correct: 'g',
    };

    /// Create a table from the symbols for absent, present and correct
    ///
    /// # Errors
    /// Returns `SymbolError` if two symbols are equal ignoring ASCII case, or if a
    /// symbol is whitespace (the word/code separator).
    pub fn new(absent: char, present: char, correct: char) -> Result<Self, SymbolError> {
        for symbol in [absent, present, correct] {
            if symbol.is_whitespace() {
                return Err(SymbolError::Reserved(symbol));
            }
        }
        if absent.eq_ignore_ascii_case(&present) || absent.eq_ignore_ascii_case(&correct) {
            return Err(SymbolError::Duplicate(absent));
        }
        if present.eq_ignore_ascii_case(&correct) {
            return Err(SymbolError::Duplicate(present));
        }

        Ok(Self {
            absent,
            present,
            correct,
        })
    }

    /// Look up a preset by name, or parse a 3-symbol definition
    ///
    /// Accepts `arithmetic`, `colors`/`colours`, or three symbols in the order
    /// absent, present, correct (e.g. `"-+="`, `"xyz"`).
    ///
    /// # Errors
    /// Returns `SymbolError` for definitions that are not exactly 3 valid symbols.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::SymbolTable;
    ///
    /// assert_eq!(SymbolTable::from_name("colors").unwrap(), SymbolTable::COLORS);
    /// assert_eq!(SymbolTable::from_name("-+=").unwrap(), SymbolTable::ARITHMETIC);
    /// assert!(SymbolTable::from_name("--=").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, SymbolError> {
        match name.to_ascii_lowercase().as_str() {
            "arithmetic" => Ok(Self::ARITHMETIC),
            "colors" | "colours" => Ok(Self::COLORS),
            _ => {
                let symbols: Vec<char> = name.chars().collect();
                match symbols.as_slice() {
                    &[absent, present, correct] => Self::new(absent, present, correct),
                    other => Err(SymbolError::WrongCount(other.len())),
                }
            }
        }
    }

    /// Outcome for a code symbol, matching ASCII case-insensitively
    #[must_use]
    pub fn outcome(&self, symbol: char) -> Option<LetterOutcome> {
        if symbol.eq_ignore_ascii_case(&self.absent) {
            Some(LetterOutcome::Absent)
        } else if symbol.eq_ignore_ascii_case(&self.present) {
            Some(LetterOutcome::Present)
        } else if symbol.eq_ignore_ascii_case(&self.correct) {
            Some(LetterOutcome::Correct)
        } else {
            None
        }
    }

    /// Code symbol for an outcome
    #[must_use]
    pub const fn symbol(&self, outcome: LetterOutcome) -> char {
        match outcome {
            LetterOutcome::Absent => self.absent,
            LetterOutcome::Present => self.present,
            LetterOutcome::Correct => self.correct,
        }
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::ARITHMETIC
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.absent, self.present, self.correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SymbolTable::ARITHMETIC, '-', LetterOutcome::Absent)]
    #[case(SymbolTable::ARITHMETIC, '+', LetterOutcome::Present)]
    #[case(SymbolTable::ARITHMETIC, '=', LetterOutcome::Correct)]
    #[case(SymbolTable::COLORS, 'b', LetterOutcome::Absent)]
    #[case(SymbolTable::COLORS, 'Y', LetterOutcome::Present)]
    #[case(SymbolTable::COLORS, 'g', LetterOutcome::Correct)]
    fn preset_lookup(
        #[case] table: SymbolTable,
        #[case] symbol: char,
        #[case] outcome: LetterOutcome,
    ) {
        assert_eq!(table.outcome(symbol), Some(outcome));
        assert_eq!(
            table.symbol(outcome).to_ascii_lowercase(),
            symbol.to_ascii_lowercase()
        );
    }

    #[test]
    fn unknown_symbol_is_none() {
        assert_eq!(SymbolTable::ARITHMETIC.outcome('g'), None);
        assert_eq!(SymbolTable::COLORS.outcome('='), None);
    }

    #[test]
    fn custom_table_from_symbols() {
        let table = SymbolTable::from_name("xyz").unwrap();
        assert_eq!(table.outcome('x'), Some(LetterOutcome::Absent));
        assert_eq!(table.outcome('z'), Some(LetterOutcome::Correct));
        assert_eq!(table.to_string(), "xyz");
    }

    #[test]
    fn rejects_bad_definitions() {
        assert_eq!(SymbolTable::from_name("-+"), Err(SymbolError::WrongCount(2)));
        assert_eq!(SymbolTable::from_name("gYy"), Err(SymbolError::Duplicate('Y')));
        assert_eq!(SymbolTable::new('-', ' ', '='), Err(SymbolError::Reserved(' ')));
    }

    #[test]
    fn default_is_arithmetic() {
        assert_eq!(SymbolTable::default(), SymbolTable::ARITHMETIC);
    }
}
