//! Character arrangements of a word
//!
//! Positions are what make characters distinct, so a word with repeated
//! letters yields repeated arrangements. Output order is lexicographic by
//! position.

use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CombinatoricsError {
    #[error("cannot choose {r} characters from a word of {len}")]
    OutOfRange { r: usize, len: usize },
}

/// All nPr ordered arrangements of `r` characters
pub fn permutations(word: &str, r: usize) -> Result<Vec<String>, CombinatoricsError> {
    let chars = checked_chars(word, r)?;
    Ok(chars
        .iter()
        .permutations(r)
        .map(|picked| picked.into_iter().collect())
        .collect())
}

/// All nCr selections of `r` characters, kept in word order
pub fn combinations(word: &str, r: usize) -> Result<Vec<String>, CombinatoricsError> {
    let chars = checked_chars(word, r)?;
    Ok(chars
        .iter()
        .combinations(r)
        .map(|picked| picked.into_iter().collect())
        .collect())
}

/// Every word formed from 1 up to `limit` tiles, like the board game
pub fn scrabble(word: &str, limit: usize) -> Result<Vec<String>, CombinatoricsError> {
    checked_chars(word, limit)?;
    let mut out = Vec::new();
    for r in 1..=limit {
        out.extend(permutations(word, r)?);
    }
    Ok(out)
}

/// [`scrabble`] using every tile
pub fn scrabble_all(word: &str) -> Vec<String> {
    scrabble(word, word.chars().count()).unwrap_or_default()
}

fn checked_chars(word: &str, r: usize) -> Result<Vec<char>, CombinatoricsError> {
    let chars: Vec<char> = word.chars().collect();
    if r > chars.len() {
        return Err(CombinatoricsError::OutOfRange {
            r,
            len: chars.len(),
        });
    }
    Ok(chars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_permutations() {
        assert_eq!(
            permutations("abc", 2).unwrap(),
            vec!["ab", "ac", "ba", "bc", "ca", "cb"]
        );
        assert_eq!(permutations("abc", 3).unwrap().len(), 6);
    }

    #[test]
    fn test_permutations_zero() {
        assert_eq!(permutations("abc", 0).unwrap(), vec![""]);
    }

    #[test]
    fn test_combinations() {
        assert_eq!(combinations("abcd", 2).unwrap(), vec!["ab", "ac", "ad", "bc", "bd", "cd"]);
        assert_eq!(combinations("abc", 3).unwrap(), vec!["abc"]);
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(permutations("é✓", 2).unwrap(), vec!["é✓", "✓é"]);
        assert_eq!(combinations("é✓ß", 2).unwrap(), vec!["é✓", "éß", "✓ß"]);
    }

    #[test]
    fn test_repeated_letters_are_positional() {
        assert_eq!(permutations("aa", 2).unwrap(), vec!["aa", "aa"]);
    }

    #[test]
    fn test_scrabble() {
        assert_eq!(scrabble("ab", 2).unwrap(), vec!["a", "b", "ab", "ba"]);
        assert_eq!(scrabble_all("abc").len(), 3 + 6 + 6);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            combinations("ab", 3),
            Err(CombinatoricsError::OutOfRange { r: 3, len: 2 })
        );
        assert!(scrabble("ab", 5).is_err());
    }
}
