// Poemilo – a buzzword poem generator
// Copyright (C) 2026  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// The word list with the syllable count of each word. The text format
// is one “Word count” pair per line, like the latin map file.
pub struct Vocabulary {
    words: HashMap<String, usize>,
}

#[derive(Debug)]
pub enum ParseError {
    MissingSyllableCount(usize),
    InvalidSyllableCount(usize),
    TrailingWords(usize),
    DuplicateWord(usize, String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::MissingSyllableCount(line_num) => {
                write!(f, "line {}: missing syllable count", line_num)
            },
            ParseError::InvalidSyllableCount(line_num) => {
                write!(f, "line {}: invalid syllable count", line_num)
            },
            ParseError::TrailingWords(line_num) => {
                write!(f, "line {}: unexpected text after syllable count", line_num)
            },
            ParseError::DuplicateWord(line_num, word) => {
                write!(f, "line {}: “{}” appears more than once", line_num, word)
            },
        }
    }
}

impl Vocabulary {
    pub fn syllables(&self, word: &str) -> Option<usize> {
        self.words.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = (&str, usize)> {
        self.words.iter().map(|(word, &syllables)| {
            (word.as_str(), syllables)
        })
    }

    // Total number of syllables if every word of the vocabulary is
    // used exactly once. A poem demanding more than this is impossible
    // no matter how the search goes.
    pub fn total_syllables(&self) -> usize {
        self.words.values().sum()
    }

    pub fn syllable_index(&self) -> SyllableIndex {
        SyllableIndex::new(self)
    }
}

impl FromStr for Vocabulary {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Vocabulary, ParseError> {
        let mut words = HashMap::new();

        for (line_num, line) in s.lines().enumerate() {
            let mut parts = line.split_whitespace();

            let Some(word) = parts.next()
            else {
                continue;
            };

            let Some(syllables) = parts.next()
            else {
                return Err(ParseError::MissingSyllableCount(line_num + 1));
            };

            let Ok(syllables) = syllables.parse::<usize>()
            else {
                return Err(ParseError::InvalidSyllableCount(line_num + 1));
            };

            if syllables < 1 {
                return Err(ParseError::InvalidSyllableCount(line_num + 1));
            }

            if parts.next().is_some() {
                return Err(ParseError::TrailingWords(line_num + 1));
            }

            if words.insert(word.to_string(), syllables).is_some() {
                return Err(ParseError::DuplicateWord(
                    line_num + 1,
                    word.to_string(),
                ));
            }
        }

        Ok(Vocabulary { words })
    }
}

// The inverse mapping, from a syllable count to the words that have
// it. Always derived from a Vocabulary so the two can’t drift apart.
// The word lists are sorted to make the derivation deterministic.
pub struct SyllableIndex {
    words: HashMap<usize, Vec<String>>,
}

impl SyllableIndex {
    fn new(vocabulary: &Vocabulary) -> SyllableIndex {
        let mut words = HashMap::<usize, Vec<String>>::new();

        for (word, syllables) in vocabulary.words() {
            words.entry(syllables)
                .and_modify(|words| words.push(word.to_string()))
                .or_insert_with(|| vec![word.to_string()]);
        }

        for words in words.values_mut() {
            words.sort_unstable();
        }

        SyllableIndex { words }
    }

    pub fn words_with(&self, syllables: usize) -> &[String] {
        self.words.get(&syllables)
            .map(|words| words.as_slice())
            .unwrap_or(&[])
    }

    pub fn counts(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.words.iter().map(|(&syllables, words)| {
            (syllables, words.as_slice())
        })
    }

    // The distinct syllable counts in increasing order. These are the
    // values that compositions are built from.
    pub fn distinct_counts(&self) -> Vec<usize> {
        let mut counts = self.words.keys().map(|&count| count)
            .collect::<Vec<usize>>();

        counts.sort_unstable();

        counts
    }

    // A stable identifier for the distinct syllable-count set, used to
    // key the composition cache. Two vocabularies with the same count
    // set share compositions, and any change to the set changes the
    // fingerprint.
    pub fn fingerprint(&self) -> String {
        let counts = self.distinct_counts();

        let mut fingerprint = String::new();

        for (i, count) in counts.into_iter().enumerate() {
            if i > 0 {
                fingerprint.push('-');
            }

            fingerprint.push_str(&count.to_string());
        }

        fingerprint
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        let vocabulary = "Go 1\n\
                          Rust 1\n\
                          Python 2\n\
                          Kubernetes 4\n"
            .parse::<Vocabulary>()
            .unwrap();

        assert_eq!(vocabulary.len(), 4);
        assert_eq!(vocabulary.syllables("Go"), Some(1));
        assert_eq!(vocabulary.syllables("Kubernetes"), Some(4));
        assert_eq!(vocabulary.syllables("Fortran"), None);
        assert_eq!(vocabulary.total_syllables(), 8);
        assert!(!vocabulary.is_empty());
    }

    #[test]
    fn blank_lines() {
        let vocabulary = "\nGo 1\n\n  \nRust 1\n"
            .parse::<Vocabulary>()
            .unwrap();

        assert_eq!(vocabulary.len(), 2);
    }

    #[test]
    fn bad_string() {
        assert!(matches!(
            "Go".parse::<Vocabulary>(),
            Err(ParseError::MissingSyllableCount(1)),
        ));

        assert!(matches!(
            "Go 1\nRust one".parse::<Vocabulary>(),
            Err(ParseError::InvalidSyllableCount(2)),
        ));

        assert!(matches!(
            "Go 0".parse::<Vocabulary>(),
            Err(ParseError::InvalidSyllableCount(1)),
        ));

        assert!(matches!(
            "Go 1 2".parse::<Vocabulary>(),
            Err(ParseError::TrailingWords(1)),
        ));

        match "Go 1\nRust 1\nGo 1".parse::<Vocabulary>() {
            Err(ParseError::DuplicateWord(3, word)) => {
                assert_eq!(word, "Go");
            },
            other => unreachable!("unexpected parse result: {:?}", other.err()),
        }
    }

    #[test]
    fn index() {
        let vocabulary = "Go 1\n\
                          Rust 1\n\
                          Python 2\n\
                          Kubernetes 4\n"
            .parse::<Vocabulary>()
            .unwrap();

        let index = vocabulary.syllable_index();

        assert_eq!(index.words_with(1), ["Go", "Rust"]);
        assert_eq!(index.words_with(2), ["Python"]);
        assert_eq!(index.words_with(4), ["Kubernetes"]);
        assert!(index.words_with(3).is_empty());

        assert_eq!(index.distinct_counts(), [1, 2, 4]);
    }

    #[test]
    fn index_derivation_is_idempotent() {
        let vocabulary = "Go 1\n\
                          Rust 1\n\
                          Spark 1\n\
                          Python 2\n"
            .parse::<Vocabulary>()
            .unwrap();

        let a = vocabulary.syllable_index();
        let b = vocabulary.syllable_index();

        assert_eq!(a.distinct_counts(), b.distinct_counts());

        for count in a.distinct_counts() {
            assert_eq!(a.words_with(count), b.words_with(count));
        }
    }

    #[test]
    fn fingerprint() {
        let vocabulary = "Go 1\n\
                          Python 2\n\
                          Kubernetes 4\n"
            .parse::<Vocabulary>()
            .unwrap();

        assert_eq!(&vocabulary.syllable_index().fingerprint(), "1-2-4");

        let vocabulary = "Go 1".parse::<Vocabulary>().unwrap();

        assert_eq!(&vocabulary.syllable_index().fingerprint(), "1");

        let vocabulary = "".parse::<Vocabulary>().unwrap();

        assert_eq!(&vocabulary.syllable_index().fingerprint(), "");
    }
}
