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

use std::fmt;
use std::str::FromStr;

// The sets of words that are considered to rhyme with each other. The
// text format is one set per line with the words separated by spaces.
// A word that appears in no set has no rhyme partner. Nothing here
// stops a word from appearing in two sets; the check-vocabulary tool
// reports that as a data problem.
pub struct RhymeTable {
    sets: Vec<Vec<String>>,
}

#[derive(Debug)]
pub enum ParseError {
    NotEnoughWords(usize),
    DuplicateWord(usize, String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::NotEnoughWords(line_num) => {
                write!(
                    f,
                    "line {}: a rhyme set needs at least two words",
                    line_num,
                )
            },
            ParseError::DuplicateWord(line_num, word) => {
                write!(
                    f,
                    "line {}: “{}” appears more than once in the set",
                    line_num,
                    word,
                )
            },
        }
    }
}

impl RhymeTable {
    pub fn sets(&self) -> impl Iterator<Item = &[String]> {
        self.sets.iter().map(|set| set.as_slice())
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    // True if some single set contains every one of the words
    pub fn is_rhyme(&self, words: &[&str]) -> bool {
        self.sets().any(|set| {
            words.iter().all(|&word| {
                set.iter().any(|set_word| set_word == word)
            })
        })
    }

    // Every word that shares a set with the given word, including the
    // word itself. Words in no set yield nothing.
    pub fn partners<'a>(
        &'a self,
        word: &'a str,
    ) -> impl Iterator<Item = &'a str> {
        self.sets()
            .filter(move |set| {
                set.iter().any(|set_word| set_word == word)
            })
            .flatten()
            .map(|partner| partner.as_str())
    }
}

impl FromStr for RhymeTable {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<RhymeTable, ParseError> {
        let mut sets = Vec::new();

        for (line_num, line) in s.lines().enumerate() {
            let words = line.split_whitespace()
                .map(|word| word.to_string())
                .collect::<Vec<String>>();

            if words.is_empty() {
                continue;
            }

            if words.len() < 2 {
                return Err(ParseError::NotEnoughWords(line_num + 1));
            }

            for (i, word) in words.iter().enumerate() {
                if words[0..i].iter().any(|other| other == word) {
                    return Err(ParseError::DuplicateWord(
                        line_num + 1,
                        word.clone(),
                    ));
                }
            }

            sets.push(words);
        }

        Ok(RhymeTable { sets })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        let table = "Rust Raft React\n\
                     \n\
                     Spark Erlang\n"
            .parse::<RhymeTable>()
            .unwrap();

        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());

        let sets = table.sets().collect::<Vec<&[String]>>();

        assert_eq!(sets[0], ["Rust", "Raft", "React"]);
        assert_eq!(sets[1], ["Spark", "Erlang"]);

        let table = "".parse::<RhymeTable>().unwrap();

        assert!(table.is_empty());
    }

    #[test]
    fn bad_string() {
        assert!(matches!(
            "Rust Raft\nReact".parse::<RhymeTable>(),
            Err(ParseError::NotEnoughWords(2)),
        ));

        match "Rust Raft Rust".parse::<RhymeTable>() {
            Err(ParseError::DuplicateWord(1, word)) => {
                assert_eq!(word, "Rust");
            },
            other => unreachable!("unexpected parse result: {:?}", other.err()),
        }
    }

    #[test]
    fn rhymes() {
        let table = "Seven Eleven\n\
                     Thirteen Fourteen Seventeen\n"
            .parse::<RhymeTable>()
            .unwrap();

        assert!(!table.is_rhyme(&[""]));
        assert!(table.is_rhyme(&["Seven"]));
        assert!(table.is_rhyme(&["Seven", "Eleven"]));
        assert!(table.is_rhyme(&["Thirteen", "Fourteen", "Seventeen"]));
        assert!(table.is_rhyme(&["Seventeen", "Fourteen", "Thirteen"]));
        assert!(!table.is_rhyme(&["Seventeen", "Fourteen", "Seven"]));
    }

    #[test]
    fn partners() {
        let table = "Seven Eleven\n\
                     Thirteen Fourteen Seventeen\n"
            .parse::<RhymeTable>()
            .unwrap();

        let mut partners = table.partners("Fourteen").collect::<Vec<&str>>();
        partners.sort_unstable();

        assert_eq!(partners, ["Fourteen", "Seventeen", "Thirteen"]);

        assert!(table.partners("Go").next().is_none());
    }
}
