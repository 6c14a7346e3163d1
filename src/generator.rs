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
use rand::Rng;
use super::base_solver;
use super::cache::{self, CompositionStore};
use super::composition::Composition;
use super::poem::{self, Poem};
use super::rhyme::RhymeTable;
use super::vocabulary::Vocabulary;

// How often to restart the whole search before declaring the request
// infeasible
pub const MAX_TRIES: u32 = 100;

#[derive(Debug)]
pub enum Error {
    SchemeLengthMismatch { labels: usize, lines: usize },
    NotEnoughSyllables { required: usize, available: usize },
    Base(base_solver::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::SchemeLengthMismatch { labels, lines } => {
                write!(
                    f,
                    "the rhyme scheme has {} labels for {} lines",
                    labels,
                    lines,
                )
            },
            Error::NotEnoughSyllables { required, available } => {
                write!(
                    f,
                    "the poem needs {} syllables but the vocabulary \
                     only has {}",
                    required,
                    available,
                )
            },
            Error::Base(e) => write!(f, "{}", e),
        }
    }
}

impl From<base_solver::Error> for Error {
    fn from(error: base_solver::Error) -> Error {
        Error::Base(error)
    }
}

// Run the whole pipeline with fresh randomness until it produces a
// poem or the attempt budget runs out. Ok(None) is the normal outcome
// for a request whose constraints just never work out; an Error means
// the request could never work and wasn’t tried at all.
pub fn generate<R: Rng + ?Sized>(
    vocabulary: &Vocabulary,
    rhymes: &RhymeTable,
    scheme: &[char],
    targets: &[usize],
    min_words_per_line: usize,
    store: Option<&dyn CompositionStore>,
    rng: &mut R,
) -> Result<Option<Poem>, Error> {
    if scheme.len() != targets.len() {
        return Err(Error::SchemeLengthMismatch {
            labels: scheme.len(),
            lines: targets.len(),
        });
    }

    // Success is provably impossible if the lines demand more
    // syllables than the whole vocabulary holds
    let required = targets.iter().sum::<usize>();
    let available = vocabulary.total_syllables();

    if required > available {
        return Err(Error::NotEnoughSyllables { required, available });
    }

    let index = vocabulary.syllable_index();
    let values = index.distinct_counts();
    let fingerprint = index.fingerprint();

    let mut compositions_by_target = HashMap::<usize, Vec<Composition>>::new();

    for &target in targets.iter() {
        compositions_by_target.entry(target).or_insert_with(|| {
            cache::compositions_for(store, &fingerprint, &values, target)
        });
    }

    for _ in 0..MAX_TRIES {
        let Some(base) = base_solver::find_base(
            &index,
            &compositions_by_target,
            targets,
            min_words_per_line,
            rng,
        )?
        else {
            continue;
        };

        let Some(poem) = poem::fill_poem(
            vocabulary,
            &index,
            rhymes,
            &base,
            scheme,
            rng,
        )
        else {
            continue;
        };

        return Ok(Some(poem));
    }

    Ok(None)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run(
        vocabulary: &str,
        rhymes: &str,
        scheme: &str,
        targets: &[usize],
        min_words_per_line: usize,
        seed: u64,
    ) -> Result<Option<Poem>, Error> {
        let vocabulary = vocabulary.parse::<Vocabulary>().unwrap();
        let rhymes = rhymes.parse::<RhymeTable>().unwrap();
        let scheme = scheme.chars().collect::<Vec<char>>();

        generate(
            &vocabulary,
            &rhymes,
            &scheme,
            targets,
            min_words_per_line,
            None,
            &mut StdRng::seed_from_u64(seed),
        )
    }

    #[test]
    fn config_errors() {
        let vocabulary = "One 1\nTwo 1\nSeven 2\n";

        assert!(matches!(
            run(vocabulary, "", "ABC", &[1], 1, 1),
            Err(Error::SchemeLengthMismatch { labels: 3, lines: 1 }),
        ));

        // 99999 syllables from a four-syllable vocabulary
        assert!(matches!(
            run(vocabulary, "", "A", &[99999], 1, 1),
            Err(Error::NotEnoughSyllables {
                required: 99999,
                available: 4,
            }),
        ));

        assert!(matches!(
            run(vocabulary, "", "A", &[1], 0, 1),
            Err(Error::Base(base_solver::Error::MinWordsTooSmall)),
        ));

        assert!(matches!(
            run(vocabulary, "", "A", &[1], 3, 1),
            Err(Error::Base(base_solver::Error::MinWordsExceedTargets {
                min_words: 3,
                max_target: 1,
            })),
        ));
    }

    #[test]
    fn infeasible_rhymes_run_out_of_tries() {
        // Two lines that must rhyme, but nothing rhymes with anything
        let result = run(
            "Seven 2\nFourteen 2\n",
            "",
            "AA",
            &[2, 2],
            1,
            1,
        ).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn lone_line() {
        let poem = run("One 1\n", "", "A", &[1], 1, 1)
            .unwrap()
            .unwrap();

        assert_eq!(&poem.to_string(), "One");
    }

    #[test]
    fn rhyming_pair() {
        let vocabulary =
            "Seven 2\nEleven 3\nFourteen 2\nSeventeen 3\n";
        let rhymes = "Seven Eleven\nFourteen Seventeen\n";

        // The only compositions over {2, 3} are [2] for the first
        // line and [3] for the second, and both rhyme sets cover that
        // demand, so every attempt succeeds
        for seed in 0..8 {
            let poem = run(vocabulary, rhymes, "AA", &[2, 3], 1, seed)
                .unwrap()
                .unwrap();

            let lines = poem.lines();

            assert_eq!(lines.len(), 2);
            assert_eq!(lines[0].len(), 1);
            assert_eq!(lines[1].len(), 1);

            let rhymes = rhymes.parse::<RhymeTable>().unwrap();

            assert!(rhymes.is_rhyme(&[&lines[0][0], &lines[1][0]]));
        }
    }

    #[test]
    fn syllable_totals_match_targets() {
        let vocabulary =
            "One 1\nTwo 1\nThree 1\nGo 1\n\
             Seven 2\nFourteen 2\nFifteen 2\nSixteen 2\n\
             Eleven 3\nSeventeen 3\n";
        let parsed = vocabulary.parse::<Vocabulary>().unwrap();

        for seed in 0..8 {
            let Some(poem) = run(
                vocabulary,
                "Seven Eleven\nFourteen Seventeen\n",
                "AB",
                &[3, 4],
                2,
                seed,
            ).unwrap()
            else {
                // Some attempts may legitimately fail; the retry
                // budget usually absorbs them
                continue;
            };

            for (line, &target) in poem.lines().iter().zip([3, 4].iter()) {
                assert!(line.len() >= 2);

                let total = line.iter()
                    .map(|word| parsed.syllables(word).unwrap())
                    .sum::<usize>();

                assert_eq!(total, target);
            }
        }
    }
}
