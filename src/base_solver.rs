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
use rand::seq::SliceRandom;
use super::composition::Composition;
use super::vocabulary::SyllableIndex;
use super::word_supply::WordSupply;

#[derive(Debug)]
pub enum Error {
    MinWordsTooSmall,
    MinWordsExceedTargets { min_words: usize, max_target: usize },
    MissingCompositions(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MinWordsTooSmall => {
                write!(f, "the minimum number of words per line must be at least 1")
            },
            Error::MinWordsExceedTargets { min_words, max_target } => {
                write!(
                    f,
                    "a line of {} syllables can’t have {} words",
                    max_target,
                    min_words,
                )
            },
            Error::MissingCompositions(target) => {
                write!(
                    f,
                    "no compositions available for a line of {} syllables",
                    target,
                )
            },
        }
    }
}

// Pick one composition per target without overcommitting the word
// supply. Ok(None) means this attempt found no fit and the caller
// should retry with fresh randomness; an Error means the request
// itself is impossible and retrying won’t help.
pub fn find_base<R: Rng + ?Sized>(
    index: &SyllableIndex,
    compositions_by_target: &HashMap<usize, Vec<Composition>>,
    targets: &[usize],
    min_words_per_line: usize,
    rng: &mut R,
) -> Result<Option<Vec<Composition>>, Error> {
    if min_words_per_line < 1 {
        return Err(Error::MinWordsTooSmall);
    }

    // A composition can’t have more parts than its sum
    if let Some(&max_target) = targets.iter().max() {
        if min_words_per_line > max_target {
            return Err(Error::MinWordsExceedTargets {
                min_words: min_words_per_line,
                max_target,
            });
        }
    }

    for &target in targets.iter() {
        if !compositions_by_target.contains_key(&target) {
            return Err(Error::MissingCompositions(target));
        }
    }

    // One shuffle per target per attempt. A repeated target scans the
    // same shuffled order again, so it can legally pick the same
    // composition twice while the supply lasts.
    let mut shuffled = HashMap::<usize, Vec<Composition>>::new();

    for &target in targets.iter() {
        shuffled.entry(target).or_insert_with(|| {
            let mut compositions = compositions_by_target[&target].clone();
            compositions.shuffle(rng);
            compositions
        });
    }

    let mut supply = WordSupply::new(index);
    let mut base = Vec::<Composition>::with_capacity(targets.len());

    for &target in targets.iter() {
        let mut found = None;

        for composition in shuffled[&target].iter() {
            if composition.len() >= min_words_per_line
                && supply.take(composition)
            {
                found = Some(composition.clone());
                break;
            }
        }

        match found {
            Some(composition) => base.push(composition),
            None => return Ok(None),
        }
    }

    Ok(Some(base))
}
