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

use std::collections::{HashMap, HashSet};
use rand::Rng;
use rand::seq::SliceRandom;
use super::rhyme::RhymeTable;
use super::vocabulary::{SyllableIndex, Vocabulary};

// Pick the final words for the lines of one rhyme-scheme label, given
// the syllable count of each line’s final position. The result keeps
// the order of `syllable_counts` so the caller can zip it back onto
// the lines. None means no fit exists for this attempt.
pub fn select_group<R: Rng + ?Sized>(
    vocabulary: &Vocabulary,
    index: &SyllableIndex,
    rhymes: &RhymeTable,
    syllable_counts: &[usize],
    used_words: &HashSet<String>,
    rng: &mut R,
) -> Option<Vec<String>> {
    match *syllable_counts {
        [] => None,
        [syllables] => {
            select_free_word(index, rhymes, syllables, used_words, rng)
        },
        _ => select_from_rhyme_set(
            vocabulary,
            rhymes,
            syllable_counts,
            used_words,
            rng,
        ),
    }
}

// A lone line needs no rhyme partner, but it must not rhyme with any
// earlier line by accident, so everything sharing a set with an
// already-used word is out of bounds too, used or not.
fn select_free_word<R: Rng + ?Sized>(
    index: &SyllableIndex,
    rhymes: &RhymeTable,
    syllables: usize,
    used_words: &HashSet<String>,
    rng: &mut R,
) -> Option<Vec<String>> {
    let mut blocked = HashSet::<&str>::new();

    for used in used_words.iter() {
        blocked.extend(rhymes.partners(used));
    }

    let candidates = index.words_with(syllables)
        .iter()
        .filter(|word| {
            !used_words.contains(word.as_str())
                && !blocked.contains(word.as_str())
        })
        .collect::<Vec<&String>>();

    let word = candidates.choose(rng)?;

    Some(vec![(*word).clone()])
}

fn select_from_rhyme_set<R: Rng + ?Sized>(
    vocabulary: &Vocabulary,
    rhymes: &RhymeTable,
    syllable_counts: &[usize],
    used_words: &HashSet<String>,
    rng: &mut R,
) -> Option<Vec<String>> {
    let mut demanded = HashMap::<usize, usize>::new();

    for &syllables in syllable_counts.iter() {
        *demanded.entry(syllables).or_insert(0) += 1;
    }

    // The sets that can still cover the demand once used words are
    // taken out
    let candidate_sets = rhymes.sets()
        .filter(|set| {
            demanded.iter().all(|(&syllables, &needed)| {
                set.iter()
                    .filter(|word| {
                        !used_words.contains(word.as_str())
                            && vocabulary.syllables(word) == Some(syllables)
                    })
                    .count()
                    >= needed
            })
        })
        .collect::<Vec<&[String]>>();

    let set = candidate_sets.choose(rng)?;

    // Draw without replacement, following the order of the input
    let mut taken = Vec::<&str>::new();
    let mut result = Vec::with_capacity(syllable_counts.len());

    for &syllables in syllable_counts.iter() {
        let pool = set.iter()
            .filter(|word| {
                !used_words.contains(word.as_str())
                    && !taken.contains(&word.as_str())
                    && vocabulary.syllables(word) == Some(syllables)
            })
            .collect::<Vec<&String>>();

        // The set was checked to cover the whole demand
        let word = pool.choose(rng)?;

        taken.push(word.as_str());
        result.push((*word).clone());
    }

    Some(result)
}

// Resolve every label’s group in order, never assigning the same word
// twice. A failed group fails the whole call; the retry loop in the
// generator deals with it.
pub fn resolve_groups<R: Rng + ?Sized>(
    vocabulary: &Vocabulary,
    index: &SyllableIndex,
    rhymes: &RhymeTable,
    groups: &[Vec<usize>],
    rng: &mut R,
) -> Option<Vec<Vec<String>>> {
    let mut used_words = HashSet::<String>::new();
    let mut resolved = Vec::with_capacity(groups.len());

    for group in groups.iter() {
        // A label that no line carries needs no words
        if group.is_empty() {
            resolved.push(Vec::new());
            continue;
        }

        let words = select_group(
            vocabulary,
            index,
            rhymes,
            group,
            &used_words,
            rng,
        )?;

        used_words.extend(words.iter().cloned());
        resolved.push(words);
    }

    Some(resolved)
}
