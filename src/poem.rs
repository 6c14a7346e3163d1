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
use super::composition::Composition;
use super::rhyme::RhymeTable;
use super::rhyme_solver;
use super::vocabulary::{SyllableIndex, Vocabulary};

pub struct Poem {
    lines: Vec<Vec<String>>,
}

impl Poem {
    pub fn lines(&self) -> &[Vec<String>] {
        &self.lines
    }
}

impl fmt::Display for Poem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (line_num, line) in self.lines.iter().enumerate() {
            if line_num > 0 {
                writeln!(f)?;
            }

            for (word_num, word) in line.iter().enumerate() {
                if word_num > 0 {
                    write!(f, " ")?;
                }

                write!(f, "{}", word)?;
            }
        }

        Ok(())
    }
}

// Turn a poem base into concrete words: resolve the final words
// through the rhyme solver, then fill the interior positions from
// whatever the vocabulary still has. None means the rhyme resolution
// found no fit for this attempt.
pub fn fill_poem<R: Rng + ?Sized>(
    vocabulary: &Vocabulary,
    index: &SyllableIndex,
    rhymes: &RhymeTable,
    base: &[Composition],
    scheme: &[char],
    rng: &mut R,
) -> Option<Poem> {
    assert_eq!(base.len(), scheme.len());

    // Group the final syllable count of each line by its scheme
    // label, keeping the labels in order of first appearance
    let mut groups = Vec::<(char, Vec<usize>)>::new();

    for (&label, composition) in scheme.iter().zip(base.iter()) {
        let &last = composition.last()?;

        match groups.iter_mut().find(|(l, _)| *l == label) {
            Some((_, counts)) => counts.push(last),
            None => groups.push((label, vec![last])),
        }
    }

    let counts_by_group = groups.iter()
        .map(|(_, counts)| counts.clone())
        .collect::<Vec<Vec<usize>>>();

    let resolved = rhyme_solver::resolve_groups(
        vocabulary,
        index,
        rhymes,
        &counts_by_group,
        rng,
    )?;

    // Take the final words out of a working copy of the index so the
    // interior fills can’t duplicate them
    let mut working = index.counts()
        .map(|(syllables, words)| (syllables, words.to_vec()))
        .collect::<HashMap<usize, Vec<String>>>();

    for word in resolved.iter().flatten() {
        let pool = working.get_mut(&vocabulary.syllables(word)?)?;
        let position = pool.iter().position(|other| other == word)?;

        pool.swap_remove(position);
    }

    let mut next_word = vec![0; groups.len()];
    let mut lines = Vec::with_capacity(base.len());

    for (&label, composition) in scheme.iter().zip(base.iter()) {
        let group_num = groups.iter().position(|&(l, _)| l == label)?;
        let final_word = resolved[group_num][next_word[group_num]].clone();

        next_word[group_num] += 1;

        let mut line = Vec::with_capacity(composition.len());

        for &syllables in composition[0..composition.len() - 1].iter() {
            let pool = working.get_mut(&syllables)?;

            // The base finder reserved a word of every position’s
            // count and the rhyme words consumed exactly the final
            // positions’ share, so the pool can’t be dry here
            line.push(pool.swap_remove(rng.gen_range(0..pool.len())));
        }

        line.push(final_word);
        lines.push(line);
    }

    Some(Poem { lines })
}
