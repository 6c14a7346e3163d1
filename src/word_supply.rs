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
use super::vocabulary::SyllableIndex;

// How many words of each syllable count are still unclaimed. One of
// these is made fresh for each generation attempt and thrown away with
// it.
pub struct WordSupply {
    available: HashMap<usize, usize>,
}

impl WordSupply {
    pub fn new(index: &SyllableIndex) -> WordSupply {
        WordSupply {
            available: index.counts()
                .map(|(syllables, words)| (syllables, words.len()))
                .collect(),
        }
    }

    pub fn available(&self, syllables: usize) -> usize {
        self.available.get(&syllables).map(|&count| count).unwrap_or(0)
    }

    // True if there are still enough words of each count to fill every
    // position of the composition
    pub fn can_fill(&self, composition: &[usize]) -> bool {
        for (i, &syllables) in composition.iter().enumerate() {
            // Count each distinct value once
            if composition[0..i].contains(&syllables) {
                continue;
            }

            let needed = composition.iter()
                .filter(|&&other| other == syllables)
                .count();

            if needed > self.available(syllables) {
                return false;
            }
        }

        true
    }

    // Claim one word per position of the composition. Returns false,
    // claiming nothing, if the supply doesn’t stretch to it.
    pub fn take(&mut self, composition: &[usize]) -> bool {
        if !self.can_fill(composition) {
            return false;
        }

        for &syllables in composition.iter() {
            if let Some(count) = self.available.get_mut(&syllables) {
                *count -= 1;
            }
        }

        true
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::vocabulary::Vocabulary;

    fn make_index() -> SyllableIndex {
        "One 1\n\
         Two 1\n\
         Seven 2\n\
         Eleven 3\n"
            .parse::<Vocabulary>()
            .unwrap()
            .syllable_index()
    }

    #[test]
    fn available() {
        let index = make_index();
        let supply = WordSupply::new(&index);

        assert_eq!(supply.available(1), 2);
        assert_eq!(supply.available(2), 1);
        assert_eq!(supply.available(3), 1);
        assert_eq!(supply.available(4), 0);
    }

    #[test]
    fn can_fill() {
        let index = make_index();
        let supply = WordSupply::new(&index);

        assert!(supply.can_fill(&[]));
        assert!(supply.can_fill(&[1]));
        assert!(supply.can_fill(&[1, 1]));
        assert!(supply.can_fill(&[1, 2, 1]));
        assert!(!supply.can_fill(&[1, 1, 1]));
        assert!(!supply.can_fill(&[2, 2]));
        assert!(!supply.can_fill(&[4]));
    }

    #[test]
    fn take() {
        let index = make_index();
        let mut supply = WordSupply::new(&index);

        assert!(supply.take(&[1, 2]));
        assert_eq!(supply.available(1), 1);
        assert_eq!(supply.available(2), 0);

        // Nothing is claimed by a failed take
        assert!(!supply.take(&[1, 2]));
        assert_eq!(supply.available(1), 1);

        assert!(supply.take(&[1]));
        assert_eq!(supply.available(1), 0);

        assert!(supply.take(&[3]));
        assert!(!supply.take(&[1]));
        assert!(!supply.take(&[3]));

        // The empty composition always fits
        assert!(supply.take(&[]));
    }
}
