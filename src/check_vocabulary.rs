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

mod rhyme;
mod vocabulary;

use std::collections::HashMap;
use std::ffi::OsString;
use std::process::ExitCode;
use rhyme::RhymeTable;
use vocabulary::Vocabulary;

fn load_vocabulary(filename: &OsString) -> Result<Vocabulary, ()> {
    let source = match std::fs::read_to_string(filename) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}: {}", filename.to_string_lossy(), e);
            return Err(());
        },
    };

    match source.parse::<Vocabulary>() {
        Ok(vocabulary) => Ok(vocabulary),
        Err(e) => {
            eprintln!("{}: {}", filename.to_string_lossy(), e);
            Err(())
        },
    }
}

fn load_rhymes(filename: &OsString) -> Result<RhymeTable, ()> {
    let source = match std::fs::read_to_string(filename) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}: {}", filename.to_string_lossy(), e);
            return Err(());
        },
    };

    match source.parse::<RhymeTable>() {
        Ok(rhymes) => Ok(rhymes),
        Err(e) => {
            eprintln!("{}: {}", filename.to_string_lossy(), e);
            Err(())
        },
    }
}

fn check_rhyme_sets(vocabulary: &Vocabulary, rhymes: &RhymeTable) -> usize {
    let mut n_problems = 0;

    for (set_num, set) in rhymes.sets().enumerate() {
        let mut n_known = 0;

        for word in set.iter() {
            if vocabulary.syllables(word).is_some() {
                n_known += 1;
            } else {
                eprintln!(
                    "rhyme set {}: “{}” is not in the vocabulary",
                    set_num + 1,
                    word,
                );
                n_problems += 1;
            }
        }

        // A set that can’t offer two words can never rhyme anything
        if n_known < 2 {
            eprintln!(
                "rhyme set {}: fewer than two usable words",
                set_num + 1,
            );
            n_problems += 1;
        }
    }

    n_problems
}

fn check_shared_words(rhymes: &RhymeTable) -> usize {
    let mut occurrences = HashMap::<&str, usize>::new();

    for set in rhymes.sets() {
        for word in set.iter() {
            *occurrences.entry(word.as_str()).or_insert(0) += 1;
        }
    }

    let mut shared_words = occurrences.into_iter()
        .filter_map(|(word, count)| (count > 1).then(|| word))
        .collect::<Vec<&str>>();

    shared_words.sort_unstable();

    for word in shared_words.iter() {
        eprintln!("“{}” appears in more than one rhyme set", word);
    }

    shared_words.len()
}

fn main() -> ExitCode {
    let vocabulary_filename = std::env::args_os()
        .nth(1)
        .unwrap_or("data/vocabulary.txt".into());
    let rhymes_filename = std::env::args_os()
        .nth(2)
        .unwrap_or("data/rhymes.txt".into());

    let Ok(vocabulary) = load_vocabulary(&vocabulary_filename)
    else {
        return ExitCode::FAILURE;
    };

    let Ok(rhymes) = load_rhymes(&rhymes_filename)
    else {
        return ExitCode::FAILURE;
    };

    let n_problems = check_rhyme_sets(&vocabulary, &rhymes)
        + check_shared_words(&rhymes);

    if n_problems > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
