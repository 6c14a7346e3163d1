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

    let index = vocabulary.syllable_index();

    for count in index.distinct_counts() {
        print!("{}:", count);

        for word in index.words_with(count).iter() {
            print!(" {}", word);
        }

        println!();
    }

    if !rhymes.is_empty() {
        println!();

        for set in rhymes.sets() {
            for (word_num, word) in set.iter().enumerate() {
                if word_num > 0 {
                    print!(" ");
                }

                print!("{}", word);
            }

            println!();
        }
    }

    ExitCode::SUCCESS
}
