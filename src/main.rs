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

mod base_solver;
mod cache;
mod composition;
mod generator;
mod poem;
mod rhyme;
mod rhyme_solver;
mod vocabulary;
mod word_supply;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use cache::{CompositionStore, DirectoryStore};
use clap::Parser;
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rhyme::RhymeTable;
use vocabulary::Vocabulary;

#[derive(Parser)]
#[command(name = "poemilo", about = "Generate a buzzword poem")]
struct Args {
    /// Rhyme scheme, one letter per line; lines sharing a letter rhyme
    #[arg(short, long, default_value = "ABAB")]
    scheme: String,

    /// Comma-separated number of syllables for each line
    #[arg(short = 'y', long, value_delimiter = ',', default_value = "7,7,7,6")]
    syllables: Vec<usize>,

    /// Minimum number of words in a line
    #[arg(short, long, default_value_t = 3)]
    min_words: usize,

    /// Don’t read or write the composition cache
    #[arg(long)]
    no_cache: bool,

    /// Directory holding the composition cache
    #[arg(long, default_value = "cache")]
    cache_dir: PathBuf,

    /// Vocabulary file, one “Word syllable-count” pair per line
    #[arg(long, default_value = "data/vocabulary.txt")]
    vocabulary: PathBuf,

    /// Rhyme sets file, one space-separated set per line
    #[arg(long, default_value = "data/rhymes.txt")]
    rhymes: PathBuf,

    /// Seed the random generator to make the poem reproducible
    #[arg(long)]
    seed: Option<u64>,
}

fn load_vocabulary(filename: &Path) -> Result<Vocabulary, ()> {
    let source = match std::fs::read_to_string(filename) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}: {}", filename.display(), e);
            return Err(());
        },
    };

    match source.parse::<Vocabulary>() {
        Ok(vocabulary) => Ok(vocabulary),
        Err(e) => {
            eprintln!("{}: {}", filename.display(), e);
            Err(())
        },
    }
}

fn load_rhymes(filename: &Path) -> Result<RhymeTable, ()> {
    let source = match std::fs::read_to_string(filename) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}: {}", filename.display(), e);
            return Err(());
        },
    };

    match source.parse::<RhymeTable>() {
        Ok(rhymes) => Ok(rhymes),
        Err(e) => {
            eprintln!("{}: {}", filename.display(), e);
            Err(())
        },
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.syllables.iter().any(|&target| target < 1) {
        eprintln!("a line must have at least one syllable");
        return ExitCode::FAILURE;
    }

    let Ok(vocabulary) = load_vocabulary(&args.vocabulary)
    else {
        return ExitCode::FAILURE;
    };

    let Ok(rhymes) = load_rhymes(&args.rhymes)
    else {
        return ExitCode::FAILURE;
    };

    let scheme = args.scheme.chars().collect::<Vec<char>>();

    let store = (!args.no_cache).then(|| {
        DirectoryStore::new(&args.cache_dir)
    });

    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let result = generator::generate(
        &vocabulary,
        &rhymes,
        &scheme,
        &args.syllables,
        args.min_words,
        store.as_ref().map(|store| store as &dyn CompositionStore),
        &mut *rng,
    );

    match result {
        Ok(Some(poem)) => {
            println!("{}", poem);
            ExitCode::SUCCESS
        },
        Ok(None) => {
            eprintln!("a poem can’t be generated :(");
            ExitCode::FAILURE
        },
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        },
    }
}
