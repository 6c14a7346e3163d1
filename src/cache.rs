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

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use super::composition::{self, Composition};

// A keyed store for composition sets. The key is the vocabulary’s
// syllable-count fingerprint plus the target, so a vocabulary change
// naturally invalidates every old entry. Purely an optimization: a
// store that loses everything is still correct.
pub trait CompositionStore {
    fn load(&self, fingerprint: &str, target: usize)
        -> Option<Vec<Composition>>;

    fn save(
        &self,
        fingerprint: &str,
        target: usize,
        compositions: &[Composition],
    );
}

// One JSON file per key in a cache directory. Every kind of I/O
// failure degrades to a miss or a skipped write; the worst outcome is
// computing the compositions again.
pub struct DirectoryStore {
    directory: PathBuf,
}

#[derive(Serialize, Deserialize)]
struct Entry {
    fingerprint: String,
    target: usize,
    compositions: Vec<Composition>,
}

impl DirectoryStore {
    pub fn new<P: AsRef<Path>>(directory: P) -> DirectoryStore {
        DirectoryStore {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    fn entry_path(&self, fingerprint: &str, target: usize) -> PathBuf {
        self.directory.join(
            format!("compositions-{}-{}.json", fingerprint, target),
        )
    }
}

impl CompositionStore for DirectoryStore {
    fn load(
        &self,
        fingerprint: &str,
        target: usize,
    ) -> Option<Vec<Composition>> {
        let file = File::open(self.entry_path(fingerprint, target)).ok()?;

        let entry = serde_json::from_reader::<_, Entry>(
            BufReader::new(file),
        ).ok()?;

        // A stale or renamed file is a miss, not an error
        (entry.fingerprint == fingerprint && entry.target == target)
            .then(|| entry.compositions)
    }

    fn save(
        &self,
        fingerprint: &str,
        target: usize,
        compositions: &[Composition],
    ) {
        let entry = Entry {
            fingerprint: fingerprint.to_string(),
            target,
            compositions: compositions.to_vec(),
        };

        if std::fs::create_dir_all(&self.directory).is_err() {
            return;
        }

        let Ok(file) = File::create(self.entry_path(fingerprint, target))
        else {
            return;
        };

        let _ = serde_json::to_writer(BufWriter::new(file), &entry);
    }
}

// Fetch the composition set for a target through the store, or
// compute and remember it on a miss. With no store it just computes.
pub fn compositions_for(
    store: Option<&dyn CompositionStore>,
    fingerprint: &str,
    values: &[usize],
    target: usize,
) -> Vec<Composition> {
    if let Some(store) = store {
        if let Some(compositions) = store.load(fingerprint, target) {
            return compositions;
        }
    }

    let compositions = composition::all_compositions(values, target);

    if let Some(store) = store {
        store.save(fingerprint, target, &compositions);
    }

    compositions
}
