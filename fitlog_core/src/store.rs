//! JSON persistence for the whole fitness state.
//!
//! All four components are written to, and read from, a single document:
//!
//! ```json
//! {
//!     "exerciseDatabase": [ { "name": "...", "instructions": "..." } ],
//!     "workoutList": [ { "exerciseType": "...", "duration": 30, "intensity": "..." } ],
//!     "goals": { "goalType": "...", "description": "..." },
//!     "weightTracker": [ { "date": "...", "weight": 75.0 } ]
//! }
//! ```
//!
//! Loading parses the complete document before touching any component, so a
//! failed load never leaves a half-replaced state behind.

use crate::{
    Error, Exercise, ExerciseCatalog, Goal, Result, WeightHistory, WeightRecord, Workout,
    WorkoutLog,
};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const INDENT: &[u8] = b"    ";

/// Borrowed view used for writing
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StateDocumentRef<'a> {
    exercise_database: &'a [Exercise],
    workout_list: &'a [Workout],
    goals: &'a Goal,
    weight_tracker: &'a [WeightRecord],
}

/// Owned document produced by a load; every key is required
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StateDocument {
    pub(crate) exercise_database: Vec<Exercise>,
    pub(crate) workout_list: Vec<Workout>,
    pub(crate) goals: Goal,
    pub(crate) weight_tracker: Vec<WeightRecord>,
}

impl StateDocument {
    /// Move the parsed contents into the given components
    pub(crate) fn commit(
        self,
        catalog: &mut ExerciseCatalog,
        workouts: &mut WorkoutLog,
        goal: &mut Goal,
        weights: &mut WeightHistory,
    ) {
        catalog.load_from(self.exercise_database);
        workouts.load_from(self.workout_list);
        goal.load_from(self.goals);
        weights.load_from(self.weight_tracker);
    }
}

/// Reads and writes the state document at a fixed path
#[derive(Clone, Debug)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Create a store for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize all four components and overwrite the file.
    ///
    /// The document is written to a temp file beside the target and renamed
    /// over it. Any failure to create, write or rename is an [`Error::Write`].
    /// A NaN or infinite weight is rejected with [`Error::NonFiniteWeight`]
    /// before the file is touched.
    pub fn save(
        &self,
        catalog: &ExerciseCatalog,
        workouts: &WorkoutLog,
        goal: &Goal,
        weights: &WeightHistory,
    ) -> Result<()> {
        if let Some(record) = weights.as_slice().iter().find(|r| !r.weight().is_finite()) {
            return Err(Error::NonFiniteWeight {
                date: record.date().to_string(),
                weight: record.weight(),
            });
        }

        let document = StateDocumentRef {
            exercise_database: catalog.as_slice(),
            workout_list: workouts.as_slice(),
            goals: goal,
            weight_tracker: weights.as_slice(),
        };
        let contents = render(&document)?;

        self.write_contents(&contents).map_err(|source| Error::Write {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!("Saved fitness state to {:?}", self.path);
        Ok(())
    }

    /// Replace the four components with the file's contents.
    ///
    /// On any error every component is left exactly as it was.
    pub fn load_into(
        &self,
        catalog: &mut ExerciseCatalog,
        workouts: &mut WorkoutLog,
        goal: &mut Goal,
        weights: &mut WeightHistory,
    ) -> Result<()> {
        let document = self.read_document()?;
        document.commit(catalog, workouts, goal, weights);
        tracing::info!("Loaded fitness state from {:?}", self.path);
        Ok(())
    }

    pub(crate) fn read_document(&self) -> Result<StateDocument> {
        let contents = self.read_contents().map_err(|source| Error::Read {
            path: self.path.clone(),
            source,
        })?;

        let value: serde_json::Value =
            serde_json::from_str(&contents).map_err(|source| Error::Parse {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_value(value).map_err(|source| Error::Format {
            path: self.path.clone(),
            source,
        })
    }

    fn read_contents(&self) -> io::Result<String> {
        let file = File::open(&self.path)?;
        let mut contents = String::new();
        BufReader::new(file).read_to_string(&mut contents)?;
        Ok(contents)
    }

    fn write_contents(&self, contents: &[u8]) -> io::Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;

        {
            let mut writer = BufWriter::new(temp.as_file());
            writer.write_all(contents)?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;

        // Dropping the temp file on error removes it
        temp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Pretty-print with a four-space indent and fixed key order
fn render(document: &StateDocumentRef<'_>) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;
    Ok(buf)
}
