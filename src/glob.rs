//! Glob used to pick which files in the staging folder are sheets. Pairs the
//! pattern with its compiled matcher so it can be read straight out of a
//! config file.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use globset::{Error, Glob, GlobMatcher};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

// Characters that may start glob syntax. Path components containing any of
// these end the literal prefix of a pattern. Escapes like `[*]` are treated as
// patterns too, which only makes the search a little wider than needed.
const PATTERN_CHARACTERS: &[char] = &['*', '?', '{', '}', '[', ']'];

#[derive(Debug, Clone)]
pub struct InputGlob {
    glob: Glob,
    matcher: GlobMatcher,
}

impl InputGlob {
    pub fn new(pattern: &str) -> Result<Self, Error> {
        let glob = Glob::new(pattern)?;
        let matcher = glob.compile_matcher();

        Ok(InputGlob { glob, matcher })
    }

    /// Tells whether a path, relative to the staging folder, is selected.
    pub fn matches<P: AsRef<Path>>(&self, relative_path: P) -> bool {
        self.matcher.is_match(relative_path)
    }

    /// The folder under `staging_path` that has to be walked to find every
    /// match.
    pub fn search_root(&self, staging_path: &Path) -> PathBuf {
        staging_path.join(literal_prefix(self.glob.glob()))
    }
}

fn literal_prefix(pattern: &str) -> PathBuf {
    Path::new(pattern)
        .iter()
        .take_while(|component| match component.to_str() {
            Some(component) => !component.contains(PATTERN_CHARACTERS),
            None => false,
        })
        .collect()
}

impl Default for InputGlob {
    fn default() -> Self {
        InputGlob::new("**/*.png").unwrap()
    }
}

impl PartialEq for InputGlob {
    fn eq(&self, other: &Self) -> bool {
        self.glob == other.glob
    }
}

impl Eq for InputGlob {}

impl Serialize for InputGlob {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.glob.glob())
    }
}

impl<'de> Deserialize<'de> for InputGlob {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pattern = String::deserialize(deserializer)?;

        InputGlob::new(&pattern).map_err(D::Error::custom)
    }
}

impl fmt::Display for InputGlob {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.glob.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn search_from_literal_folders() {
        let glob = InputGlob::new("characters/heroes/*.png").unwrap();
        assert_eq!(
            glob.search_root(Path::new("ToSlice")),
            Path::new("ToSlice/characters/heroes")
        );
    }

    #[test]
    fn search_whole_staging_folder() {
        let glob = InputGlob::default();
        assert_eq!(glob.search_root(Path::new("ToSlice")), Path::new("ToSlice"));
    }

    #[test]
    fn single_file() {
        let glob = InputGlob::new("tiles.png").unwrap();
        assert_eq!(
            glob.search_root(Path::new("ToSlice")),
            Path::new("ToSlice/tiles.png")
        );
        assert!(glob.matches("tiles.png"));
    }

    #[test]
    fn default_matches_nested_pngs() {
        let glob = InputGlob::default();

        assert!(glob.matches("knight.png"));
        assert!(glob.matches("heroes/knight.png"));
        assert!(!glob.matches("knight.png.slices.json"));
    }
}
