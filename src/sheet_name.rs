use std::{
    fmt,
    path::{self, Path},
    sync::Arc,
};

use serde::{Deserialize, Serialize};

/// Identifies a sheet by its path relative to the staging folder.
///
/// Sheet names always use `/` as a separator so that manifests written on one
/// platform stay valid on another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SheetName(Arc<str>);

impl SheetName {
    /// Returns `None` if `sheet_path` isn't inside `staging_path`.
    pub fn from_paths(staging_path: &Path, sheet_path: &Path) -> Option<Self> {
        let relative = sheet_path.strip_prefix(staging_path).ok()?;
        let displayed = format!("{}", relative.display());

        let displayed = if path::MAIN_SEPARATOR == '/' {
            displayed
        } else {
            displayed.replace(path::MAIN_SEPARATOR, "/")
        };

        Some(SheetName(displayed.into()))
    }
}

impl AsRef<str> for SheetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SheetName {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn relative_to_staging() {
        let name = SheetName::from_paths(
            Path::new("project/ToSlice"),
            &Path::new("project/ToSlice").join("heroes").join("knight.png"),
        )
        .unwrap();

        assert_eq!(name.as_ref(), "heroes/knight.png");
    }

    #[test]
    fn outside_staging() {
        assert_eq!(
            SheetName::from_paths(Path::new("project/ToSlice"), Path::new("elsewhere/a.png")),
            None
        );
    }
}
