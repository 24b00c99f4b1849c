use std::path::Path;

use regex::Regex;

lazy_static::lazy_static! {
    static ref SIZE_PATTERN: Regex = Regex::new(r"^(\d+)x(\d+)$").unwrap();
    static ref SIZE_HINT_PATTERN: Regex = Regex::new(r"@(\d+)x(\d+)\..+?$").unwrap();
}

/// Parses a `WIDTHxHEIGHT` pair like `16x24`.
pub fn parse_size(value: &str) -> Result<(u32, u32), String> {
    SIZE_PATTERN
        .captures(value.trim())
        .and_then(|captures| {
            let width = captures[1].parse().ok()?;
            let height = captures[2].parse().ok()?;
            Some((width, height))
        })
        .ok_or_else(|| format!("'{}' is not a size like 16x16", value))
}

/// Given a path, checks whether its file name asks for a specific slice size.
///
/// Examples of the convention:
///
/// - knight.png (no hint, use the project's slice size)
/// - knight@16x16.png (16x16 slices)
/// - tiles@32x8.png (32 wide, 8 tall)
pub fn size_hint_for_path<P: AsRef<Path>>(path: P) -> Option<(u32, u32)> {
    let path = path.as_ref();

    let file_name = match path.file_name()?.to_str() {
        Some(name) => name,

        None => {
            log::warn!(
                "Path {} had invalid Unicode, ignoring any size hint in its name...",
                path.display()
            );

            return None;
        }
    };

    let captures = SIZE_HINT_PATTERN.captures(file_name)?;

    match (captures[1].parse(), captures[2].parse()) {
        (Ok(width), Ok(height)) => Some((width, height)),
        _ => {
            log::warn!(
                "Size hint in {} is too large, ignoring it...",
                path.display()
            );

            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn no_hint() {
        assert_eq!(size_hint_for_path("foo.png"), None);
        assert_eq!(size_hint_for_path("foo.blah.png"), None);
        assert_eq!(size_hint_for_path("foo/bar/baz/hello.png"), None);
        assert_eq!(size_hint_for_path("icon@2x.png"), None);
    }

    #[test]
    fn square_hint() {
        assert_eq!(size_hint_for_path("knight@16x16.png"), Some((16, 16)));
        assert_eq!(size_hint_for_path("some/path/knight@64x64.png"), Some((64, 64)));
    }

    #[test]
    fn rectangular_hint() {
        assert_eq!(size_hint_for_path("tiles@32x8.png"), Some((32, 8)));
        assert_eq!(size_hint_for_path("we.like.dots@3x5.png"), Some((3, 5)));
    }

    #[test]
    fn oversized_hint() {
        assert_eq!(size_hint_for_path("huge@99999999999x1.png"), None);
    }

    #[test]
    fn sizes() {
        assert_eq!(parse_size("16x24"), Ok((16, 24)));
        assert_eq!(parse_size(" 8x8 "), Ok((8, 8)));
        assert!(parse_size("16").is_err());
        assert!(parse_size("axb").is_err());
    }
}
