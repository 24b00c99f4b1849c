use std::convert::TryFrom;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The slice sizes offered when sizes aren't chosen freely.
pub const DEFAULT_SNAP_SIZES: &[u32] = &[8, 16, 24, 32, 48, 64, 96, 128, 256, 512];

/// Returns the option closest to `requested`.
///
/// When two options are equally close, the one listed first wins, so with the
/// default sizes `20` snaps down to `16` rather than up to `24`.
pub fn snap_to_nearest(requested: u32, options: &[u32]) -> Result<u32, ConfigError> {
    check_options(options)?;
    Ok(nearest(requested, options))
}

fn check_options(options: &[u32]) -> Result<(), ConfigError> {
    if options.is_empty() {
        return Err(ConfigError::EmptySnapSizes);
    }

    if options.contains(&0) {
        return Err(ConfigError::ZeroSnapSize);
    }

    Ok(())
}

// Assumes `options` is non-empty.
fn nearest(requested: u32, options: &[u32]) -> u32 {
    let distance = |option: u32| (i64::from(option) - i64::from(requested)).abs();

    let mut best = options[0];
    for &option in &options[1..] {
        if distance(option) < distance(best) {
            best = option;
        }
    }

    best
}

/// A validated, non-empty list of positive slice sizes, in preference order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct SnapSizes(Vec<u32>);

impl SnapSizes {
    pub fn new(sizes: Vec<u32>) -> Result<Self, ConfigError> {
        check_options(&sizes)?;
        Ok(SnapSizes(sizes))
    }

    pub fn snap(&self, requested: u32) -> u32 {
        nearest(requested, &self.0)
    }
}

impl Default for SnapSizes {
    fn default() -> Self {
        SnapSizes(DEFAULT_SNAP_SIZES.to_vec())
    }
}

impl TryFrom<Vec<u32>> for SnapSizes {
    type Error = ConfigError;

    fn try_from(sizes: Vec<u32>) -> Result<Self, Self::Error> {
        SnapSizes::new(sizes)
    }
}

impl From<SnapSizes> for Vec<u32> {
    fn from(sizes: SnapSizes) -> Vec<u32> {
        sizes.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exact_match() {
        assert_eq!(snap_to_nearest(64, DEFAULT_SNAP_SIZES), Ok(64));
    }

    #[test]
    fn closest_wins() {
        assert_eq!(snap_to_nearest(100, DEFAULT_SNAP_SIZES), Ok(96));
        assert_eq!(snap_to_nearest(200, DEFAULT_SNAP_SIZES), Ok(256));
        assert_eq!(snap_to_nearest(1, DEFAULT_SNAP_SIZES), Ok(8));
        assert_eq!(snap_to_nearest(10_000, DEFAULT_SNAP_SIZES), Ok(512));
    }

    #[test]
    fn tie_prefers_earlier_option() {
        assert_eq!(snap_to_nearest(20, DEFAULT_SNAP_SIZES), Ok(16));
        assert_eq!(snap_to_nearest(40, DEFAULT_SNAP_SIZES), Ok(32));

        // Order, not magnitude, decides ties.
        assert_eq!(snap_to_nearest(20, &[24, 16]), Ok(24));
    }

    #[test]
    fn empty_options() {
        assert_eq!(snap_to_nearest(20, &[]), Err(ConfigError::EmptySnapSizes));
        assert_eq!(SnapSizes::new(Vec::new()), Err(ConfigError::EmptySnapSizes));
    }

    #[test]
    fn zero_option() {
        assert_eq!(snap_to_nearest(20, &[0, 16]), Err(ConfigError::ZeroSnapSize));
    }
}
