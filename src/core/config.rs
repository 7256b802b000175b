//! Board configuration.
//!
//! The only tunable is the board size. `BoardConfig` follows the same builder
//! shape as the rest of the crate so callers can write
//! `BoardConfig::default().with_size(6)`.

use serde::{Deserialize, Serialize};

/// Board size used when none is given.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Largest supported board size.
pub const MAX_BOARD_SIZE: usize = 255;

/// A board size outside `1..=MAX_BOARD_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidBoardSize(pub usize);

impl std::fmt::Display for InvalidBoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "board size must be between 1 and {}, got {}", MAX_BOARD_SIZE, self.0)
    }
}

impl std::error::Error for InvalidBoardSize {}

/// Engine configuration.
///
/// Deserialized configs are range-checked the same way [`BoardConfig::new`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    /// Board edge length (N in N×N), also the queen count needed to finish.
    pub size: usize,
}

/// Unchecked wire form of [`BoardConfig`].
#[derive(Deserialize)]
struct RawBoardConfig {
    size: usize,
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = InvalidBoardSize;

    fn try_from(raw: RawBoardConfig) -> Result<Self, Self::Error> {
        Self::check_size(raw.size)?;
        Ok(Self { size: raw.size })
    }
}

impl BoardConfig {
    /// Create a configuration for a `size × size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0 or larger than [`MAX_BOARD_SIZE`].
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::assert_size(size);
        Self { size }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        Self::assert_size(size);
        self.size = size;
        self
    }

    /// Check a size without panicking.
    #[must_use]
    pub fn is_valid_size(size: usize) -> bool {
        Self::check_size(size).is_ok()
    }

    /// Check a size, reporting the offending value.
    pub fn check_size(size: usize) -> Result<(), InvalidBoardSize> {
        if (1..=MAX_BOARD_SIZE).contains(&size) {
            Ok(())
        } else {
            Err(InvalidBoardSize(size))
        }
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Panic unless `size` is in `1..=MAX_BOARD_SIZE`.
    pub(crate) fn assert_size(size: usize) {
        assert!(size > 0, "Board size must be at least 1");
        assert!(size <= MAX_BOARD_SIZE, "Board size must be at most {}", MAX_BOARD_SIZE);
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.size, 8);
        assert_eq!(config.cell_count(), 64);
    }

    #[test]
    fn test_config_builder() {
        let config = BoardConfig::default().with_size(5);
        assert_eq!(config.size, 5);
        assert_eq!(config, BoardConfig::new(5));
    }

    #[test]
    fn test_is_valid_size() {
        assert!(!BoardConfig::is_valid_size(0));
        assert!(BoardConfig::is_valid_size(1));
        assert!(BoardConfig::is_valid_size(MAX_BOARD_SIZE));
        assert!(!BoardConfig::is_valid_size(MAX_BOARD_SIZE + 1));
        assert_eq!(BoardConfig::check_size(0), Err(InvalidBoardSize(0)));
    }

    #[test]
    #[should_panic(expected = "Board size must be at least 1")]
    fn test_zero_size() {
        BoardConfig::new(0);
    }

    #[test]
    fn test_oversized_message_names_limit() {
        let result = std::panic::catch_unwind(|| BoardConfig::default().with_size(MAX_BOARD_SIZE + 1));
        let payload = result.unwrap_err();
        let message = payload
            .downcast_ref::<String>()
            .cloned()
            .unwrap_or_default();
        assert_eq!(message, format!("Board size must be at most {}", MAX_BOARD_SIZE));
    }

    #[test]
    fn test_config_serde() {
        let config = BoardConfig::new(6);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"size":6}"#);
        let back: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_deserialize_rejects_bad_sizes() {
        let zero = serde_json::from_str::<BoardConfig>(r#"{"size":0}"#).unwrap_err();
        assert!(zero.to_string().contains("got 0"), "{}", zero);

        assert!(serde_json::from_str::<BoardConfig>(r#"{"size":256}"#).is_err());
    }

    #[test]
    fn test_invalid_size_display() {
        assert_eq!(
            InvalidBoardSize(0).to_string(),
            "board size must be between 1 and 255, got 0"
        );
    }
}
