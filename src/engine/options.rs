use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_DEPTH: u32 = 10;
pub const DEFAULT_ANALYSIS_LINES: u32 = 3;
pub const DEFAULT_RESPONSE_TIMEOUT: Duration = Duration::from_secs(30);

/// How a play session drives the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineOptions {
    /// Search depth for engine moves and analysis.
    pub depth: u32,
    /// Lines requested by an analysis search.
    pub analysis_multipv: u32,
    /// Play from the opening book before asking the engine.
    pub use_book: bool,
    /// Longest wait for any single line from the engine.
    pub response_timeout: Duration,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            depth: DEFAULT_DEPTH,
            analysis_multipv: DEFAULT_ANALYSIS_LINES,
            use_book: true,
            response_timeout: DEFAULT_RESPONSE_TIMEOUT,
        }
    }
}

impl EngineOptions {
    /// Set an option by name, `setoption` style.
    ///
    /// Names are case-insensitive. Unknown names and unparsable values
    /// are ignored; returns whether anything changed.
    pub fn set(&mut self, name: &str, value: Option<&str>) -> bool {
        let before = self.clone();
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "depth" => {
                if let Some(v) = value.and_then(|v| v.trim().parse::<u32>().ok()) {
                    self.depth = v.clamp(1, 64);
                }
            }
            "multipv" | "analysis multipv" => {
                if let Some(v) = value.and_then(|v| v.trim().parse::<u32>().ok()) {
                    self.analysis_multipv = v.clamp(1, 64);
                }
            }
            "ownbook" | "use book" => {
                if let Some(v) = value {
                    match v.trim().to_ascii_lowercase().as_str() {
                        "true" => self.use_book = true,
                        "false" => self.use_book = false,
                        _ => {}
                    }
                }
            }
            "response timeout" | "timeout" => {
                if let Some(ms) = value.and_then(|v| v.trim().parse::<u64>().ok()) {
                    self.response_timeout = Duration::from_millis(ms.max(1));
                }
            }
            _ => {}
        }
        *self != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EngineOptions::default();
        assert_eq!(options.depth, 10);
        assert_eq!(options.analysis_multipv, 3);
        assert!(options.use_book);
        assert_eq!(options.response_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_set_by_name() {
        let mut options = EngineOptions::default();
        assert!(options.set("Depth", Some("14")));
        assert_eq!(options.depth, 14);
        assert!(options.set("MultiPV", Some("5")));
        assert_eq!(options.analysis_multipv, 5);
        assert!(options.set("OwnBook", Some("false")));
        assert!(!options.use_book);
        assert!(options.set("Response Timeout", Some("2500")));
        assert_eq!(options.response_timeout, Duration::from_millis(2500));
    }

    #[test]
    fn test_set_clamps_and_ignores() {
        let mut options = EngineOptions::default();
        assert!(options.set("depth", Some("0")));
        assert_eq!(options.depth, 1);
        assert!(!options.set("depth", Some("deep")));
        assert!(!options.set("Hash", Some("64")));
        assert!(!options.set("OwnBook", None));
        assert_eq!(options.depth, 1);
    }
}
