//! Calculation options loader.

use std::path::Path;

use punish_core::CalculationOptions;

use crate::loaders::{LoadResult, read_file};

/// Loader for calculation options from TOML files.
pub struct OptionsLoader;

impl OptionsLoader {
    /// Load options from a TOML file.
    ///
    /// Keys that are absent take their unrestricted defaults, so an empty file
    /// yields [`CalculationOptions::default`].
    ///
    /// ```toml
    /// staleness = "stale2"
    /// range_filter = ["close", "mid"]
    /// minimum_damage = 8.0
    /// only_guaranteed = true
    /// ```
    pub fn load(path: &Path) -> LoadResult<CalculationOptions> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse options from TOML text.
    pub fn parse(content: &str) -> LoadResult<CalculationOptions> {
        let options: CalculationOptions = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse options TOML: {}", e))?;

        if options.minimum_frame_advantage > options.maximum_frame_advantage {
            anyhow::bail!(
                "minimum_frame_advantage ({}) exceeds maximum_frame_advantage ({})",
                options.minimum_frame_advantage,
                options.maximum_frame_advantage
            );
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use punish_core::{MoveRange, StagePosition, StalenessLevel};
    use std::io::Write;

    #[test]
    fn empty_file_is_unrestricted() {
        assert_eq!(OptionsLoader::parse("").unwrap(), CalculationOptions::default());
    }

    #[test]
    fn parses_partial_options() {
        let options = OptionsLoader::parse(
            r#"
            staleness = "stale2"
            range_filter = ["close", "mid"]
            minimum_damage = 8.0
            only_guaranteed = true
            position_filter = "ledge"
            "#,
        )
        .unwrap();

        assert_eq!(options.staleness, StalenessLevel::Stale2);
        assert_eq!(
            options.range_filter.iter().copied().collect::<Vec<_>>(),
            vec![MoveRange::Close, MoveRange::Mid]
        );
        assert_eq!(options.minimum_damage, 8.0);
        assert!(options.only_guaranteed);
        assert!(options.include_kill_moves);
        assert_eq!(options.position_filter, Some(StagePosition::Ledge));
    }

    #[test]
    fn rejects_inverted_bounds() {
        let err = OptionsLoader::parse(
            "minimum_frame_advantage = 10\nmaximum_frame_advantage = 2\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn rejects_unknown_staleness() {
        assert!(OptionsLoader::parse("staleness = \"stale12\"").is_err());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "include_kill_moves = false").unwrap();

        let options = OptionsLoader::load(file.path()).unwrap();
        assert!(!options.include_kill_moves);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = OptionsLoader::load(Path::new("/nonexistent/options.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/options.toml"));
    }
}
