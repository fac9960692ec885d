// SPDX-License-Identifier: MPL-2.0
//! Dataset loading for the timeline set.
//!
//! The seed dataset ships embedded in the binary; a user-supplied TOML file
//! given on the command line replaces it. Both paths go through the same
//! [`TimelineSet`] validation.

use super::{Timeline, TimelineSet};
use crate::error::DatasetError;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/data/"]
struct Asset;

const EMBEDDED_DATASET: &str = "timelines.toml";

#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(default)]
    timelines: Vec<Timeline>,
}

fn parse(content: &str) -> Result<TimelineSet, DatasetError> {
    let file: DatasetFile =
        toml::from_str(content).map_err(|err| DatasetError::Parse(err.to_string()))?;
    TimelineSet::new(file.timelines)
}

/// Loads the embedded seed dataset.
///
/// # Panics
///
/// Panics if the embedded asset is missing or invalid; it is compiled into
/// the binary and validated by tests, so this cannot happen in a shipped
/// build.
#[must_use]
pub fn load_embedded() -> TimelineSet {
    let content = Asset::get(EMBEDDED_DATASET).expect("embedded dataset is present");
    parse(&String::from_utf8_lossy(content.data.as_ref())).expect("embedded dataset is valid")
}

/// Loads and validates a user-supplied dataset file.
///
/// # Errors
///
/// Returns [`DatasetError::Io`] when the file cannot be read and
/// [`DatasetError::Parse`] / validation errors from [`TimelineSet::new`]
/// otherwise.
pub fn load_from_path(path: &Path) -> Result<TimelineSet, DatasetError> {
    let content = std::fs::read_to_string(path).map_err(|err| DatasetError::Io(err.to_string()))?;
    parse(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_loads_and_validates() {
        let set = load_embedded();
        assert!(set.len() >= 2);
        for timeline in set.iter() {
            assert!(timeline.start_year <= timeline.end_year);
            assert!(!timeline.title.is_empty());
        }
    }

    #[test]
    fn embedded_dataset_contains_science_timeline() {
        let set = load_embedded();
        let science = set
            .iter()
            .find(|t| t.title == "Наука")
            .expect("science timeline present");
        assert_eq!(science.start_year, 2015);
        assert_eq!(science.end_year, 2022);
        assert_eq!(science.events.len(), 6);
    }

    #[test]
    fn parse_rejects_missing_timelines() {
        let result = parse("# just a comment\n");
        assert!(matches!(result, Err(DatasetError::Empty)));
    }

    #[test]
    fn parse_rejects_bad_toml() {
        let result = parse("[[timelines]\ntitle = broken");
        assert!(matches!(result, Err(DatasetError::Parse(_))));
    }

    #[test]
    fn parse_rejects_inverted_years() {
        let result = parse(
            r#"
[[timelines]]
title = "Backwards"
start_year = 2000
end_year = 1990
"#,
        );
        assert!(matches!(result, Err(DatasetError::YearOrder { .. })));
    }

    #[test]
    fn load_from_path_reports_missing_file() {
        let result = load_from_path(Path::new("/nonexistent/timelines.toml"));
        assert!(matches!(result, Err(DatasetError::Io(_))));
    }

    #[test]
    fn load_from_path_reads_valid_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            r#"
[[timelines]]
title = "Test"
start_year = 2015
end_year = 2022

[[timelines.events]]
year = 2015
description = "something happened"
"#,
        )
        .expect("write dataset");

        let set = load_from_path(&path).expect("valid dataset loads");
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(0).unwrap().events.len(), 1);
    }
}
