//! Dataset file loading
//!
//! Reads `tc-ds62.txt` into whitespace-separated rows. No validation is
//! done here beyond the file existing; layout checks happen where fields
//! are read.

use std::path::Path;
use tracing::{debug, info};

use crate::app::models::Dataset;
use crate::{Error, Result};

/// Read and tokenize the dataset file at `path`
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    if !path.is_file() {
        return Err(Error::missing_input(path.display().to_string()));
    }

    info!("Reading dataset file: {}", path.display());

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read dataset {}", path.display()), e))?;

    let dataset = Dataset::parse(&content);
    debug!("Tokenized {} rows", dataset.rows().len());

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_dataset_tokenizes_rows() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "1  header").unwrap();
        writeln!(temp_file, "meta").unwrap();
        writeln!(temp_file, "  more   meta  ").unwrap();
        writeln!(temp_file, "fo 3 1 1.0 5 2.0 10 4.0 1").unwrap();

        let dataset = read_dataset(temp_file.path()).unwrap();

        assert_eq!(dataset.rows().len(), 4);
        assert_eq!(dataset.rows()[0], vec!["1", "header"]);
        assert_eq!(dataset.rows()[2], vec!["more", "meta"]);
        assert_eq!(dataset.rows()[3].len(), 9);
    }

    #[test]
    fn test_read_dataset_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("tc-ds62.txt");

        let result = read_dataset(&missing);

        assert!(matches!(result, Err(Error::MissingInput { path }) if path.ends_with("tc-ds62.txt")));
    }

    #[test]
    fn test_read_dataset_directory_is_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_dataset(dir.path()),
            Err(Error::MissingInput { .. })
        ));
    }
}
