//! JSON record-collection files shared by the file repositories

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use spray_types::Result;
use tempfile::NamedTempFile;
use tracing::warn;

/// Load a record list. A missing file is an empty list; an unreadable one
/// is logged and treated as empty so a damaged store never blocks the app.
pub(crate) fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    match serde_json::from_reader(reader) {
        Ok(records) => Ok(records),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "store file unreadable, starting empty");
            Ok(Vec::new())
        }
    }
}

/// Replace the file at `path` with `records`.
///
/// The list is written to a temp file in the same directory and renamed over
/// the old one, so the previous contents survive a failed or interrupted write.
pub(crate) fn save_records<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use tempfile::tempdir;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
            Err(S::Error::custom("cannot serialize"))
        }
    }

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.json");

        save_records(&path, &[1u32, 2, 3]).unwrap();
        save_records(&path, &[4u32]).unwrap();

        let loaded: Vec<u32> = load_records(&path).unwrap();
        assert_eq!(loaded, vec![4]);
        assert_eq!(dir_entries(dir.path()), vec!["records.json".to_string()]);
    }

    #[test]
    fn test_failed_write_keeps_previous_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.json");
        save_records(&path, &[7u32, 8]).unwrap();

        let result = save_records(&path, &[Unserializable]);
        assert!(result.is_err());

        let loaded: Vec<u32> = load_records(&path).unwrap();
        assert_eq!(loaded, vec![7, 8]);
        // The temp file is removed when it is dropped
        assert_eq!(dir_entries(dir.path()), vec!["records.json".to_string()]);
    }

    #[test]
    fn test_missing_and_corrupt_files_load_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.json");
        let missing: Vec<u32> = load_records(&path).unwrap();
        assert!(missing.is_empty());

        std::fs::write(&path, "[1, 2,").unwrap();
        let corrupt: Vec<u32> = load_records(&path).unwrap();
        assert!(corrupt.is_empty());
    }
}
