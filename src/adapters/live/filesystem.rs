//! Live filesystem adapter using `std::fs`.

use std::path::Path;

use crate::ports::filesystem::FileSystem;

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_existing_document() {
        let dir = std::env::temp_dir().join("odoscope_live_fs_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("describe.json");
        std::fs::write(&path, "{}").unwrap();

        let fs = LiveFileSystem;
        assert_eq!(fs.read_to_string(&path).unwrap(), "{}");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_document_is_an_error() {
        let fs = LiveFileSystem;
        let path = Path::new("/definitely/not/here.json");
        assert!(fs.read_to_string(path).is_err());
    }
}
