//! Append-only file sink

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Open `path` for appending, creating it if needed
///
/// The parent directory is not created; that is `Settings::load`'s job.
pub(crate) fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Write one line in a single call, then flush
pub(crate) fn append_line(file: &mut File, line: &str) -> io::Result<()> {
    let mut buf = String::with_capacity(line.len() + 1);
    buf.push_str(line);
    buf.push('\n');
    file.write_all(buf.as_bytes())?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_append_keeps_existing_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.txt");
        fs::write(&path, "old\n").unwrap();

        let mut file = open_append(&path).unwrap();
        append_line(&mut file, "new").unwrap();
        drop(file);

        assert_eq!(fs::read_to_string(&path).unwrap(), "old\nnew\n");
    }

    #[test]
    fn test_open_fails_without_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("log.txt");
        assert!(open_append(&path).is_err());
        assert!(!path.exists());
    }
}
