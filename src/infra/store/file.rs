//! Whole-document read and write primitives.
//!
//! Writes go to a sibling temporary file which is fsynced and then renamed
//! over the target, so readers only ever observe a complete document. A
//! symlinked target is resolved first and the link itself is left in place.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use super::error::{StoreError, StoreResult};
use crate::config::TEMP_FILE_SUFFIX;
use crate::domain::Document;

/// Read and decode the full document at `path`.
pub(crate) async fn read_document(path: &Path) -> StoreResult<Document> {
    let bytes = fs::read(path)
        .await
        .map_err(|e| StoreError::read(path, e))?;

    serde_json::from_slice(&bytes).map_err(|e| StoreError::decode(path, e))
}

/// Serialize `doc` and atomically replace the file at `path`.
pub(crate) async fn write_document(path: &Path, doc: &Document) -> StoreResult<()> {
    let data = serde_json::to_vec(doc).map_err(StoreError::Encode)?;
    let target = resolve_target(path)
        .await
        .map_err(|e| StoreError::write(path, e))?;
    let tmp = temp_path(&target);

    if let Err(e) = write_synced(&tmp, &data).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(StoreError::write(path, e));
    }

    if let Err(e) = fs::rename(&tmp, &target).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(StoreError::write(path, e));
    }

    fsync_dir(parent_dir(&target))
        .await
        .map_err(|e| StoreError::write(path, e))?;

    tracing::trace!(path = %target.display(), bytes = data.len(), "document written");
    Ok(())
}

/// Remove temporary siblings of `path` left behind by an interrupted write.
///
/// Only call this while no write to `path` is in flight.
pub(crate) async fn remove_stale_temps(path: &Path) -> io::Result<usize> {
    let target = resolve_target(path).await?;
    let Some(name) = target.file_name().map(|n| n.to_string_lossy().into_owned()) else {
        return Ok(0);
    };
    let prefix = format!(".{}.", name);
    let suffix = format!(".{}", TEMP_FILE_SUFFIX);

    let mut entries = match fs::read_dir(parent_dir(&target)).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };

    let mut removed = 0;
    while let Some(entry) = entries.next_entry().await? {
        let entry_name = entry.file_name().to_string_lossy().into_owned();
        if entry_name.starts_with(&prefix) && entry_name.ends_with(&suffix) {
            fs::remove_file(entry.path()).await?;
            removed += 1;
        }
    }
    Ok(removed)
}

/// Follow `path` through any symlinks to the file that holds the data.
///
/// A path that is not a symlink (including one that does not exist yet) is
/// returned unchanged.
async fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    let mut target = path.to_path_buf();
    // Bounded so a symlink loop fails instead of spinning.
    for _ in 0..MAX_SYMLINK_HOPS {
        match fs::symlink_metadata(&target).await {
            Ok(meta) if meta.file_type().is_symlink() => {
                let link = fs::read_link(&target).await?;
                target = parent_dir(&target).join(link);
            }
            Ok(_) => return Ok(target),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(target),
            Err(e) => return Err(e),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::Other,
        format!("too many levels of symbolic links: {}", path.display()),
    ))
}

const MAX_SYMLINK_HOPS: usize = 40;

async fn write_synced(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(data).await?;
    file.flush().await?;
    file.sync_all().await
}

/// Persist the directory entry created by a rename.
#[cfg(unix)]
async fn fsync_dir(dir: &Path) -> io::Result<()> {
    fs::File::open(dir).await?.sync_all().await
}

#[cfg(not(unix))]
async fn fsync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

/// Directory containing `path`; `.` for a bare file name.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Hidden, uniquely named sibling of `path` in the same directory.
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(
        ".{}.{}.{}",
        name,
        Uuid::new_v4().simple(),
        TEMP_FILE_SUFFIX
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_temp_path_is_sibling() {
        let path = Path::new("/data/db.json");
        let tmp = temp_path(path);
        assert_eq!(tmp.parent(), path.parent());
        let name = tmp.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".db.json."));
        assert!(name.ends_with(".tmp"));
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");

        write_document(&path, &Document::default()).await.unwrap();
        let doc = read_document(&path).await.unwrap();
        assert_eq!(doc, Document::default());
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_document(&dir.path().join("absent.json")).await.unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }

    #[tokio::test]
    async fn test_write_into_missing_directory_fails_cleanly() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("db.json");

        let err = write_document(&path, &Document::default()).await.unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_parent_dir_of_bare_name() {
        assert_eq!(parent_dir(Path::new("db.json")), Path::new("."));
        assert_eq!(parent_dir(Path::new("/data/db.json")), Path::new("/data"));
    }

    #[tokio::test]
    async fn test_rewrite_keeps_file_readable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");

        write_document(&path, &Document::default()).await.unwrap();
        write_document(&path, &Document::default()).await.unwrap();
        fsync_dir(dir.path()).await.unwrap();
        assert_eq!(read_document(&path).await.unwrap(), Document::default());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_write_goes_through_symlink() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real.json");
        let link = dir.path().join("db.json");
        fs::write(&real, b"{\"users\":{},\"posts\":{}}").await.unwrap();
        std::os::unix::fs::symlink("real.json", &link).unwrap();

        write_document(&link, &Document::default()).await.unwrap();

        let meta = fs::symlink_metadata(&link).await.unwrap();
        assert!(meta.file_type().is_symlink());
        assert_eq!(fs::read_link(&link).await.unwrap(), Path::new("real.json"));
    }

    #[tokio::test]
    async fn test_remove_stale_temps_only_touches_own_siblings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        write_document(&path, &Document::default()).await.unwrap();
        fs::write(temp_path(&path), b"partial").await.unwrap();
        fs::write(dir.path().join(".other.json.abc.tmp"), b"x").await.unwrap();

        let removed = remove_stale_temps(&path).await.unwrap();
        assert_eq!(removed, 1);

        let mut entries = fs::read_dir(dir.path()).await.unwrap();
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        assert_eq!(names, vec![".other.json.abc.tmp", "db.json"]);
    }

    #[tokio::test]
    async fn test_remove_stale_temps_in_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("db.json");
        assert_eq!(remove_stale_temps(&path).await.unwrap(), 0);
    }
}
