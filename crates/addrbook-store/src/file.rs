use crate::document::ContactsDocument;
use crate::error::Result;
use crate::paths;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Reads the document at `path`; `Ok(None)` when the file does not exist.
pub fn read_document(path: &Path) -> Result<Option<ContactsDocument>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(serde_json::from_str(&contents)?))
}

/// Writes the document next to `path` and renames it into place.
pub fn write_document(path: &Path, document: &ContactsDocument) -> Result<()> {
    paths::ensure_parent_dir(path)?;
    let staging = staging_path(path);
    let mut body = serde_json::to_string_pretty(document)?;
    body.push('\n');

    let mut file = fs::File::create(&staging)?;
    file.write_all(body.as_bytes())?;
    file.sync_all()?;
    drop(file);
    restrict_file_permissions(&staging)?;

    if let Err(err) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(err.into());
    }
    Ok(())
}

/// Moves an unreadable contacts file to a free `.corrupt` sidecar so a later
/// save cannot overwrite it. Returns the sidecar path.
pub fn set_aside(path: &Path) -> Result<PathBuf> {
    let mut target = sidecar_path(path, ".corrupt");
    let mut attempt = 1u32;
    while target.exists() {
        target = sidecar_path(path, &format!(".corrupt.{attempt}"));
        attempt += 1;
    }
    fs::rename(path, &target)?;
    Ok(target)
}

fn staging_path(path: &Path) -> PathBuf {
    sidecar_path(path, ".tmp")
}

fn sidecar_path(path: &Path, suffix: &str) -> PathBuf {
    let mut sidecar: OsString = path.as_os_str().to_owned();
    sidecar.push(suffix);
    PathBuf::from(sidecar)
}

#[cfg(unix)]
fn restrict_file_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(0o600);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_file_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
