//! Crash-safe replacement of JSON collections.
//!
//! Collections are written to a hidden sibling file first and then renamed
//! over the target, so readers only ever observe the old or the new
//! document.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

use crate::error::WriteError;

static STAGING_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replace `file_name` inside `dir` with `contents`.
///
/// `file_name` must be a single normal path component; nested paths are
/// rejected so the staging file always lives next to its target.
///
/// # Errors
///
/// Returns [`WriteError`] when the staging file cannot be created, flushed,
/// or renamed into place.
///
/// # Example
///
/// ```
/// use camino::Utf8Path;
/// use cap_std::{ambient_authority, fs::Dir};
///
/// let temp = tempfile::tempdir().expect("temp dir");
/// let dir = Dir::open_ambient_dir(temp.path(), ambient_authority()).expect("open dir");
///
/// dish_data::write_atomic(&dir, Utf8Path::new("dishes.json"), "[]").expect("write");
/// assert_eq!(dir.read_to_string("dishes.json").expect("read"), "[]");
/// ```
pub fn write_atomic(dir: &Dir, file_name: &Utf8Path, contents: &str) -> Result<(), WriteError> {
    let mut components = file_name.components();
    let (Some(Utf8Component::Normal(target)), None) = (components.next(), components.next())
    else {
        return Err(WriteError {
            path: file_name.to_path_buf(),
            message: "target must be a plain file name".to_owned(),
        });
    };

    let staging = staging_name(target);
    stage_contents(dir, &staging, file_name, contents)?;
    promote(dir, &staging, target, file_name)?;
    sync_dir(dir);
    Ok(())
}

fn staging_name(target: &str) -> String {
    let counter = STAGING_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    format!(".{target}.{}.{nanos}.{counter}.tmp", std::process::id())
}

fn stage_contents(
    dir: &Dir,
    staging: &str,
    target_path: &Utf8Path,
    contents: &str,
) -> Result<(), WriteError> {
    let staging_path = target_path.with_file_name(staging);
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir
        .open_with(staging, &options)
        .map_err(|err| WriteError::new(&staging_path, &err))?;

    let written = file
        .write_all(contents.as_bytes())
        .and_then(|()| file.sync_all());
    if let Err(err) = written {
        drop(file);
        drop(dir.remove_file(staging));
        return Err(WriteError::new(&staging_path, &err));
    }
    Ok(())
}

fn promote(
    dir: &Dir,
    staging: &str,
    target: &str,
    target_path: &Utf8Path,
) -> Result<(), WriteError> {
    rename_over(dir, staging, target).map_err(|err| {
        drop(dir.remove_file(staging));
        WriteError::new(target_path, &err)
    })
}

#[cfg(windows)]
fn rename_over(dir: &Dir, staging: &str, target: &str) -> io::Result<()> {
    // Rename refuses to replace an existing file here.
    match dir.remove_file(target) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(staging, dir, target)
}

#[cfg(not(windows))]
fn rename_over(dir: &Dir, staging: &str, target: &str) -> io::Result<()> {
    dir.rename(staging, dir, target)
}

fn sync_dir(dir: &Dir) {
    // Best effort.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use cap_std::ambient_authority;
    use rstest::rstest;

    fn temp_dir() -> (tempfile::TempDir, Dir) {
        let temp = tempfile::tempdir().expect("temp dir");
        let dir = Dir::open_ambient_dir(temp.path(), ambient_authority()).expect("open dir");
        (temp, dir)
    }

    #[rstest]
    fn replaces_existing_contents() {
        let (_temp, dir) = temp_dir();
        dir.write("users.json", "[]").expect("seed file");

        write_atomic(&dir, Utf8Path::new("users.json"), "[{\"id\":1}]").expect("write");

        assert_eq!(
            dir.read_to_string("users.json").expect("read"),
            "[{\"id\":1}]"
        );
    }

    #[rstest]
    fn leaves_no_staging_files_behind() {
        let (_temp, dir) = temp_dir();
        write_atomic(&dir, Utf8Path::new("dishes.json"), "[]").expect("write");

        let names: Vec<String> = dir
            .entries()
            .expect("list dir")
            .filter_map(Result::ok)
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        assert_eq!(names, vec!["dishes.json".to_owned()]);
    }

    #[rstest]
    #[case("nested/dishes.json")]
    #[case("../dishes.json")]
    #[case("")]
    fn rejects_paths_that_are_not_plain_file_names(#[case] name: &str) {
        let (_temp, dir) = temp_dir();
        let err = write_atomic(&dir, Utf8Path::new(name), "[]").expect_err("must reject");
        assert_eq!(err.path, Utf8Path::new(name));
    }
}
