// Input path resolution and output file naming.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::{MiniJsError, MiniJsResult};

/// Resolve a user supplied path to an absolute, lexically cleaned path and
/// check that it names an existing regular file.
pub fn resolve_input(raw: &Path) -> MiniJsResult<PathBuf> {
    let absolute = std::path::absolute(raw).map_err(|source| MiniJsError::InvalidPath {
        path: raw.to_path_buf(),
        source,
    })?;
    let path = clean(&absolute);

    let meta = match fs::metadata(&path) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(MiniJsError::NotFound { path });
        }
        Err(source) => return Err(MiniJsError::Inaccessible { path, source }),
    };

    if meta.is_dir() {
        return Err(MiniJsError::NotAFile { path });
    }
    Ok(path)
}

/// Compute where the minified output goes.
///
/// With no override (or an empty one) the name is `<stem>.min<.ext>`. The
/// chosen name is joined with the input file's directory, so an absolute
/// override replaces the directory entirely.
pub fn output_name(override_name: Option<&str>, input: &Path) -> PathBuf {
    let dir = input.parent().unwrap_or_else(|| Path::new(""));
    match override_name.filter(|name| !name.is_empty()) {
        Some(name) => dir.join(name),
        None => dir.join(default_name(input)),
    }
}

fn default_name(input: &Path) -> OsString {
    let mut name = input.file_stem().map(OsString::from).unwrap_or_default();
    name.push(".min");
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    name
}

/// Lexical cleanup: drops `.` and folds `..` into its parent. `..` above the
/// root stays at the root.
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_name_inserts_min_before_extension() {
        let out = output_name(None, Path::new("/work/src/foo.js"));
        assert_eq!(out, PathBuf::from("/work/src/foo.min.js"));
    }

    #[test]
    fn default_name_without_extension_appends_min() {
        let out = output_name(None, Path::new("/work/bundle"));
        assert_eq!(out, PathBuf::from("/work/bundle.min"));
    }

    #[test]
    fn default_name_keeps_only_last_extension() {
        let out = output_name(None, Path::new("/work/app.test.js"));
        assert_eq!(out, PathBuf::from("/work/app.test.min.js"));
    }

    #[test]
    fn empty_override_falls_back_to_default() {
        let out = output_name(Some(""), Path::new("/work/foo.js"));
        assert_eq!(out, PathBuf::from("/work/foo.min.js"));
    }

    #[test]
    fn override_is_joined_with_input_directory() {
        let out = output_name(Some("bar.js"), Path::new("/work/foo.js"));
        assert_eq!(out, PathBuf::from("/work/bar.js"));
    }

    #[test]
    fn absolute_override_replaces_directory() {
        let out = output_name(Some("/tmp/out.js"), Path::new("/work/foo.js"));
        assert_eq!(out, PathBuf::from("/tmp/out.js"));
    }

    #[test]
    fn output_name_is_deterministic() {
        let input = Path::new("/work/foo.js");
        assert_eq!(output_name(Some("x.js"), input), output_name(Some("x.js"), input));
        assert_eq!(output_name(None, input), output_name(None, input));
    }

    #[test]
    fn clean_folds_dot_segments() {
        assert_eq!(clean(Path::new("/a/./b/../c.js")), PathBuf::from("/a/c.js"));
        assert_eq!(clean(Path::new("/../x.js")), PathBuf::from("/x.js"));
    }

    #[test]
    fn resolve_input_cleans_existing_file() {
        let dir = tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("nested")).expect("mkdir");
        std::fs::write(dir.path().join("foo.js"), "let a = 1;").expect("write");

        let raw = dir.path().join("nested").join("..").join(".").join("foo.js");
        let resolved = resolve_input(&raw).expect("resolve");
        assert!(resolved.is_absolute());
        assert_eq!(resolved, clean(&dir.path().join("foo.js")));
    }

    #[test]
    fn resolve_input_reports_missing_file() {
        let dir = tempdir().expect("tempdir");
        let err = resolve_input(&dir.path().join("missing.js")).unwrap_err();
        assert!(matches!(err, MiniJsError::NotFound { .. }));
    }

    #[test]
    fn resolve_input_rejects_directory() {
        let dir = tempdir().expect("tempdir");
        let err = resolve_input(dir.path()).unwrap_err();
        assert!(matches!(err, MiniJsError::NotAFile { .. }));
        assert!(err.to_string().ends_with("is a directory, not a file"));
    }

    #[test]
    fn resolve_input_rejects_empty_path() {
        let err = resolve_input(Path::new("")).unwrap_err();
        assert!(matches!(err, MiniJsError::InvalidPath { .. }));
    }
}
