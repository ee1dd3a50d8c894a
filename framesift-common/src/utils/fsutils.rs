use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Whether the path has one of the extensions, ignoring case and any leading dot in
/// `extensions`.
pub fn has_extension(path: impl AsRef<Path>, extensions: &[impl AsRef<str>]) -> bool {
    let Some(ext) = path.as_ref().extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|allowed| allowed.as_ref().trim_start_matches('.').eq_ignore_ascii_case(ext))
}

/// Lists the image files directly inside `dir`, sorted by path. Fails if `dir` can't be
/// read, e.g., because it doesn't exist.
pub fn list_images(
    dir: impl AsRef<Path>,
    extensions: &[impl AsRef<str>],
) -> io::Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file() && has_extension(&path, extensions) {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}

/// Creates the directory and all of its parents, unless it already exists.
pub fn ensure_dir(dir: impl AsRef<Path>) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Whether to replace a file that already exists in the destination
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Existing {
    Overwrite,
    Keep,
}

/// Copies `file` into `dir` using the same filename. Returns the path of the copy.
pub fn copy_into(
    file: impl AsRef<Path>,
    dir: impl AsRef<Path>,
    existing: Existing,
) -> io::Result<PathBuf> {
    let file = file.as_ref();
    let name = file.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "the path has no filename")
    })?;
    let dest = dir.as_ref().join(name);

    if existing == Existing::Keep && dest.try_exists()? {
        return Ok(dest);
    }

    fs::copy(file, &dest)?;
    Ok(dest)
}

/// Try to read the file, return None if it doesn't exist
pub fn read_optional_file(path: impl AsRef<Path>) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
        Ok(s) => Ok(Some(s)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lists_only_images() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.jpg", "a.PNG", "notes.txt", "c.jpeg"] {
            fs::write(dir.path().join(name), "fake").unwrap();
        }
        fs::create_dir(dir.path().join("sub.jpg")).unwrap();

        let images = list_images(dir.path(), &["jpg", "png"]).unwrap();
        assert_eq!(
            vec![dir.path().join("a.PNG"), dir.path().join("b.jpg")],
            images
        );
    }

    #[test]
    fn custom_extensions() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["pic.webp", "pic.jpg"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let images = list_images(dir.path(), &[".webp"]).unwrap();
        assert_eq!(vec![dir.path().join("pic.webp")], images);
    }

    #[test]
    fn missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_images(dir.path().join("nope"), &["jpg"]).unwrap_err();
        assert_eq!(io::ErrorKind::NotFound, err.kind());
    }

    #[test]
    fn ensure_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("folder");
        ensure_dir(&target).unwrap();
        assert!(target.is_dir());
        ensure_dir(&target).unwrap();
    }

    #[test]
    fn copy_keeps_existing() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        let file = src.path().join("frame.jpg");
        fs::write(&file, "new").unwrap();
        fs::write(dst.path().join("frame.jpg"), "old").unwrap();

        let copy = copy_into(&file, dst.path(), Existing::Keep).unwrap();
        assert_eq!(dst.path().join("frame.jpg"), copy);
        assert_eq!("old", fs::read_to_string(&copy).unwrap());

        copy_into(&file, dst.path(), Existing::Overwrite).unwrap();
        assert_eq!("new", fs::read_to_string(&copy).unwrap());
    }

    #[test]
    fn optional_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(None, read_optional_file(dir.path().join("rc")).unwrap());
        fs::write(dir.path().join("rc"), "--blur").unwrap();
        assert_eq!(
            Some("--blur".to_owned()),
            read_optional_file(dir.path().join("rc")).unwrap()
        );
    }
}
