use crate::error::{FetchError, Result};
use std::path::Path;

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => FetchError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => FetchError::from(e),
        })?;
    }
    Ok(())
}

pub fn remove_dir_recursive(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_dir_all(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => FetchError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => FetchError::from(e),
        })?;
    }
    Ok(())
}

pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    ensure_dir_exists(dst)?;

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path).map_err(|e| match e.kind() {
                std::io::ErrorKind::PermissionDenied => FetchError::PermissionDenied {
                    path: dst_path.clone(),
                },
                _ => FetchError::from(e),
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ensure_dir_exists_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b").join("c");

        ensure_dir_exists(&nested).unwrap();

        assert!(nested.is_dir());
    }

    #[test]
    fn test_ensure_dir_exists_accepts_existing() {
        let tmp = tempfile::tempdir().unwrap();

        ensure_dir_exists(tmp.path()).unwrap();

        assert!(tmp.path().is_dir());
    }

    #[test]
    fn test_remove_dir_recursive_ignores_missing() {
        let tmp = tempfile::tempdir().unwrap();

        remove_dir_recursive(&tmp.path().join("not-there")).unwrap();
    }

    #[test]
    fn test_remove_dir_recursive_deletes_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("tree");
        std::fs::create_dir_all(root.join("sub")).unwrap();
        std::fs::write(root.join("sub").join("file.txt"), "data").unwrap();

        remove_dir_recursive(&root).unwrap();

        assert!(!root.exists());
    }

    #[test]
    fn test_copy_dir_recursive_preserves_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        std::fs::create_dir_all(src.join("Box").join("glTF")).unwrap();
        std::fs::write(src.join("Box").join("glTF").join("Box.gltf"), "box model").unwrap();
        std::fs::write(src.join("model-index.json"), "[]").unwrap();

        let dst = tmp.path().join("dst");
        copy_dir_recursive(&src, &dst).unwrap();

        let copied = dst.join("Box").join("glTF").join("Box.gltf");
        assert_eq!(std::fs::read_to_string(&copied).unwrap(), "box model");
        assert_eq!(
            std::fs::read_to_string(dst.join("model-index.json")).unwrap(),
            "[]"
        );
        assert_eq!(
            std::fs::metadata(&copied).unwrap().len(),
            std::fs::metadata(src.join("Box").join("glTF").join("Box.gltf"))
                .unwrap()
                .len()
        );
    }
}
