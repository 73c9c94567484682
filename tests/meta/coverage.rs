//! Keeps `tests/unit/` a file-for-file mirror of `src/`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    /// Files that organise modules rather than hold logic
    fn is_structural(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn rust_files(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path
                        .strip_prefix(root)
                        .map_err(io::Error::other)?
                        .to_string_lossy()
                        .replace('\\', "/");
                    found.insert(relative);
                }
            }
        }

        Ok(found)
    }

    fn mirrored(root: &str) -> BTreeSet<String> {
        rust_files(Path::new(root))
            .unwrap_or_else(|error| panic!("cannot scan {root}: {error}"))
            .into_iter()
            .filter(|relative| !is_structural(relative))
            .collect()
    }

    // Tests every source module has a unit test file at the same relative path
    // Verified by deleting tests/unit/spatial/grid.rs
    #[test]
    fn test_every_source_file_has_unit_tests() {
        let sources = mirrored("src");
        let tests = mirrored("tests/unit");
        let missing: Vec<&String> = sources.difference(&tests).collect();

        assert!(
            missing.is_empty(),
            "source files without tests/unit counterparts: {missing:?}"
        );
    }

    // Tests no unit test file outlives the module it covers
    // Verified by adding tests/unit/io/stale.rs
    #[test]
    fn test_no_orphaned_unit_tests() {
        let sources = mirrored("src");
        let tests = mirrored("tests/unit");
        let orphaned: Vec<&String> = tests.difference(&sources).collect();

        assert!(
            orphaned.is_empty(),
            "tests/unit files without a source module: {orphaned:?}"
        );
    }

    // Tests each non-structural test file declares at least one test
    // Verified by emptying tests/unit/io/progress.rs
    #[test]
    fn test_test_files_contain_tests() {
        let empty: Vec<String> = rust_files(Path::new("tests"))
            .unwrap_or_else(|error| panic!("cannot scan tests: {error}"))
            .into_iter()
            .filter(|relative| !relative.ends_with("mod.rs"))
            .filter(|relative| {
                fs::read_to_string(Path::new("tests").join(relative))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .collect();

        assert!(empty.is_empty(), "test files without #[test]: {empty:?}");
    }
}
