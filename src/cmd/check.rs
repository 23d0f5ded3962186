// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::Path;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::document::Document;
use crate::error::Fallible;
use crate::error::fail;

pub fn check_documents(path: &Path) -> Fallible<()> {
    if !path.exists() {
        return fail("path does not exist.");
    }
    let files = find_documents(path)?;
    if files.is_empty() {
        return fail("no props documents found.");
    }
    let mut failures = 0;
    for file in &files {
        match Document::load(file) {
            Ok(doc) => log::debug!("{}: {} entries", file.display(), doc.len()),
            Err(e) => {
                eprintln!("{e}");
                failures += 1;
            }
        }
    }
    if failures > 0 {
        return fail(format!(
            "{failures} of {} documents failed validation.",
            files.len()
        ));
    }
    println!("ok");
    Ok(())
}

/// A file path is returned as is, and loading it fails unless it is a `.json`
/// or `.toml` file. Directories are searched recursively for `.json` and
/// `.toml` files.
pub fn find_documents(path: &Path) -> Fallible<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path
                .extension()
                .is_some_and(|ext| ext == "json" || ext == "toml")
        {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs::create_dir_all;
    use std::fs::write;
    use std::path::PathBuf;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_non_existent_directory() {
        let directory = PathBuf::from("./derpherp");
        assert!(check_documents(&directory).is_err());
    }

    #[test]
    fn test_valid_directory() {
        let directory = PathBuf::from("./test/valid");
        assert!(check_documents(&directory).is_ok());
    }

    #[test]
    fn test_invalid_directory() {
        let directory = PathBuf::from("./test/invalid");
        assert!(check_documents(&directory).is_err());
    }

    #[test]
    fn test_single_file() {
        let file = PathBuf::from("./test/valid/dashboard.toml");
        assert!(check_documents(&file).is_ok());
    }

    #[test]
    fn test_empty_directory() -> Fallible<()> {
        let dir = tempdir()?;
        assert!(check_documents(dir.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_find_documents() -> Fallible<()> {
        let dir = tempdir()?;
        let nested = dir.path().join("nested");
        create_dir_all(&nested)?;
        write(dir.path().join("b.toml"), "")?;
        write(dir.path().join("notes.md"), "")?;
        write(nested.join("a.json"), "{}")?;
        let files = find_documents(dir.path())?;
        let names: Vec<String> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["b.toml", "a.json"]);
        Ok(())
    }

    #[test]
    fn test_single_file_with_unknown_extension() -> Fallible<()> {
        let dir = tempdir()?;
        let file = dir.path().join("cards.yaml");
        write(&file, "feedback: []")?;
        assert_eq!(find_documents(&file)?, vec![file.clone()]);
        assert!(check_documents(&file).is_err());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_find_documents_skips_symlinks() -> Fallible<()> {
        let dir = tempdir()?;
        let real = dir.path().join("real.json");
        write(&real, "{}")?;
        std::os::unix::fs::symlink(&real, dir.path().join("link.json"))?;
        assert_eq!(find_documents(dir.path())?, vec![real]);
        Ok(())
    }
}
