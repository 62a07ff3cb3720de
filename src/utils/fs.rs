use std::fs;
use std::io::Write;
use std::path::Path;

use crate::utils::error::{BoxResult, SiteError, SiteResult};

/// Check if a path exists and is a directory
pub fn is_directory<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_dir()
}

/// Read a content file, reporting failures against its path
pub fn read_content<P: AsRef<Path>>(path: P) -> SiteResult<String> {
    fs::read_to_string(path.as_ref()).map_err(|source| SiteError::FileRead {
        path: path.as_ref().to_path_buf(),
        source,
    })
}

/// Write a string to a file, creating parent directories if needed
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = fs::File::create(path.as_ref())?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}
