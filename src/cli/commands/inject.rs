use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::layout::compile_file;
use crate::utils::error::BoxResult;
use crate::utils::fs::write_file;

/// Compile one content file and print or write the resulting module
pub fn handle_inject_command(config: &Config, file: &Path, output: Option<&PathBuf>) -> BoxResult<()> {
    let injection = compile_file(file, &config.layout_binding())?;
    if injection.data.is_empty() {
        warn!("{} has no front matter", file.display());
    }
    let module = injection.document.to_mdx();

    match output {
        Some(path) => {
            write_file(path, &module)?;
            info!("Wrote {} to {}", file.display(), path.display());
        }
        None => print!("{}", module),
    }
    Ok(())
}
