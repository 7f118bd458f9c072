//! Package and root assemblers
//!
//! Both assemblers are by-value builders: configure with chained setters,
//! then call `create()` once to render the template and write the files.

mod package;
mod root;

pub use package::PackageTemplate;
pub use root::RootTemplate;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::template::RenderedFile;
use crate::transaction::Transaction;

/// Write rendered files below `dir` as a single transaction
///
/// Returns the absolute paths written, in render order. If any write fails,
/// files created by this call are removed and overwritten files restored.
pub(crate) fn write_rendered(dir: &Path, files: &[RenderedFile]) -> Result<Vec<PathBuf>> {
    let mut transaction = Transaction::new();
    transaction.ensure_dir(dir)?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let target = dir.join(&file.path);
        transaction.write_file(&target, &file.content)?;
        written.push(target);
    }

    transaction.commit();
    Ok(written)
}
