//! The single write step of a generation run.
//!
//! Both artifacts arrive fully rendered; either both files land on disk
//! or the error surfaces before anything is written next to a partial
//! result from the same run.

use crate::error::{BridgeError, BridgeResult};
use crate::generate::emitter::Artifacts;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write both artifacts into `out_dir`, creating it if needed.
///
/// Returns the paths of the written header and implementation.
pub fn write_artifacts(out_dir: &Path, artifacts: &Artifacts) -> BridgeResult<(PathBuf, PathBuf)> {
    if !out_dir.exists() {
        std::fs::create_dir_all(out_dir).map_err(|source| BridgeError::FileWrite {
            path: out_dir.to_path_buf(),
            source,
        })?;
    }

    let header_path = out_dir.join(&artifacts.header_name);
    let impl_path = out_dir.join(&artifacts.impl_name);

    std::fs::write(&header_path, &artifacts.header_text).map_err(|source| {
        BridgeError::FileWrite {
            path: header_path.clone(),
            source,
        }
    })?;
    debug!(path = %header_path.display(), "wrote declaration artifact");

    std::fs::write(&impl_path, &artifacts.impl_text).map_err(|source| BridgeError::FileWrite {
        path: impl_path.clone(),
        source,
    })?;
    debug!(path = %impl_path.display(), "wrote implementation artifact");

    Ok((header_path, impl_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifacts() -> Artifacts {
        Artifacts {
            header_name: "FooScriptForward.h".to_string(),
            header_text: "// header\n".to_string(),
            impl_name: "FooScriptForward.C".to_string(),
            impl_text: "// impl\n".to_string(),
        }
    }

    #[test]
    fn test_writes_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let (header_path, impl_path) = write_artifacts(dir.path(), &artifacts()).unwrap();
        assert_eq!(std::fs::read_to_string(header_path).unwrap(), "// header\n");
        assert_eq!(std::fs::read_to_string(impl_path).unwrap(), "// impl\n");
    }

    #[test]
    fn test_creates_missing_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("generated").join("bridges");
        write_artifacts(&nested, &artifacts()).unwrap();
        assert!(nested.join("FooScriptForward.h").exists());
    }
}
