use std::fs::File;
use std::path::Path;

use tempfile::NamedTempFile;
use tsung_scenario::prelude::ScenarioDocument;

use crate::error::RunnerError;

/// Write the document to a new temporary `tsung_*.xml` file.
///
/// The file is removed when the returned handle is dropped, so keep it alive until Tsung has
/// finished with it.
pub fn persist_to_temp_file(document: &ScenarioDocument) -> Result<NamedTempFile, RunnerError> {
    let file = tempfile::Builder::new()
        .prefix("tsung_")
        .suffix(".xml")
        .tempfile()
        .map_err(RunnerError::TempFile)?;

    document
        .write(file.as_file())
        .map_err(|source| RunnerError::Write {
            path: file.path().to_path_buf(),
            source,
        })?;

    log::info!("Wrote XML file to: {}", file.path().display());
    Ok(file)
}

/// Write the document to `path`, replacing any existing file.
pub fn persist_to_path(document: &ScenarioDocument, path: &Path) -> Result<(), RunnerError> {
    let write_err = |source| RunnerError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    document.write(file).map_err(write_err)?;

    log::info!("Wrote XML file to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use tsung_scenario::prelude::*;

    use super::*;

    fn sample_document() -> ScenarioDocument {
        let mut document = ScenarioDocument::default();
        document.add_client("localhost", true, 100);
        document.add_server("localhost", Some(8080));
        document.add_phase(1.0, TimeUnit::Minute, 2.0, TimeUnit::Second);
        document
            .add_session("browse", None)
            .add_transaction("home")
            .add_request(Method::Get, "/?a=1&b=2", None);
        document
    }

    #[test]
    fn test_temp_file_holds_serialized_document() {
        let document = sample_document();
        let file = persist_to_temp_file(&document).expect("Failed to persist document");

        let name = file.path().file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("tsung_"));
        assert!(name.ends_with(".xml"));

        let content = std::fs::read_to_string(file.path()).expect("Failed to read temp file");
        assert_eq!(content, document.serialize());
    }

    #[test]
    fn test_persist_to_path() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("scenario.xml");
        let document = sample_document();

        persist_to_path(&document, &path).expect("Failed to persist document");

        let content = std::fs::read_to_string(&path).expect("Failed to read file");
        assert_eq!(content, document.serialize());
    }

    #[test]
    fn test_persist_to_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("missing").join("scenario.xml");

        let result = persist_to_path(&sample_document(), &path);
        assert!(matches!(result, Err(RunnerError::Write { .. })));
    }
}
