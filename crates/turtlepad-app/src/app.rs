//! Configuration, the headless run and snapshot output.

use crate::demo::{self, EventQueue};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use turtlepad_core::document::NodeSnapshot;
use turtlepad_core::{
    Cursor, DrawCommand, Library, LibraryConfig, MemoryDocument, RecordingSurface, SurfaceError, UiError,
};
use turtlepad_render::VelloSurface;

/// Runner errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read config {path}: {source}")]
    ReadConfig { path: PathBuf, source: io::Error },
    #[error("Invalid config {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid canvas size {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    #[error("Drawing failed: {0}")]
    Surface(#[from] SurfaceError),
    #[error("Widget call failed: {0}")]
    Ui(#[from] UiError),
    #[error("Failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Load library settings from an optional JSON file, then apply size
/// overrides. Fields missing from the file keep their defaults.
pub fn load_config(
    path: Option<&Path>,
    width: Option<f64>,
    height: Option<f64>,
) -> Result<LibraryConfig, AppError> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| AppError::ReadConfig {
                path: path.to_path_buf(),
                source,
            })?;
            serde_json::from_str(&text).map_err(|source| AppError::ParseConfig {
                path: path.to_path_buf(),
                source,
            })?
        }
        None => LibraryConfig::default(),
    };
    if let Some(width) = width {
        config.width = width;
    }
    if let Some(height) = height {
        config.height = height;
    }
    if !(config.width > 0.0 && config.height > 0.0) {
        return Err(AppError::InvalidSize {
            width: config.width,
            height: config.height,
        });
    }
    log::debug!("Config: {config:?}");
    Ok(config)
}

/// Final state of a run.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub config: LibraryConfig,
    pub cursor: Cursor,
    pub commands: Vec<DrawCommand>,
    pub document: Vec<NodeSnapshot>,
    pub strokes: usize,
    pub fills: usize,
    /// `[x0, y0, x1, y1]` of everything painted.
    pub painted_bounds: Option<[f64; 4]>,
}

/// Run the demo program and collect the result.
pub fn run(config: &LibraryConfig) -> Result<Snapshot, AppError> {
    let mut library = Library::new(RecordingSurface::new(), MemoryDocument::new(), config)?;

    demo::draw(library.turtle_mut())?;
    let clicks = EventQueue::default();
    demo::build_widgets(library.ui_mut(), clicks.clone())?;
    library.ui_mut().set_text(demo::INPUT_ID, "hello, turtle")?;
    library.ui_mut().document_mut().dispatch(demo::BUTTON_ID, "click");
    let answered = demo::answer_clicks(library.ui_mut(), &clicks)?;
    log::info!("Answered {answered} click(s)");

    let cursor = library.turtle().cursor().clone();
    let (recording, document) = library.into_parts();

    let mut scene = VelloSurface::new();
    recording.replay(&mut scene)?;
    let painted_bounds = scene.painted_bounds().map(|r| [r.x0, r.y0, r.x1, r.y1]);
    log::info!(
        "Rendered {} stroke(s) and {} fill(s), bounds {painted_bounds:?}",
        scene.stroke_count(),
        scene.fill_count()
    );

    Ok(Snapshot {
        config: config.clone(),
        cursor,
        commands: recording.commands().to_vec(),
        document: document.snapshot(),
        strokes: scene.stroke_count(),
        fills: scene.fill_count(),
        painted_bounds,
    })
}

/// Write the snapshot as pretty JSON to `output`, or stdout when absent.
pub fn write_snapshot(snapshot: &Snapshot, output: Option<&Path>) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(snapshot)?;
    match output {
        Some(path) => {
            fs::write(path, json)?;
            log::info!("Wrote snapshot to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = load_config(None, None, None).unwrap();
        assert_eq!(config, LibraryConfig::default());
    }

    #[test]
    fn test_config_file_with_overrides() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("turtlepad.json");
        fs::write(&path, r##"{ "width": 300, "pen_color": "#123456" }"##).unwrap();

        let config = load_config(Some(&path), None, Some(200.0)).unwrap();
        assert_eq!(config.width, 300.0);
        assert_eq!(config.height, 200.0);
        assert_eq!(config.pen_color, "#123456");
        assert_eq!(config.pen_width, 5.0);
    }

    #[test]
    fn test_bad_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ width: ").unwrap();
        assert!(matches!(
            load_config(Some(&path), None, None),
            Err(AppError::ParseConfig { .. })
        ));
        assert!(matches!(
            load_config(Some(&dir.path().join("missing.json")), None, None),
            Err(AppError::ReadConfig { .. })
        ));
    }

    #[test]
    fn test_invalid_size() {
        assert!(matches!(
            load_config(None, Some(0.0), None),
            Err(AppError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_run() {
        let config = LibraryConfig::default().with_size(300.0, 200.0);
        let snapshot = run(&config).unwrap();
        assert_eq!(snapshot.strokes, 7);
        assert_eq!(snapshot.fills, 1);
        assert!(snapshot.painted_bounds.is_some());
        // Four widgets plus the write overlay.
        assert_eq!(snapshot.document.len(), 5);
        let overlay = snapshot
            .document
            .iter()
            .find(|n| n.attributes.contains_key(turtlepad_core::ui::WRITE_MARKER))
            .unwrap();
        assert_eq!(overlay.text, "You typed: hello, turtle");
    }

    #[test]
    fn test_write_snapshot_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        let snapshot = run(&LibraryConfig::default()).unwrap();
        write_snapshot(&snapshot, Some(&path)).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["config"]["width"], 320.0);
        assert_eq!(value["document"].as_array().unwrap().len(), 5);
        assert!(value["commands"].as_array().unwrap().len() > 10);
    }
}
