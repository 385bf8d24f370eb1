//! Script replay through the interaction engine.

use crate::cli::CliArgs;
use crate::shortcuts::ShortcutRegistry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use vectorink_core::{Action, AdjustConfig, DocumentState, EditorConfig, Engine, InputEvent, Mode, Sources};

/// Errors from the replay shell.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A recorded session: the starting snapshot and the raw events in arrival
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    pub state: DocumentState,
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

impl ReplayScript {
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        Self::from_json(&read(path)?)
    }
}

/// One element emitted on an outbound stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emitted {
    Action(Action),
    Mode(Mode),
    AdjustConfigs(Vec<AdjustConfig>),
}

/// Load an editor configuration file.
pub fn load_config(path: &Path) -> Result<EditorConfig, ReplayError> {
    let config = EditorConfig::from_json(&read(path)?)?;
    log::info!(
        "Loaded config from {:?} ({} semantic tags)",
        path,
        config.semantics.tags.len()
    );
    Ok(config)
}

/// Feed every event of `script` through a default engine.
///
/// The shell stands in for the document store only as far as the mode goes:
/// emitted mode transitions are applied to its copy of the snapshot before
/// the next event. Actions are reported, not applied.
pub fn replay(script: &ReplayScript, config: &EditorConfig) -> Vec<Emitted> {
    let mut engine = Engine::default();
    let mut state = script.state.clone();
    let mut emitted = Vec::new();

    for event in &script.events {
        let outbox = engine.dispatch(event, &Sources::new(&state, config));
        if let Some(&mode) = outbox.modes.last() {
            state.mode = mode;
        }
        emitted.extend(outbox.actions.into_iter().map(Emitted::Action));
        emitted.extend(outbox.modes.into_iter().map(Emitted::Mode));
        emitted.extend(outbox.adjust_configs.into_iter().map(Emitted::AdjustConfigs));
    }

    log::info!(
        "Replayed {} events, {} outputs",
        script.events.len(),
        emitted.len()
    );
    emitted
}

/// Run the shell for parsed arguments, writing JSON lines to stdout.
pub fn run_cli(args: &CliArgs) -> Result<(), ReplayError> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => EditorConfig::default(),
    };

    if args.show_shortcuts {
        ShortcutRegistry::print_all(&config);
    }

    let Some(script_path) = &args.script else {
        return Ok(());
    };
    let script = ReplayScript::load(script_path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for item in replay(&script, &config) {
        let line = serde_json::to_string(&item)?;
        writeln!(out, "{}", line).map_err(|source| ReplayError::Io {
            path: PathBuf::from("<stdout>"),
            source,
        })?;
    }
    Ok(())
}

fn read(path: &Path) -> Result<String, ReplayError> {
    fs::read_to_string(path).map_err(|source| ReplayError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use std::io::Write as _;
    use vectorink_core::{AxisConstraint, Item, KeyEvent, PointerEvent, ResizeHandle, SelectionMode, UiIntent};

    fn script_with_rect(events: Vec<InputEvent>) -> ReplayScript {
        let item = Item::rect(0.0, 0.0, 10.0, 10.0);
        let id = item.id;
        ReplayScript {
            state: DocumentState::new()
                .with_item(item)
                .with_selection([id])
                .with_sel_mode(SelectionMode::Bbox),
            events,
        }
    }

    #[test]
    fn test_replay_drag() {
        let script = script_with_rect(vec![
            PointerEvent::Down {
                position: Point::new(10.0, 10.0),
                handle: Some(ResizeHandle::SouthEast),
            }
            .into(),
            PointerEvent::Move { position: Point::new(20.0, 20.0) }.into(),
            PointerEvent::Up { position: Point::new(20.0, 20.0) }.into(),
        ]);

        let emitted = replay(&script, &EditorConfig::default());
        assert_eq!(emitted.len(), 1);
        match &emitted[0] {
            Emitted::Action(Action::ResizeItems(cmd)) => {
                assert_eq!(cmd.dir, AxisConstraint::BOTH);
                assert_eq!(cmd.moving_pos, Point::new(20.0, 20.0));
            }
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_replay_applies_emitted_mode() {
        let down: InputEvent = PointerEvent::Down {
            position: Point::new(10.0, 10.0),
            handle: Some(ResizeHandle::SouthEast),
        }
        .into();
        let moved: InputEvent = PointerEvent::Move { position: Point::new(20.0, 20.0) }.into();
        let up: InputEvent = PointerEvent::Up { position: Point::new(20.0, 20.0) }.into();

        let mut script = script_with_rect(vec![
            down.clone(),
            moved.clone(),
            up,
            KeyEvent::Pressed("Escape".to_string()).into(),
            down,
            moved,
        ]);
        script.state.mode = Mode::Resizing;

        // No capture while the snapshot is resizing; escape brings it back to idle.
        let emitted = replay(&script, &EditorConfig::default());
        assert_eq!(emitted.len(), 3);
        assert_eq!(emitted[0], Emitted::Mode(Mode::Idle));
        assert_eq!(emitted[1], Emitted::AdjustConfigs(Vec::new()));
        assert!(matches!(emitted[2], Emitted::Action(Action::ResizeItems(_))));
    }

    #[test]
    fn test_replay_intents() {
        let script = script_with_rect(vec![
            UiIntent::ToggleLock.into(),
            KeyEvent::Pressed("B".to_string()).into(),
        ]);
        let emitted = replay(&script, &EditorConfig::default());
        assert_eq!(
            emitted,
            vec![
                Emitted::Action(Action::ToggleLock),
                Emitted::Action(Action::ToggleLock)
            ]
        );
    }

    #[test]
    fn test_emitted_json_shape() {
        let json = serde_json::to_value(Emitted::Mode(Mode::Idle)).unwrap();
        assert_eq!(json, serde_json::json!({ "mode": "idle" }));
        let json = serde_json::to_value(Emitted::AdjustConfigs(Vec::new())).unwrap();
        assert_eq!(json, serde_json::json!({ "adjust_configs": [] }));
    }

    #[test]
    fn test_load_script_and_config_files() {
        let script = script_with_rect(vec![KeyEvent::Pressed("x".to_string()).into()]);
        let mut script_file = tempfile::NamedTempFile::new().unwrap();
        script_file
            .write_all(serde_json::to_string(&script).unwrap().as_bytes())
            .unwrap();

        let mut config_file = tempfile::NamedTempFile::new().unwrap();
        config_file
            .write_all(br#"{ "keys": { "delete": "x" } }"#)
            .unwrap();

        let loaded = ReplayScript::load(script_file.path()).unwrap();
        assert_eq!(loaded, script);

        let config = load_config(config_file.path()).unwrap();
        assert_eq!(config.keys.delete, "x");
        assert_eq!(config.keys.toggle_lock, "b");

        let emitted = replay(&loaded, &config);
        assert!(matches!(
            emitted.as_slice(),
            [Emitted::Action(Action::DeleteItems { .. })]
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            load_config(&missing),
            Err(ReplayError::Io { path, .. }) if path == missing
        ));
    }

    #[test]
    fn test_unknown_handle_rejected_on_load() {
        let json = r#"{
            "state": { "items": {}, "z_list": [] },
            "events": [
                { "pointer": { "type": "down", "position": { "x": 0.0, "y": 0.0 }, "handle": "up-resize" } }
            ]
        }"#;
        match ReplayScript::from_json(json) {
            Err(ReplayError::Json(e)) => assert!(e.to_string().contains("Invalid resizer: up-resize")),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_bad_json_is_json_error() {
        assert!(matches!(
            ReplayScript::from_json("{ not json"),
            Err(ReplayError::Json(_))
        ));
    }
}
