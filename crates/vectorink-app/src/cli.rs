//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Replay a recorded input script through the VectorInk interaction engine.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "vectorink-replay")]
pub struct CliArgs {
    /// Editor configuration file; defaults are used when absent.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Print the configured keyboard shortcuts.
    #[arg(long = "shortcuts")]
    pub show_shortcuts: bool,
    /// Script to replay.
    #[arg(required_unless_present = "show_shortcuts")]
    pub script: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_script_and_config() {
        let args =
            CliArgs::try_parse_from(["vectorink-replay", "--config", "editor.json", "drag.json"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("editor.json")));
        assert_eq!(args.script, Some(PathBuf::from("drag.json")));
        assert!(!args.show_shortcuts);

        let args = CliArgs::try_parse_from(["vectorink-replay", "-c", "editor.json", "drag.json"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("editor.json")));
    }

    #[test]
    fn test_shortcuts_without_script() {
        let args = CliArgs::try_parse_from(["vectorink-replay", "--shortcuts"]).unwrap();
        assert!(args.show_shortcuts);
        assert!(args.script.is_none());
    }

    #[test]
    fn test_usage_errors() {
        let err = CliArgs::try_parse_from(["vectorink-replay"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        assert!(CliArgs::try_parse_from(["vectorink-replay", "--config"]).is_err());

        let err = CliArgs::try_parse_from(["vectorink-replay", "--verbose", "a.json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        assert!(CliArgs::try_parse_from(["vectorink-replay", "a.json", "b.json"]).is_err());
    }
}
