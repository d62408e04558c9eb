//! rowfold - Entry Point
//!
//! Loads a panel fixture into the headless host, runs a scripted sequence
//! of interactions and prints the panel state after each one.

use clap::Parser;
use rowfold::config::CliOverrides;
use rowfold::model::AppError;
use rowfold::reactivity::ReactivityStrategy;
use rowfold::sim::{PanelFixture, SimulatedPanel, Step, StepReport};
use rowfold::toggler::presentation::ClipMode;
use rowfold::toggler::HeightToggler;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// rowfold - simulate a show-more panel and print its heights
#[derive(Parser, Debug)]
#[command(name = "rowfold")]
#[command(version)]
#[command(about = "Simulate a row-limited expand/collapse panel from a layout fixture")]
pub struct Args {
    /// Path to a panel fixture (.json or .toml)
    pub fixture: PathBuf,

    /// Interaction to run, in order (repeatable)
    #[arg(short, long = "step", value_enum)]
    pub steps: Vec<Step>,

    /// Extra pixels added to the expanded max-height
    #[arg(long)]
    pub offset: Option<f64>,

    /// Transition duration in seconds
    #[arg(long)]
    pub duration: Option<f64>,

    /// Start expanded
    #[arg(long)]
    pub expanded: bool,

    /// Start collapsed, overriding `expanded = true` from the config file
    #[arg(long, conflicts_with = "expanded")]
    pub collapsed: bool,

    /// Do not clip the container, only constrain max-height
    #[arg(long)]
    pub no_clip: bool,

    /// React to viewport resizes instead of container size changes
    #[arg(long)]
    pub viewport_resize: bool,

    /// Print one JSON object per step instead of text
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            offset: self.offset,
            duration: self.duration,
            expanded: if self.expanded {
                Some(true)
            } else if self.collapsed {
                Some(false)
            } else {
                None
            },
            clip: self.no_clip.then_some(ClipMode::None),
            reactivity: self
                .viewport_resize
                .then_some(ReactivityStrategy::ViewportResize),
        }
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = rowfold::config::load_config_with_precedence(args.config.clone())?;
        let merged = rowfold::config::merge_config(config_file);
        let with_env = rowfold::config::apply_env_overrides(merged);
        rowfold::config::apply_cli_overrides(with_env, args.overrides())
    };

    rowfold::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let fixture = PanelFixture::load(&args.fixture)?;
    let panel = SimulatedPanel::from_fixture(&fixture);
    let mut toggler = HeightToggler::create(Some(panel), config.toggler_options())?;

    info!(
        fixture = %args.fixture.display(),
        steps = args.steps.len(),
        "Panel created"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    emit(&mut out, &StepReport::capture("init", &toggler), args.json)?;
    for step in &args.steps {
        step.apply(&mut toggler);
        emit(&mut out, &StepReport::capture(step.name(), &toggler), args.json)?;
    }

    Ok(())
}

fn emit(out: &mut impl Write, report: &StepReport, json: bool) -> Result<(), AppError> {
    if json {
        let line = serde_json::to_string(report).map_err(std::io::Error::from)?;
        writeln!(out, "{line}")?;
    } else {
        writeln!(out, "{}", report.render_text())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["rowfold", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["rowfold", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_fixture_is_required() {
        let result = Args::try_parse_from(["rowfold"]);
        let err = result.unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["rowfold", "panel.json"]);
        assert_eq!(args.fixture, PathBuf::from("panel.json"));
        assert!(args.steps.is_empty());
        assert_eq!(args.offset, None);
        assert_eq!(args.duration, None);
        assert!(!args.expanded);
        assert!(!args.collapsed);
        assert!(!args.no_clip);
        assert!(!args.viewport_resize);
        assert!(!args.json);
        assert_eq!(args.config, None);
        assert_eq!(args.overrides(), CliOverrides::default());
    }

    #[test]
    fn test_steps_are_repeatable_and_ordered() {
        let args = Args::parse_from([
            "rowfold",
            "panel.toml",
            "--step",
            "click",
            "-s",
            "tick",
            "--step",
            "viewport-resize",
        ]);
        assert_eq!(args.steps, vec![Step::Click, Step::Tick, Step::ViewportResize]);
    }

    #[test]
    fn test_unknown_step_rejects() {
        let result = Args::try_parse_from(["rowfold", "p.json", "--step", "jump"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_flags_become_overrides() {
        let args = Args::parse_from([
            "rowfold",
            "p.json",
            "--offset",
            "6",
            "--duration",
            "0.5",
            "--expanded",
            "--no-clip",
            "--viewport-resize",
        ]);
        let overrides = args.overrides();
        assert_eq!(overrides.offset, Some(6.0));
        assert_eq!(overrides.duration, Some(0.5));
        assert_eq!(overrides.expanded, Some(true));
        assert_eq!(overrides.clip, Some(ClipMode::None));
        assert_eq!(
            overrides.reactivity,
            Some(ReactivityStrategy::ViewportResize)
        );
    }

    #[test]
    fn test_collapsed_overrides_config_file() {
        let args = Args::parse_from(["rowfold", "p.json", "--collapsed"]);
        assert_eq!(args.overrides().expanded, Some(false));

        let from_file = rowfold::config::ResolvedConfig {
            expanded: true,
            ..Default::default()
        };
        let resolved = rowfold::config::apply_cli_overrides(from_file, args.overrides());
        assert!(!resolved.expanded);
    }

    #[test]
    fn test_expanded_and_collapsed_conflict() {
        let result = Args::try_parse_from(["rowfold", "p.json", "--expanded", "--collapsed"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_emit_text_and_json() {
        let panel = SimulatedPanel::new(vec![rowfold::model::ItemRect::new(0.0, 20.0)])
            .with_limit_attribute("1");
        let toggler = HeightToggler::create(
            Some(panel),
            rowfold::config::TogglerOptions::default(),
        )
        .expect("valid panel");
        let report = StepReport::capture("init", &toggler);

        let mut text = Vec::new();
        emit(&mut text, &report, false).expect("write text");
        assert!(String::from_utf8_lossy(&text).starts_with("init"));

        let mut json = Vec::new();
        emit(&mut json, &report, true).expect("write json");
        let parsed: serde_json::Value =
            serde_json::from_slice(&json).expect("valid json line");
        assert_eq!(parsed["max_height"], "20px");
    }
}
