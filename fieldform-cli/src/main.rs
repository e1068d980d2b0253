//! `fieldform`: propose new fields for a data model from the terminal.
//!
//! Existing fields are read from a JSON, YAML or TOML document, the form runs
//! in the alternate screen on stderr, and the accepted fields are written out
//! once the session ends (stdout unless `-o` names files).

use std::fmt::Write as FmtWrite;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use fieldform::{
    DocumentFormat, EditorConfig, ExistingField, FieldFormUI, OutputDestination, OutputOptions,
    UiOptions, editor_config_from_value, emit, existing_fields_from_value, parse_document_str,
};

const LOG_ENV: &str = "FIELDFORM_LOG";

#[derive(Debug, Parser)]
#[command(
    name = "fieldform",
    version,
    about = "Add validated fields to a data model from the terminal"
)]
struct Cli {
    /// Existing fields: file path, inline payload, or "-" for stdin
    #[arg(short = 'i', long = "fields", value_name = "SPEC")]
    fields: Option<String>,

    /// Editor configuration (data types, default type, name limit): file or inline payload
    #[arg(short = 'c', long = "config", value_name = "SPEC")]
    config: Option<String>,

    /// Output destinations ("-" writes to stdout). Defaults to stdout.
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Emit compact JSON/TOML rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Overwrite output files even if they already exist
    #[arg(short = 'f', long = "force", short_alias = 'y', alias = "yes")]
    force: bool,

    /// Keep the form open after Esc/Cancel; quit with Ctrl+Q
    #[arg(long = "stay-open")]
    stay_open: bool,

    /// Hide the key binding help line
    #[arg(long = "no-help")]
    no_help: bool,

    /// Write logs to this file instead of stderr, which the form draws on
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Debug)]
enum InputSource {
    File(PathBuf),
    Stdin,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let mut diagnostics = DiagnosticCollector::default();

    let fields_spec = cli.fields.as_deref();
    let config_spec = cli.config.as_deref();
    if config_spec == Some("-") {
        diagnostics.push_input(
            "config",
            "the editor configuration cannot be read from stdin; pass a file or inline payload",
        );
    }

    let fields_hint = resolve_format_hint(fields_spec, "fields", &mut diagnostics);
    let config_hint = resolve_format_hint(config_spec, "config", &mut diagnostics);

    let fields_value = load_optional_value(
        fields_spec,
        fields_hint.hint.format,
        "fields",
        fields_hint.blocked,
        &mut diagnostics,
    );
    let config_value = load_optional_value(
        config_spec.filter(|spec| *spec != "-"),
        config_hint.hint.format,
        "config",
        config_hint.blocked,
        &mut diagnostics,
    );

    let existing = match fields_value.as_ref().map(existing_fields_from_value) {
        Some(Ok(fields)) => fields,
        Some(Err(err)) => {
            diagnostics.push_input("fields", format!("{err:#}"));
            Vec::new()
        }
        None => Vec::new(),
    };
    let config = match config_value.as_ref().map(editor_config_from_value) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            diagnostics.push_input("config", format!("{err:#}"));
            EditorConfig::default()
        }
        None => EditorConfig::default(),
    };

    let (output_settings, output_paths) =
        build_output_options(&cli, fields_hint.hint.extension_value(), &mut diagnostics);
    ensure_output_paths_available(&output_paths, cli.force, &mut diagnostics);

    diagnostics.into_result()?;

    debug!(existing = existing.len(), "starting new-field form");
    let options = UiOptions::default()
        .with_exit_on_cancel(!cli.stay_open)
        .with_help(!cli.no_help);
    let outcome = run_form(existing, config, options)?;

    if outcome.created.is_empty() {
        eprintln!("no fields were added");
        return Ok(());
    }
    info!(created = outcome.created.len(), "writing created fields");
    if let Some(options) = output_settings {
        emit(&outcome.created, &options).map_err(|err| eyre!("{err:#}"))?;
    }

    Ok(())
}

fn run_form(
    existing: Vec<ExistingField>,
    config: EditorConfig,
    options: UiOptions,
) -> Result<fieldform::SessionOutcome> {
    FieldFormUI::new(existing)
        .with_config(config)
        .with_options(options)
        .run()
        .map_err(|err| eyre!("{err:#}"))
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);
    let _ = match log_file {
        Some(path) => {
            let file = fs::File::create(path)
                .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
        }
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .try_init(),
    };
    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct FormatHint {
    format: DocumentFormat,
    from_extension: bool,
}

impl Default for FormatHint {
    fn default() -> Self {
        Self {
            format: DocumentFormat::default(),
            from_extension: false,
        }
    }
}

impl FormatHint {
    fn extension_value(&self) -> Option<DocumentFormat> {
        self.from_extension.then_some(self.format)
    }
}

#[derive(Debug, Clone, Copy)]
struct FormatResolution {
    hint: FormatHint,
    blocked: bool,
}

fn resolve_format_hint(
    path_hint: Option<&str>,
    label: &str,
    diagnostics: &mut DiagnosticCollector,
) -> FormatResolution {
    if let Some(path) = path_hint
        && path != "-"
    {
        match probe_format_from_extension(Path::new(path)) {
            ExtensionFormat::Known(format) => {
                return FormatResolution {
                    hint: FormatHint {
                        format,
                        from_extension: true,
                    },
                    blocked: false,
                };
            }
            ExtensionFormat::UnsupportedFeature {
                format_name,
                feature_flag,
            } => {
                diagnostics.push_input(
                    label,
                    format!(
                        "{label} '{path}' requires {format_name} support, but this build lacks the '{feature_flag}' feature"
                    ),
                );
                return FormatResolution {
                    hint: FormatHint::default(),
                    blocked: true,
                };
            }
            ExtensionFormat::Unknown => {}
        }
    }

    FormatResolution {
        hint: FormatHint::default(),
        blocked: false,
    }
}

fn load_optional_value(
    spec: Option<&str>,
    format: DocumentFormat,
    label: &str,
    skip: bool,
    diagnostics: &mut DiagnosticCollector,
) -> Option<Value> {
    if skip {
        return None;
    }
    let raw = spec?;
    match load_value(raw, format, label) {
        Ok(value) => Some(value),
        Err(err) => {
            diagnostics.push_input(label, err.to_string());
            None
        }
    }
}

fn load_value(spec: &str, format: DocumentFormat, label: &str) -> Result<Value> {
    if spec == "-" {
        let contents = read_from_source(&InputSource::Stdin)?;
        return parse_contents(&contents, format, label);
    }

    let path = PathBuf::from(spec);
    match read_from_source(&InputSource::File(path.clone())) {
        Ok(contents) => parse_contents(&contents, format, label),
        Err(err) => {
            if is_not_found(&err) {
                let inline_label = format!("inline {label}");
                return parse_contents(spec, format, &inline_label);
            }
            Err(err.wrap_err(format!("failed to load {label} from {}", path.display())))
        }
    }
}

fn read_from_source(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("failed to read from stdin")?;
            Ok(buffer)
        }
        InputSource::File(path) => fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read file {}", path.display())),
    }
}

fn is_not_found(err: &Report) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|io_err| io_err.kind() == io::ErrorKind::NotFound)
}

fn parse_contents(contents: &str, format: DocumentFormat, label: &str) -> Result<Value> {
    match parse_document_str(contents, format) {
        Ok(value) => Ok(value),
        Err(primary) => {
            for candidate in DocumentFormat::available_formats() {
                if candidate == format {
                    continue;
                }
                if let Ok(value) = parse_document_str(contents, candidate) {
                    return Ok(value);
                }
            }
            Err(Report::msg(format!(
                "failed to parse {label}: tried {} (first error: {primary})",
                format_list()
            )))
        }
    }
}

fn format_list() -> String {
    let items: Vec<String> = DocumentFormat::available_formats()
        .into_iter()
        .map(|fmt| fmt.to_string())
        .collect();
    items.join(", ")
}

#[derive(Default)]
struct DiagnosticCollector {
    messages: Vec<String>,
}

impl DiagnosticCollector {
    fn push_input(&mut self, label: &str, message: impl Into<String>) {
        self.messages
            .push(format!("input ({label}): {}", message.into()));
    }

    fn push_output(&mut self, message: impl Into<String>) {
        self.messages.push(format!("output: {}", message.into()));
    }

    fn len(&self) -> usize {
        self.messages.len()
    }

    fn into_result(self) -> Result<()> {
        if self.messages.is_empty() {
            return Ok(());
        }
        let mut body = String::from("encountered input/output issues:\n");
        for (idx, msg) in self.messages.iter().enumerate() {
            let _ = writeln!(body, "  {}. {}", idx + 1, msg);
        }
        Err(eyre!(body))
    }
}

fn build_output_options(
    cli: &Cli,
    fields_hint: Option<DocumentFormat>,
    diagnostics: &mut DiagnosticCollector,
) -> (Option<OutputOptions>, Vec<PathBuf>) {
    let mut destinations = Vec::new();

    for raw in &cli.outputs {
        if raw.trim().is_empty() {
            diagnostics.push_output("output destination cannot be empty");
            continue;
        }
        if raw == "-" {
            destinations.push(OutputDestination::Stdout);
        } else {
            destinations.push(OutputDestination::file(raw));
        }
    }

    if destinations.is_empty() {
        if !cli.outputs.is_empty() {
            return (None, Vec::new());
        }
        destinations.push(OutputDestination::Stdout);
    }

    let file_paths: Vec<PathBuf> = destinations
        .iter()
        .filter_map(|dest| match dest {
            OutputDestination::File(path) => Some(path.clone()),
            OutputDestination::Stdout => None,
        })
        .collect();

    let start = diagnostics.len();
    let format = if file_paths.is_empty() {
        fields_hint.unwrap_or_default()
    } else {
        infer_format_from_files(&file_paths, diagnostics).unwrap_or_default()
    };

    if diagnostics.len() > start {
        return (None, file_paths);
    }

    (
        Some(
            OutputOptions::new(format)
                .with_pretty(!cli.no_pretty)
                .with_destinations(destinations),
        ),
        file_paths,
    )
}

fn infer_format_from_files(
    file_paths: &[PathBuf],
    diagnostics: &mut DiagnosticCollector,
) -> Option<DocumentFormat> {
    let mut detected: Option<DocumentFormat> = None;
    for path in file_paths {
        match probe_format_from_extension(path) {
            ExtensionFormat::Known(format) => {
                if let Some(existing) = detected {
                    if existing != format {
                        diagnostics.push_output(format!(
                            "output file {} uses {format} but other destinations use {existing}; align extensions",
                            path.display()
                        ));
                    }
                } else {
                    detected = Some(format);
                }
            }
            ExtensionFormat::UnsupportedFeature {
                format_name,
                feature_flag,
            } => diagnostics.push_output(format!(
                "output file {} requires {format_name} support, but this build was compiled without the '{feature_flag}' feature",
                path.display()
            )),
            ExtensionFormat::Unknown => diagnostics.push_output(format!(
                "cannot infer format from output file {}; use .json/.yaml/.toml",
                path.display()
            )),
        }
    }
    detected
}

fn probe_format_from_extension(path: &Path) -> ExtensionFormat {
    let Some(ext) = path.extension() else {
        return ExtensionFormat::Unknown;
    };
    let normalized = ext.to_string_lossy().to_ascii_lowercase();
    match normalized.as_str() {
        "json" => ExtensionFormat::Known(DocumentFormat::Json),
        #[cfg(feature = "yaml")]
        "yaml" | "yml" => ExtensionFormat::Known(DocumentFormat::Yaml),
        #[cfg(not(feature = "yaml"))]
        "yaml" | "yml" => ExtensionFormat::UnsupportedFeature {
            format_name: "yaml",
            feature_flag: "yaml",
        },
        #[cfg(feature = "toml")]
        "toml" => ExtensionFormat::Known(DocumentFormat::Toml),
        #[cfg(not(feature = "toml"))]
        "toml" => ExtensionFormat::UnsupportedFeature {
            format_name: "toml",
            feature_flag: "toml",
        },
        _ => ExtensionFormat::Unknown,
    }
}

#[derive(Debug)]
enum ExtensionFormat {
    Known(DocumentFormat),
    #[allow(dead_code)]
    UnsupportedFeature {
        format_name: &'static str,
        feature_flag: &'static str,
    },
    Unknown,
}

fn ensure_output_paths_available(
    paths: &[PathBuf],
    force: bool,
    diagnostics: &mut DiagnosticCollector,
) {
    if force {
        return;
    }
    for path in paths {
        if path.exists() {
            diagnostics.push_output(format!(
                "file {} already exists (pass --force to overwrite)",
                path.display()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("fieldform").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_to_stdout_json() {
        let mut diagnostics = DiagnosticCollector::default();
        let (options, paths) = build_output_options(&cli(&[]), None, &mut diagnostics);
        let options = options.expect("stdout output");
        assert!(paths.is_empty());
        assert_eq!(options.format, DocumentFormat::Json);
        assert!(matches!(
            options.destinations.as_slice(),
            [OutputDestination::Stdout]
        ));
    }

    #[test]
    fn rejects_mixed_output_extensions() {
        let mut diagnostics = DiagnosticCollector::default();
        let (options, _) = build_output_options(
            &cli(&["-o", "a.json", "b.toml"]),
            None,
            &mut diagnostics,
        );
        assert!(options.is_none());
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn inline_fields_are_parsed_when_no_file_exists() {
        let value = load_value(r#"[{"name": "id"}]"#, DocumentFormat::Json, "fields")
            .expect("inline payload");
        let fields = existing_fields_from_value(&value).expect("fields");
        assert_eq!(fields[0].name, "id");
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn parse_contents_falls_back_to_other_formats() {
        let value = parse_contents("- name: id", DocumentFormat::Json, "fields").expect("yaml");
        assert_eq!(value[0]["name"], serde_json::json!("id"));
    }
}
