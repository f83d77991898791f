//! Rendering of tokens, diagnostics and traces
//!
//! A processing spec names a stage (what data to extract) and a format (how to
//! print it) as `<stage>-<format>`, for example `tokens-json` or
//! `diagnostics-simple`. Every stage runs the full tokenize + validate pass so
//! callers always get the report back alongside the rendered text.

use crate::decl::lexing::tokenize;
use crate::decl::location::{Position, SourceLocation};
use crate::decl::token::Token;
use crate::decl::validation::{validate, Diagnostic, ParseState, ValidationReport};
use crate::settings::DiagnosticsConfig;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Tokens,
    Diagnostics,
    Trace,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "tokens-simple" or "diagnostics-json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "tokens" => ProcessingStage::Tokens,
            "diagnostics" => ProcessingStage::Diagnostics,
            "trace" => ProcessingStage::Trace,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        if stage == ProcessingStage::Trace && format == OutputFormat::Json {
            return Err(ProcessingError::InvalidFormatType(
                "Format 'json' is not supported for the trace stage".to_string(),
            ));
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Tokens,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Tokens,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Diagnostics,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Diagnostics,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Trace,
                format: OutputFormat::Simple,
            },
        ]
    }

    /// The string form accepted by [`ProcessingSpec::from_string`]
    pub fn name(&self) -> String {
        let stage = match self.stage {
            ProcessingStage::Tokens => "tokens",
            ProcessingStage::Diagnostics => "diagnostics",
            ProcessingStage::Trace => "trace",
        };
        let format = match self.format {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
        };
        format!("{}-{}", stage, format)
    }
}

/// Errors that can occur during processing
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rendered output together with the validation result it came from
#[derive(Debug, Clone)]
pub struct Processed {
    pub output: String,
    pub tokens: Vec<Token>,
    pub report: ValidationReport,
}

/// Process a file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    settings: &DiagnosticsConfig,
) -> Result<Processed, ProcessingError> {
    let content = fs::read_to_string(file_path.as_ref())?;
    process_source(&content, spec, settings)
}

/// Process source text according to the given specification
pub fn process_source(
    source: &str,
    spec: &ProcessingSpec,
    settings: &DiagnosticsConfig,
) -> Result<Processed, ProcessingError> {
    let tokens = tokenize(source);
    let report = validate(&tokens);
    let location = SourceLocation::new(source);

    let output = match (spec.stage, spec.format) {
        (ProcessingStage::Tokens, OutputFormat::Simple) => {
            format_tokens_simple(&tokens, &location, settings)
        }
        (ProcessingStage::Tokens, OutputFormat::Json) => serde_json::to_string_pretty(&tokens)?,
        (ProcessingStage::Diagnostics, OutputFormat::Simple) => {
            format_diagnostics_simple(&report, &location, settings)
        }
        (ProcessingStage::Diagnostics, OutputFormat::Json) => {
            format_diagnostics_json(&report, &location, settings)?
        }
        (ProcessingStage::Trace, OutputFormat::Simple) => format_trace_simple(&tokens, &report),
        (ProcessingStage::Trace, OutputFormat::Json) => {
            return Err(ProcessingError::InvalidFormatType(
                "trace-json is not supported".to_string(),
            ))
        }
    };

    Ok(Processed {
        output,
        tokens,
        report,
    })
}

fn location_prefix(
    offset: usize,
    location: &SourceLocation,
    settings: &DiagnosticsConfig,
) -> String {
    if settings.show_positions {
        location.position(offset).to_string()
    } else {
        offset.to_string()
    }
}

fn format_tokens_simple(
    tokens: &[Token],
    location: &SourceLocation,
    settings: &DiagnosticsConfig,
) -> String {
    let mut result = String::new();
    for token in tokens {
        let _ = writeln!(
            result,
            "{} {} {:?}",
            location_prefix(token.offset, location, settings),
            token.kind,
            token.text
        );
    }
    result
}

fn format_diagnostics_simple(
    report: &ValidationReport,
    location: &SourceLocation,
    settings: &DiagnosticsConfig,
) -> String {
    let lang = settings.language;
    let mut result = String::new();

    for diagnostic in &report.diagnostics {
        let _ = writeln!(
            result,
            "{}: {}",
            location_prefix(diagnostic.range.start, location, settings),
            diagnostic.message_in(lang)
        );
    }

    if report.is_valid() && settings.report_success {
        let _ = writeln!(result, "{}", lang.success());
    }

    result
}

#[derive(Serialize)]
struct DiagnosticView<'a> {
    #[serde(flatten)]
    diagnostic: &'a Diagnostic,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<Position>,
}

#[derive(Serialize)]
struct ReportView<'a> {
    valid: bool,
    final_state: ParseState,
    diagnostics: Vec<DiagnosticView<'a>>,
}

fn format_diagnostics_json(
    report: &ValidationReport,
    location: &SourceLocation,
    settings: &DiagnosticsConfig,
) -> Result<String, ProcessingError> {
    let view = ReportView {
        valid: report.is_valid(),
        final_state: report.final_state,
        diagnostics: report
            .diagnostics
            .iter()
            .map(|diagnostic| DiagnosticView {
                diagnostic,
                message: diagnostic.message_in(settings.language),
                position: settings
                    .show_positions
                    .then(|| location.position(diagnostic.range.start)),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&view)?)
}

fn format_trace_simple(tokens: &[Token], report: &ValidationReport) -> String {
    let mut result = String::new();
    for step in &report.trace {
        let text = tokens.get(step.index).map_or("", |token| token.text.as_str());
        let _ = write!(result, "{} {:?} {} -> {}", step.index, text, step.from, step.to);
        if step.recovered {
            result.push_str(" (recovered)");
        }
        result.push('\n');
    }
    let _ = writeln!(result, "final: {}", report.final_state);
    result
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::messages::Language;

    fn settings() -> DiagnosticsConfig {
        DiagnosticsConfig {
            language: Language::En,
            report_success: true,
            show_positions: true,
        }
    }

    #[test]
    fn test_spec_parsing() {
        let spec = ProcessingSpec::from_string("tokens-json").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Tokens);
        assert_eq!(spec.format, OutputFormat::Json);

        assert!(matches!(
            ProcessingSpec::from_string("tokens"),
            Err(ProcessingError::InvalidFormat(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("ast-simple"),
            Err(ProcessingError::InvalidStage(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("tokens-xml"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("trace-json"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
    }

    #[test]
    fn test_available_formats_round_trip() {
        for name in available_formats() {
            assert_eq!(ProcessingSpec::from_string(&name).unwrap().name(), name);
        }
    }

    #[test]
    fn test_success_line() {
        let spec = ProcessingSpec::from_string("diagnostics-simple").unwrap();
        let processed = process_source("var x: char;", &spec, &settings()).unwrap();
        assert_eq!(processed.output, "no errors found\n");
        assert!(processed.report.is_valid());

        let quiet = DiagnosticsConfig {
            report_success: false,
            ..settings()
        };
        let processed = process_source("var x: char;", &spec, &quiet).unwrap();
        assert_eq!(processed.output, "");
    }

    #[test]
    fn test_diagnostics_without_positions() {
        let spec = ProcessingSpec::from_string("diagnostics-simple").unwrap();
        let plain = DiagnosticsConfig {
            show_positions: false,
            ..settings()
        };
        let processed = process_source("var x: integer", &spec, &plain).unwrap();
        assert_eq!(
            processed.output,
            "14: variable declaration is not terminated\n"
        );
    }

    #[test]
    fn test_tokens_json() {
        let spec = ProcessingSpec::from_string("tokens-json").unwrap();
        let processed = process_source("var", &spec, &settings()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&processed.output).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "kind": "Keyword", "text": "var", "offset": 0 }])
        );
    }

    #[test]
    fn test_missing_file() {
        let spec = ProcessingSpec::from_string("tokens-simple").unwrap();
        let result = process_file("no/such/file.var", &spec, &settings());
        assert!(matches!(result, Err(ProcessingError::Io(_))));
    }
}
