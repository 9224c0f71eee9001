use easel_rs::api::{BorderEngine, BorderEngineConfig, CalculationResult, CalculatorSettings};
use easel_rs::core::{AspectRatioSelector, PaperSizeSelector};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Run,
    Sample,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    input: Option<PathBuf>,
    output: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TraceFile {
    trace_name: String,
    #[serde(default)]
    source_notes: String,
    scenarios: Vec<TraceScenario>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TraceScenario {
    id: String,
    #[serde(default = "default_last_valid_min_border")]
    last_valid_min_border: f64,
    settings: CalculatorSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CaptureFile {
    trace_name: String,
    source_notes: String,
    scenarios: Vec<CaptureScenario>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CaptureScenario {
    id: String,
    result: CalculationResult,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    match args.command {
        CommandKind::Run => {
            let input = args.input.ok_or_else(|| "missing --input".to_owned())?;
            let raw = fs::read_to_string(&input)
                .map_err(|err| format!("failed to read `{}`: {err}", input.display()))?;
            let trace: TraceFile =
                serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;
            let capture = capture_trace(&trace);
            write_json(&args.output, &capture)
        }
        CommandKind::Sample => write_json(&args.output, &sample_trace()),
    }
}

fn capture_trace(trace: &TraceFile) -> CaptureFile {
    let mut engine = BorderEngine::new(BorderEngineConfig::new());
    let scenarios = trace
        .scenarios
        .iter()
        .map(|scenario| CaptureScenario {
            id: scenario.id.clone(),
            result: engine.compute(&scenario.settings, scenario.last_valid_min_border),
        })
        .collect();
    CaptureFile {
        trace_name: trace.trace_name.clone(),
        source_notes: trace.source_notes.clone(),
        scenarios,
    }
}

fn sample_trace() -> TraceFile {
    TraceFile {
        trace_name: "border-geometry-baseline".to_owned(),
        source_notes: "starter scenarios covering the common paper/ratio pairings".to_owned(),
        scenarios: vec![
            TraceScenario {
                id: "default-35mm-on-8x10".to_owned(),
                last_valid_min_border: default_last_valid_min_border(),
                settings: CalculatorSettings::default(),
            },
            TraceScenario {
                id: "portrait-4x5-ratio".to_owned(),
                last_valid_min_border: default_last_valid_min_border(),
                settings: CalculatorSettings::default()
                    .with_aspect_ratio(AspectRatioSelector::FourByFive)
                    .with_landscape(false),
            },
            TraceScenario {
                id: "offset-near-the-edge".to_owned(),
                last_valid_min_border: default_last_valid_min_border(),
                settings: CalculatorSettings::default()
                    .with_offsets(1.5, -0.5)
                    .with_ignore_min_border(true),
            },
            TraceScenario {
                id: "custom-panoramic-sheet".to_owned(),
                last_valid_min_border: default_last_valid_min_border(),
                settings: CalculatorSettings::default()
                    .with_paper_size(PaperSizeSelector::Custom)
                    .with_custom_paper(14.0, 6.0)
                    .with_aspect_ratio(AspectRatioSelector::Xpan),
            },
        ],
    }
}

fn write_json<T: Serialize>(path: &PathBuf, value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize json: {err}"))?;
    fs::write(path, payload).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("run") => CommandKind::Run,
        Some("sample") => CommandKind::Sample,
        _ => {
            return Err(
                "usage: border_trace_tool <run|sample> [--input <path>] --output <path>".to_owned(),
            );
        }
    };

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                return Err(
                    "usage: border_trace_tool <run|sample> [--input <path>] --output <path>"
                        .to_owned(),
                );
            }
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let output = output.ok_or_else(|| "missing --output".to_owned())?;
    Ok(CliArgs {
        command,
        input,
        output,
    })
}

fn default_last_valid_min_border() -> f64 {
    0.5
}
