use reel_layout::{classifier::RuleSet, config, page, project};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
reel-layout - classify portfolio media and resolve page layouts

USAGE:
  reel-layout [--rules FILE] [--pretty] plan <project.json>
  reel-layout [--rules FILE] [--image-ext EXT] classify <reference>...

OPTIONS:
  --rules FILE      Load the rule set from FILE instead of the config dir
  --pretty          Pretty-print the JSON output
  --image-ext EXT   Default extension for bare image names (classify only)
";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let rules_path: Option<PathBuf> = args
        .opt_value_from_str("--rules")
        .map_err(|e| e.to_string())?;
    let pretty = args.contains("--pretty");
    let image_ext: Option<String> = args
        .opt_value_from_str("--image-ext")
        .map_err(|e| e.to_string())?;

    let rules = match rules_path {
        Some(path) => config::load_from_path(&path).map_err(|e| e.to_string())?,
        None => config::load().map_err(|e| e.to_string())?,
    };

    let free = args.finish();
    let mut free = free.into_iter();
    let command = free
        .next()
        .and_then(|s| s.into_string().ok())
        .ok_or_else(|| format!("missing command\n\n{HELP}"))?;

    match command.as_str() {
        "plan" => {
            let path = free
                .next()
                .map(PathBuf::from)
                .ok_or("plan: missing <project.json>")?;
            let record = project::load_project(&path).map_err(|e| e.to_string())?;
            let plan = page::plan_project(&record, &rules);
            print_json(&plan, pretty)
        }
        "classify" => {
            let references: Vec<String> = free
                .filter_map(|s| s.into_string().ok())
                .collect();
            if references.is_empty() {
                return Err("classify: missing <reference>...".to_string());
            }
            let descriptors: Vec<_> = references
                .iter()
                .map(|r| describe(&rules, r, image_ext.as_deref()))
                .collect();
            print_json(&descriptors, pretty)
        }
        other => Err(format!("unknown command '{other}'\n\n{HELP}")),
    }
}

fn describe(
    rules: &RuleSet,
    reference: &str,
    image_ext: Option<&str>,
) -> reel_layout::MediaDescriptor {
    match image_ext {
        Some(ext) => rules.describe_with_image_ext(reference, ext),
        None => rules.describe(reference),
    }
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<(), String> {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| e.to_string())?;
    println!("{output}");
    Ok(())
}
