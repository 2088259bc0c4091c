use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use playground::core::bridge;
use playground::core::buffer::SourceText;
use playground::core::config::{self, LogLevel, ResolvedConfig};
use playground::core::evaluator::Evaluator;
use playground::interpreter::ReferenceEvaluator;
use playground::tui;

#[derive(Parser)]
#[command(name = "playground", about = "Edit a small program and run it through an interpreter")]
struct Args {
    /// Config file to use instead of ~/.playground/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log verbosity (overrides the config file)
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Evaluate FILE once and print the output instead of opening the editor ("-" reads stdin)
    #[arg(long, value_name = "FILE")]
    eval: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: {e}, using defaults");
            config::PlaygroundConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.log_level);

    init_logging(&resolved);
    log::info!(
        "Playground starting up (log level {:?}, tab width {})",
        resolved.log_level,
        resolved.tab_width
    );

    let evaluator: Arc<dyn Evaluator> = Arc::new(ReferenceEvaluator);

    match args.eval {
        Some(path) => eval_once(&path, evaluator.as_ref()),
        None => tui::run(resolved, evaluator),
    }
}

fn init_logging(resolved: &ResolvedConfig) {
    if resolved.log_level == LogLevel::Off {
        return;
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    match File::create(&resolved.log_file) {
        Ok(log_file) => {
            let _ = WriteLogger::init(resolved.log_level.filter(), log_config, log_file);
        }
        Err(e) => eprintln!(
            "Warning: cannot open log file {}: {e}",
            resolved.log_file.display()
        ),
    }
}

/// Headless mode: one pass through the same bridge the editor uses.
fn eval_once(path: &Path, evaluator: &dyn Evaluator) -> std::io::Result<()> {
    let source = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    log::info!("Evaluating {} ({} bytes)", path.display(), source.len());

    evaluator.setup();
    let output = bridge::run(evaluator, &SourceText::from(source));
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
