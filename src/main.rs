//! txr - CLI

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::process::ExitCode;
use tracing::debug;
use txr::util::config::{Config, Stage};
use txr::util::diagnostic::{DiagnosticRenderer, EmitterConfig};
use txr::util::dump::{self, DumpFormat, Listing};
use txr::util::logger;
use txr::util::span::SourceFile;
use txr::{StageOutput, ToDiagnostic, Txr, NAME, VERSION};

/// Evaluate an arithmetic expression
#[derive(Parser, Debug)]
#[command(name = "txr")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    /// Expression to evaluate, e.g. "(10 + 2) * 4"
    #[arg(value_name = "EXPR", allow_hyphen_values = true)]
    expression: String,

    /// Print an intermediate stage before the result (repeatable)
    #[arg(long, value_enum, value_name = "STAGE")]
    emit: Vec<StageArg>,

    /// Format for --emit output
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Trace every evaluator step
    #[arg(long)]
    trace: bool,

    /// Disable colored diagnostics
    #[arg(long)]
    no_color: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StageArg {
    Tokens,
    Ast,
    Actions,
}

impl From<StageArg> for Stage {
    fn from(arg: StageArg) -> Self {
        match arg {
            StageArg::Tokens => Stage::Tokens,
            StageArg::Ast => Stage::Ast,
            StageArg::Actions => Stage::Actions,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Text,
    Json,
    Ron,
}

impl From<FormatArg> for DumpFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => DumpFormat::Text,
            FormatArg::Json => DumpFormat::Json,
            FormatArg::Ron => DumpFormat::Ron,
        }
    }
}

impl Args {
    fn config(&self) -> Config {
        let mut config = Config::default().with_emit(self.emit.iter().copied().map(Stage::from));
        config.format = self.format.into();
        config.use_colors = !self.no_color;
        if self.verbose {
            config = config.verbose();
        }
        if self.trace {
            config = config.trace();
        }
        config
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config = args.config();
    logger::init_with_level(config.log_level);
    debug!("{} version: {}", NAME, VERSION);

    run(&args.expression, &config)
}

/// Compile and evaluate `source`, printing requested stages on the way
///
/// Pipeline faults are rendered from the context's diagnostic slot and turn
/// into a failing exit code; only output failures are returned as errors.
fn run(
    source: &str,
    config: &Config,
) -> Result<ExitCode> {
    let mut txr = Txr::with_config(config.vm.clone());
    let mut emit_error = None;

    let compiled = txr.compile_with(source, |output| {
        if emit_error.is_none() && config.emits(output.stage()) {
            emit_error = print_stage(output, config).err();
        }
    });
    if let Some(e) = emit_error {
        return Err(e);
    }

    match compiled.and_then(|program| txr.execute(&program)) {
        Ok(value) => {
            println!("{}", value);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            let diagnostic = txr.error().cloned().unwrap_or_else(|| error.to_diagnostic());
            let renderer = DiagnosticRenderer::with_config(EmitterConfig {
                use_colors: config.use_colors,
                ..EmitterConfig::default()
            });
            let source = SourceFile::new("<expr>", source);
            eprint!("{}", renderer.render(&diagnostic, Some(&source)));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_stage(
    output: StageOutput<'_>,
    config: &Config,
) -> Result<()> {
    let (name, rendered) = match output {
        StageOutput::Tokens(tokens) => ("tokens", dump::render(&Listing(tokens), config.format)),
        StageOutput::Ast(ast) => ("ast", dump::render(ast, config.format)),
        StageOutput::Actions(program) => ("actions", dump::render(program, config.format)),
    };
    let rendered = rendered.with_context(|| format!("Failed to print {}", name))?;
    match config.format {
        DumpFormat::Text => {
            println!("--- {} ---", name);
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
        }
        DumpFormat::Json | DumpFormat::Ron => println!("{}", rendered),
    }
    Ok(())
}
