use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use emojigate::config::{Args, Config, OutputFormat, Target};
use emojigate::discovery::discover_workflows;
use emojigate::report::{lint_paths, to_json, write_text};

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version land here too, and are not failures
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level.as_str()),
    )
    .init();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = Config::from_args(args)?;
    log::debug!("resolved configuration: {config:?}");

    let files = match config.target {
        Target::WorkflowsDir(dir) => {
            let files = discover_workflows(&dir)?;
            if files.is_empty() {
                println!("No workflow files found in {}", dir.display());
                return Ok(ExitCode::SUCCESS);
            }
            files
        }
        Target::Files(files) => files,
    };

    let summary = lint_paths(&files)?;

    match config.format {
        OutputFormat::Text => write_text(&summary, &mut io::stdout(), &mut io::stderr())?,
        OutputFormat::Json => println!("{}", to_json(&summary)?),
    }

    Ok(if summary.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
