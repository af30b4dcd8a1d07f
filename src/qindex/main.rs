use clap::Parser;
use colored::*;
use qindex::api::{CmdMessage, MessageLevel, QindexApi};
use qindex::config::QindexConfig;
use qindex::error::Result;
use tracing_subscriber::EnvFilter;

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// RUST_LOG wins; otherwise --verbose enables debug output for this crate.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "qindex=debug" } else { "qindex=warn" })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => QindexConfig::load_file(path)?,
        None => QindexConfig::load(".")?,
    };
    if let Some(questions) = cli.questions {
        config.questions_dir = questions;
    }
    if let Some(readme) = cli.readme {
        config.readme = readme;
    }

    match cli.command {
        Some(Commands::Generate { check, no_heading }) => {
            handle_generate(&mut config, check, no_heading)
        }
        Some(Commands::LinkExamples { code, dry_run }) => {
            handle_link_examples(&mut config, code, dry_run)
        }
        None => handle_generate(&mut config, false, false),
    }
}

fn handle_generate(config: &mut QindexConfig, check: bool, no_heading: bool) -> Result<()> {
    if no_heading {
        config.index_heading = None;
    }
    let api = QindexApi::from_config(config);
    let result = api.generate(check)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_link_examples(
    config: &mut QindexConfig,
    code: Option<std::path::PathBuf>,
    dry_run: bool,
) -> Result<()> {
    if let Some(code) = code {
        config.code_dir = code;
    }
    let api = QindexApi::from_config(config);
    let result = api.link_examples(dry_run)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}
