// promotion-demo: C operator results across char, int and float

use std::io::{self, Write};

use clap::Parser;
use crossterm::style::Stylize;
use crossterm::tty::IsTty;

use promotion_demo::cli::CliConfig;
use promotion_demo::demo;
use promotion_demo::interpreter::engine::Interpreter;
use promotion_demo::logging;
use promotion_demo::terminal::theme::DEFAULT_THEME;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();
    logging::init_cli_logger(config.verbose);
    tracing::debug!(?config, "CLI config");

    let program = demo::program();
    tracing::info!(statements = program.len(), "Built demonstration program");

    let mut interpreter = Interpreter::new(program);
    let result = interpreter.run();

    // Whatever was printed before a failure still reaches stdout
    let stdout = io::stdout();
    let styled = config.color.enabled(stdout.is_tty());
    let mut out = stdout.lock();
    interpreter.terminal().render(&mut out, styled)?;
    out.flush()?;

    if let Err(e) = result {
        let label = if config.color.enabled(io::stderr().is_tty()) {
            "Runtime error:".with(DEFAULT_THEME.error).to_string()
        } else {
            "Runtime error:".to_string()
        };
        eprintln!("{} {}", label, e);
        std::process::exit(1);
    }

    Ok(())
}
