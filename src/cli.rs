use clap::{Parser, ValueEnum};

/// When to style section headers on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Style only when stdout is a terminal
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "promotion-demo")]
#[command(about = "Print C operator results for char, int and float operand pairs")]
#[command(version)]
pub struct CliConfig {
    /// Colour section headers
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
