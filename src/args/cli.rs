use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};

/// Outer command line. Setting overrides are collected verbatim and resolved
/// by the config layer, so the command defines no short flags that could
/// shadow a `-name` override token.
#[derive(Debug, Parser, Clone)]
#[command(
    version,
    about = "Sequential HTTP latency probe - one validating request, then N timed requests and their average latency.",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct ProbeArgs {
    /// Path to config file (TOML/JSON). Defaults to ./mercury.toml or ./mercury.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by MERCURY_LOG/RUST_LOG)
    #[arg(long, env = "MERCURY_VERBOSE", value_parser = FalseyValueParser::new())]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Print version
    #[arg(long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Setting overrides as -<name> <value> pairs (uri, method, cookie, payload, contentType, runCount, timeout, connectTimeout, insecure)
    #[arg(
        value_name = "-NAME VALUE",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub overrides: Vec<String>,
}
