//! pathmin: print a minimal PATH that still resolves the given commands
//! Reads the PATH-like variable, drops every directory the named commands do
//! not need, and prints the result on stdout.

use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command as ClapCommand};
use std::path::PathBuf;

use pathmin::commands::minimize::{handle_minimize_command, MinimizeArgs};
use pathmin::utils::{init_logging, Verbosity};

fn build_cli() -> ClapCommand {
    ClapCommand::new("pathmin")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Shrink a PATH-like variable while keeping commands resolvable")
        .arg(
            Arg::new("commands")
                .value_name("COMMAND")
                .help("Commands that must keep resolving to the same executable")
                .num_args(0..)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("hide")
                .long("hide")
                .value_name("COMMAND")
                .help("Drop every directory providing COMMAND (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("var")
                .long("var")
                .value_name("NAME")
                .help("Environment variable to minimize [default: PATH]"),
        )
        .arg(
            Arg::new("path")
                .long("path")
                .value_name("VALUE")
                .help("Minimize this value instead of reading the environment"),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .value_name("N")
                .help("Maximum number of removal passes")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Verify that every command still resolves identically")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Config file [default: <config dir>/pathmin/config.toml]")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Show every removed directory")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only report warnings and errors")
                .action(ArgAction::SetTrue),
        )
}

fn strings(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    init_logging(Verbosity::from_flags(
        matches.get_flag("verbose"),
        matches.get_flag("quiet"),
    ));

    let args = MinimizeArgs {
        commands: strings(&matches, "commands"),
        hide: strings(&matches, "hide"),
        variable: matches.get_one::<String>("var").cloned(),
        path_value: matches.get_one::<String>("path").cloned(),
        limit: matches.get_one::<usize>("limit").copied(),
        check: matches.get_flag("check"),
        config: matches.get_one::<PathBuf>("config").cloned(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    handle_minimize_command(&args, &mut out)
}
