//! Command-line definition and conversion to a configuration layer

use std::path::PathBuf;

use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use fwatch_core::{config::ConfigOverrides, SizeMode};

pub fn build_cli() -> Command {
    Command::new("fwatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Watch a directory and record the byte count of every created or written file")
        .long_about(
            "Watch a directory and record file sizes in SQLite\n\
             \n\
             Every create or write event in the watched directory becomes one\n\
             row (file_path, byte_count) in the file_data table. Rows are only\n\
             ever appended; a file written three times gets three rows.\n\
             \n\
             CONFIGURATION (lowest to highest precedence):\n  \
             • built-in defaults\n  \
             • <user config dir>/fwatch/config.toml\n  \
             • ./config/config.toml\n  \
             • --config <file>\n  \
             • FWATCH_DIRECTORY, FWATCH_DATABASE, FWATCH_CONCURRENCY,\n    \
               FWATCH_RECURSIVE, FWATCH_SIZE_MODE\n  \
             • command-line flags\n\
             \n\
             Runs until interrupted (SIGINT / SIGTERM).",
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Extra TOML config file; must exist"),
        )
        .arg(
            Arg::new("directory")
                .long("directory")
                .short('d')
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Directory to watch [default: .]"),
        )
        .arg(
            Arg::new("database")
                .long("database")
                .value_name("PATH")
                .help("SQLite database file, or :memory: [default: file_data.db]"),
        )
        .arg(
            Arg::new("concurrency")
                .long("concurrency")
                .short('c')
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Number of workers [default: 4]"),
        )
        .arg(
            Arg::new("recursive")
                .long("recursive")
                .short('r')
                .action(ArgAction::SetTrue)
                .help("Also watch subdirectories"),
        )
        .arg(
            Arg::new("size-mode")
                .long("size-mode")
                .value_name("MODE")
                .value_parser(["read", "metadata"])
                .help("How to measure a file: read its bytes or trust metadata [default: read]"),
        )
        .after_help(
            "EXAMPLES:\n  \
             # Watch the current directory with defaults\n  \
             fwatch\n\
             \n  \
             # Watch ./inbox with 8 workers, writing to a custom database\n  \
             fwatch --directory ./inbox --database /var/lib/fwatch/files.db --concurrency 8",
        )
}

/// Explicit config file, if any, plus the CLI configuration layer
pub fn overrides(matches: &ArgMatches) -> Result<(Option<PathBuf>, ConfigOverrides)> {
    let size_mode = matches
        .get_one::<String>("size-mode")
        .map(|mode| mode.parse::<SizeMode>())
        .transpose()?;

    let flags = ConfigOverrides {
        directory: matches.get_one::<PathBuf>("directory").cloned(),
        database: matches.get_one::<String>("database").cloned(),
        concurrency: matches.get_one::<usize>("concurrency").copied(),
        recursive: matches.get_flag("recursive").then_some(true),
        size_mode,
    };

    Ok((matches.get_one::<PathBuf>("config").cloned(), flags))
}
