use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use combo_template::config::yml_settings::YmlSettings;
use combo_template::{ExpandConfig, Expander};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
struct CountOutput {
    count: u128,
}

fn cli() -> Command {
    Command::new("combo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Expand a template into every combination of its placeholders")
        .arg(
            Arg::new("template")
                .help("Template text, e.g. 'id={1,3}&tag={a|b}'")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("count")
                .short('n')
                .long("count")
                .help("Print only the number of combinations")
                .action(ArgAction::SetTrue)
                .conflicts_with("choose"),
        )
        .arg(
            Arg::new("choose")
                .long("choose")
                .help("Print a single randomly chosen combination")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("select")
                .long("select")
                .value_name("INDICES")
                .help("Comma-separated value indices for --choose; '_' picks at random")
                .requires("choose"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("Seed for reproducible --choose picks")
                .value_parser(value_parser!(u64))
                .requires("choose"),
        )
        .arg(
            Arg::new("limit")
                .short('l')
                .long("limit")
                .value_name("N")
                .help("Stop after N combinations")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Path to a YAML file with delimiter and separator settings"),
        )
        .arg(
            Arg::new("delimiters")
                .long("delimiters")
                .num_args(2)
                .value_names(["START", "END"])
                .help("Placeholder delimiters (default '{' '}')"),
        )
        .arg(
            Arg::new("range_sep")
                .long("range-sep")
                .value_name("CHAR")
                .help("Range separator (default ',')")
                .value_parser(value_parser!(char)),
        )
        .arg(
            Arg::new("choice_sep")
                .long("choice-sep")
                .value_name("CHAR")
                .help("Choice separator (default '|')")
                .value_parser(value_parser!(char)),
        )
        .arg(
            Arg::new("backref")
                .long("backref")
                .value_name("CHAR")
                .help("Back-reference marker (default '$')")
                .value_parser(value_parser!(char)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log to stderr (-v debug, -vv trace)")
                .action(ArgAction::Count),
        )
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .with_target(verbose >= 2)
        .init();
}

fn build_config(matches: &ArgMatches) -> Result<ExpandConfig> {
    let mut config: ExpandConfig = match matches.get_one::<String>("config") {
        Some(path) => YmlSettings::load(path)?.into(),
        None => ExpandConfig::default(),
    };

    if let Some(mut delimiters) = matches.get_many::<String>("delimiters") {
        if let (Some(start), Some(end)) = (delimiters.next(), delimiters.next()) {
            config = config.with_delimiters(start.as_str(), end.as_str());
        }
    }
    if let Some(sep) = matches.get_one::<char>("range_sep") {
        config = config.with_range_separator(*sep);
    }
    if let Some(sep) = matches.get_one::<char>("choice_sep") {
        config = config.with_choice_separator(*sep);
    }
    if let Some(marker) = matches.get_one::<char>("backref") {
        config = config.with_backref_marker(*marker);
    }

    Ok(config)
}

/// Parse `0,_,2` into explicit and random selections
fn parse_selections(input: &str) -> Result<Vec<Option<usize>>> {
    input
        .split(',')
        .map(str::trim)
        .map(|part| match part {
            "_" | "" => Ok(None),
            index => index
                .parse::<usize>()
                .map(Some)
                .with_context(|| format!("Invalid selection index '{}'", index)),
        })
        .collect()
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = build_config(matches)?;
    debug!(?config, "resolved configuration");
    let expander = Expander::new(config)?;

    let template = matches
        .get_one::<String>("template")
        .context("template argument is required")?;
    let json = matches.get_one::<String>("format").map(String::as_str) == Some("json");
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if matches.get_flag("count") {
        let count = expander.count(template)?;
        if json {
            writeln!(out, "{}", serde_json::to_string(&CountOutput { count })?)?;
        } else {
            writeln!(out, "{}", count)?;
        }
        return Ok(());
    }

    if matches.get_flag("choose") {
        let selections = match matches.get_one::<String>("select") {
            Some(input) => parse_selections(input)?,
            None => Vec::new(),
        };
        let chooser = expander.choose(template)?;
        let picked = match matches.get_one::<u64>("seed") {
            Some(seed) => chooser.pick_with(&mut StdRng::seed_from_u64(*seed), &selections)?,
            None => chooser.pick(&selections)?,
        };
        if json {
            writeln!(out, "{}", serde_json::to_string(&picked)?)?;
        } else {
            writeln!(out, "{}", picked)?;
        }
        return Ok(());
    }

    let limit = matches.get_one::<usize>("limit").copied();
    let expansion = expander.parse(template)?;
    let expansion = expansion.take(limit.unwrap_or(usize::MAX));

    if json {
        let all: Vec<String> = expansion.collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&all)?)?;
    } else {
        for line in expansion {
            if let Err(e) = writeln!(out, "{}", line) {
                if e.kind() == io::ErrorKind::BrokenPipe {
                    return Ok(());
                }
                bail!(e);
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));
    run(&matches)
}
