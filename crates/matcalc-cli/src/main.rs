use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

use matcalc_cli::service::{handle, Operation, Response};
use matcalc_cli::util::{load_engine_config, read_request, write_response};
use matcalc_core::{Engine, EngineConfig};

fn operation_command(op: Operation) -> Command {
    Command::new(op.as_str())
        .about(op.about())
        .arg(
            Arg::new("request")
                .help("Path to the JSON request body, or '-' to read stdin. Prints a template when omitted.")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to an engine configuration file (JSON) with numeric thresholds")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output_file")
                .short('o')
                .long("output")
                .help("Path to write the response payload. Defaults to stdout.")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MATCALC_LOG", "error,matcalc=info"))
        .init();

    let mut command = Command::new("matcalc")
        .version(clap::crate_version!())
        .author("The matcalc developers")
        .about("Dense matrix calculator: add, multiply, determinant, inverse, solve")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("health").about("Report service status"));
    for op in Operation::ALL {
        command = command.subcommand(operation_command(op));
    }

    let matches = command
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Written by {author-with-newline}Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("health", _)) => write_response(&Response::health(), None),
        Some((name, sub_m)) => {
            let op = Operation::from_str(name).map_err(anyhow::Error::msg)?;
            handle_operation(op, sub_m)
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_operation(op: Operation, matches: &ArgMatches) -> Result<()> {
    let request_path = match matches.get_one::<PathBuf>("request") {
        Some(path) => path,
        None => {
            eprintln!(
                "[matcalc::{}] No request file provided; printing a template request.",
                op
            );
            println!("{}", serde_json::to_string_pretty(&op.template())?);
            return Ok(());
        }
    };

    let config = match matches.get_one::<PathBuf>("config") {
        Some(config_path) => {
            log::info!("[matcalc::{}] Using config: {:?}", op, config_path);
            load_engine_config(config_path)?
        }
        None => EngineConfig::default(),
    };
    let engine = Engine::new(config);

    log::info!("[matcalc::{}] Reading request: {:?}", op, request_path);
    let body = read_request(request_path)?;
    let response = handle(op, &body, &engine);

    let output_path: Option<&PathBuf> = matches.get_one("output_file");
    write_response(&response, output_path.map(PathBuf::as_path))?;

    if response.is_error() {
        std::process::exit(1);
    }
    Ok(())
}
