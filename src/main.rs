use clap::{Arg, ArgAction, ArgMatches, Command};
use nqueens_repair::config::{RunConfig, SolverChoice};
use nqueens_repair::error::InputError;
use nqueens_repair::{input, run, Board, Result};
use std::process::ExitCode;

fn make_parser() -> Command {
    Command::new("nqueens")
        .about("Repair an N-Queens placement with backtracking and A* search")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("size")
                .short('n')
                .long("size")
                .value_name("N")
                .help("Board size")
                .required(true),
        )
        .arg(
            Arg::new("positions")
                .short('p')
                .long("positions")
                .value_name("ROWS")
                .help("Initial positions (0-based, space-separated), one per column")
                .allow_hyphen_values(true)
                .conflicts_with("random"),
        )
        .arg(
            Arg::new("random")
                .long("random")
                .help("Start from a random board")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("Seed for --random")
                .value_parser(clap::value_parser!(u64))
                .requires("random"),
        )
        .arg(
            Arg::new("solver")
                .short('s')
                .long("solver")
                .help("Which solvers to run")
                .value_parser(["csp", "astar", "both"]),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML run configuration"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout-ms")
                .value_name("MS")
                .help("Give up on the A* search after this many milliseconds")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("trace_dir")
                .long("trace-dir")
                .value_name("DIR")
                .help("Write each solver's steps as CSV into this directory"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the report as JSON")
                .action(ArgAction::SetTrue),
        )
}

fn load_config(matches: &ArgMatches) -> Result<RunConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    if let Some(solver) = matches.get_one::<String>("solver") {
        config = config.with_solver(solver.parse::<SolverChoice>()?);
    }
    if let Some(&ms) = matches.get_one::<u64>("timeout") {
        config = config.with_astar_timeout_ms(ms);
    }
    if let Some(dir) = matches.get_one::<String>("trace_dir") {
        config = config.with_trace_dir(dir);
    }
    if matches.get_flag("json") {
        config = config.with_json(true);
    }
    Ok(config)
}

fn initial_board(matches: &ArgMatches, config: &RunConfig) -> Result<Board> {
    let n = input::parse_size(
        matches
            .get_one::<String>("size")
            .map(String::as_str)
            .unwrap_or_default(),
    )?;
    input::check_size(n, config.min_size, config.max_size)?;

    let board = if matches.get_flag("random") {
        input::random_board(n, matches.get_one::<u64>("seed").copied())
    } else {
        let positions = matches
            .get_one::<String>("positions")
            .ok_or(InputError::MissingPositions)?;
        input::parse_positions(positions)?
    };
    input::check_board(&board, n)?;
    Ok(board)
}

fn try_main() -> Result<()> {
    let matches = make_parser().get_matches();
    let config = load_config(&matches)?;
    log::debug!("run configuration: {:?}", config);

    let initial = initial_board(&matches, &config)?;
    log::info!("initial board: {}", initial);

    let report = run::run(&config, initial)?;
    if config.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

fn main() -> ExitCode {
    let env = env_logger::Env::new()
        .filter_or("NQUEENS_LOG", "warn")
        .write_style("NQUEENS_LOG_STYLE");
    env_logger::init_from_env(env);

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
