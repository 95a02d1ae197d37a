use std::{io, path::PathBuf};

use clap::{ArgAction, Parser, ValueEnum};
use mazecore::{dims::Dims, game::MoveMode, GenerationAlgorithm};
use mazegame::{
    app::{self, GameError, RunConfig},
    logging,
    settings::Settings,
};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Algorithm {
    Dfs,
    Kruskal,
}

impl From<Algorithm> for GenerationAlgorithm {
    fn from(value: Algorithm) -> Self {
        match value {
            Algorithm::Dfs => GenerationAlgorithm::DepthFirstSearch,
            Algorithm::Kruskal => GenerationAlgorithm::RndKruskals,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Slow,
    Normal,
    Fast,
}

impl From<Mode> for MoveMode {
    fn from(value: Mode) -> Self {
        match value {
            Mode::Slow => MoveMode::Slow,
            Mode::Normal => MoveMode::Normal,
            Mode::Fast => MoveMode::Fast,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "mazegame")]
struct Args {
    #[clap(long, allow_negative_numbers = true, help = "Maze width in cells")]
    width: Option<i32>,
    #[clap(long, allow_negative_numbers = true, help = "Maze height in cells")]
    height: Option<i32>,
    #[clap(short, long, value_enum, help = "Generation algorithm")]
    algorithm: Option<Algorithm>,
    #[clap(long, help = "Seed for a reproducible maze")]
    seed: Option<u64>,
    #[clap(long, action, help = "Show the solution")]
    solve: bool,
    #[clap(long, action, help = "Show the maze while it's being generated")]
    animate: bool,
    #[clap(short, long, help = "Moves to walk from the entrance, using W, A, S and D")]
    moves: Option<String>,
    #[clap(
        long,
        value_enum,
        default_value = "slow",
        help = "Slow walks one cell per move, normal to the next junction, fast to the next wall"
    )]
    move_mode: Mode,
    #[clap(long, action, help = "Disable colors")]
    no_color: bool,
    #[clap(short, long, action = ArgAction::Count, help = "More logging, can be repeated")]
    verbose: u8,
    #[clap(short, long, help = "Use this settings file instead of the default one")]
    config: Option<PathBuf>,
    #[clap(short, long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
}

fn main() -> Result<(), GameError> {
    let args = Args::parse();
    let settings_path = args.config.clone().unwrap_or_else(Settings::default_path);

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    better_panic::install();

    let settings = Settings::load(&settings_path)?;
    logging::init(logging::raise_level(
        settings.get_log_level().to_filter(),
        args.verbose,
    ))?;
    log::debug!("Loaded settings from {:?}", settings_path);

    let mut config = RunConfig::from_settings(&settings);
    config.size = Dims(
        args.width.unwrap_or(config.size.0),
        args.height.unwrap_or(config.size.1),
    );
    if let Some(algorithm) = args.algorithm {
        config.algorithm = algorithm.into();
    }
    config.seed = args.seed;
    config.solve = args.solve;
    config.animate = args.animate;
    config.move_mode = args.move_mode.into();
    config.color &= !args.no_color;
    if let Some(moves) = &args.moves {
        config.moves = app::parse_moves(moves)?;
    }

    if !config.color {
        colored::control::set_override(false);
    }

    let outcome = app::run(&config, &mut io::stdout())?;
    log::info!(
        "Player at {:?} after {} moves",
        outcome.player_pos,
        outcome.move_count
    );

    Ok(())
}
