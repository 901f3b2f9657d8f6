mod config;
mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use ttt_engine::{
    Difficulty, MatchEngine, MatchSettings, SessionRng, TurnOutcome, TurnResolution, WallClock,
    log, logger,
};

use config::{CliConfig, DEFAULT_CONFIG_FILE, Theme};

#[derive(Parser)]
#[command(
    name = "ttt_cli",
    about = "Terminal tic-tac-toe with an optional computer opponent"
)]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log engine events to stdout
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if args.verbose {
        logger::init(None);
    }

    let config_path = args
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let mut cfg = match CliConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("falling back to default settings");
            CliConfig::default()
        }
    };

    let bot_delay = Duration::from_millis(cfg.bot_delay_ms);
    let settings = MatchSettings { bot_delay };
    let mut engine = MatchEngine::new(
        settings,
        Box::new(WallClock::new()),
        SessionRng::from_random(),
    );
    engine.set_difficulty(cfg.difficulty);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    setup_match(&mut engine, &mut lines);
    render_state(&engine, cfg.theme);
    print_help();

    loop {
        prompt(&engine);
        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        match command {
            "quit" | "q" => break,
            "round" => {
                engine.reset_round();
                render_state(&engine, cfg.theme);
            }
            "new" => {
                setup_match(&mut engine, &mut lines);
                render_state(&engine, cfg.theme);
            }
            "difficulty" => {
                let tier = Difficulty::parse(parts.next().unwrap_or(""));
                engine.set_difficulty(tier);
                println!("difficulty set to {:?}", tier);
            }
            "theme" => {
                cfg.theme = cfg.theme.toggled();
                if let Err(e) = cfg.save(&config_path) {
                    eprintln!("{e}");
                }
                render_state(&engine, cfg.theme);
            }
            "help" => print_help(),
            _ => {
                let token = if command == "move" {
                    parts.next()
                } else {
                    Some(command)
                };
                match token.and_then(|t| t.parse::<usize>().ok()) {
                    Some(index) => submit_move(&mut engine, index, cfg.theme, bot_delay),
                    None => println!("unrecognized command, type 'help'"),
                }
            }
        }
    }
}

fn submit_move(engine: &mut MatchEngine, index: usize, theme: Theme, bot_delay: Duration) {
    if engine.is_computer_turn() {
        // Input during the thinking pause is ignored.
        return;
    }

    match engine.play_turn(index) {
        Some(resolution) => {
            render_state(engine, theme);
            announce(&resolution);
            run_computer_turn(engine, theme, bot_delay);
        }
        None => println!("that move is not available"),
    }
}

fn run_computer_turn(engine: &mut MatchEngine, theme: Theme, bot_delay: Duration) {
    while engine.is_computer_turn() {
        std::thread::sleep(bot_delay);
        if let Some(resolution) = engine.tick() {
            render_state(engine, theme);
            announce(&resolution);
        }
    }
}

fn setup_match(
    engine: &mut MatchEngine,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) {
    let name_a = ask(lines, "first player name (blank for default): ");
    let vs_computer = {
        let answer = ask(lines, "play against the computer? [y/N]: ");
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    };
    let name_b = if vs_computer {
        String::new()
    } else {
        ask(lines, "second player name (blank for default): ")
    };

    engine.start_match(&name_a, &name_b, vs_computer);
    log!("difficulty: {:?}", engine.difficulty());
}

fn ask(lines: &mut impl Iterator<Item = io::Result<String>>, question: &str) -> String {
    print!("{question}");
    let _ = io::stdout().flush();
    match lines.next() {
        Some(Ok(line)) => line,
        _ => String::new(),
    }
}

fn prompt(engine: &MatchEngine) {
    if let Some(player) = engine.current_player()
        && !engine.is_over()
    {
        print!("{} > ", player.name);
    } else {
        print!("> ");
    }
    let _ = io::stdout().flush();
}

fn render_state(engine: &MatchEngine, theme: Theme) {
    println!();
    print!("{}", render::render_board(engine.board(), theme));
    if !engine.players().is_empty() {
        println!("{}", render::render_scores(engine.players()));
    }
    println!();
}

fn announce(resolution: &TurnResolution) {
    match &resolution.outcome {
        TurnOutcome::Win { line, .. } => {
            println!(
                "{} wins the round with line {:?}!",
                resolution.player.name, line
            );
            println!("type 'round' for another round or 'new' for a new match");
        }
        TurnOutcome::Draw => {
            println!("draw! type 'round' for another round");
        }
        TurnOutcome::Continued { next } => {
            println!("{} to move", next.name);
        }
    }
}

fn print_help() {
    println!("commands:");
    println!("  <0-8> or move <0-8>   place your mark at that cell");
    println!("  round                 start the next round (scores kept)");
    println!("  new                   start a new match (scores cleared)");
    println!("  difficulty <tier>     easy, medium or hard");
    println!("  theme                 toggle modern/retro glyphs");
    println!("  quit                  leave the game");
}
