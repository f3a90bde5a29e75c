#[macro_use] extern crate log;
extern crate serde_json;
extern crate gold_bot;

use serde_json::Value;
use std::env;
use std::path::Path;
use std::io::{BufRead, BufReader, stdin};
use std::process;

use gold_bot::{init_logging, BotError, Game, Logic, Tuning};

fn run() -> Result<(), BotError> {
    let tuning = match env::args().nth(1) {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    let stdin = stdin();
    let reader = BufReader::new(stdin.lock());
    let mut lines_iter = reader.lines();

    let constants: Value = serde_json::from_str(&gold_bot::next_line(&mut lines_iter)?)?;

    let player_info = gold_bot::parse_line_of_nums(&mut lines_iter, 2)?;
    let num_players = player_info[0];
    let my_pid = player_info[1];

    let mut game = Game::init(&mut lines_iter, constants, num_players, my_pid)?;
    init_logging(Path::new("."), my_pid)?;
    warn!("[");

    let mut logic = Logic::with_tuning(tuning);

    game.ready(&logic.tuning().bot_name)?;
    info!("Successfully created bot! My Player ID is {}.", my_pid);
    info!("MAX TURNS = {}", game.constants.max_turns);

    loop {
        match game.update_frame(&mut lines_iter) {
            Ok(()) => (),
            Err(BotError::EndOfInput) => {
                info!("engine closed the stream after turn {}", game.turn_number);
                return Ok(());
            },
            Err(e) => return Err(e),
        }
        Game::end_turn(&logic.make_moves(&game))?;
    }
}

fn main() {
    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("{}", e);
        process::exit(1);
    }
}
