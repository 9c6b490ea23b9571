use clap::Parser;
use log::{info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::thread;

use ratatui::DefaultTerminal;
use term_snake::config::Settings;
use term_snake::game::{Game, GameState};
use term_snake::input::{self, KeyMap};
use term_snake::{terminal, ui};

fn main() -> Result<(), io::Error> {
    let settings = Settings::parse();

    // Set up logging before the terminal goes raw
    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create(&settings.log_file)?,
    )
    .map_err(io::Error::other)?;

    info!("Starting snake with {:?}", settings);

    let game = Game::new(settings.size(), settings.delay(), settings.rng());
    let result = terminal::session(|term| run(term, game, &KeyMap::default()));
    if let Err(e) = &result {
        warn!("Game loop stopped: {}", e);
    }

    info!("Exiting snake");
    result
}

fn run<R: rand::Rng>(
    terminal: &mut DefaultTerminal,
    mut game: Game<R>,
    keymap: &KeyMap,
) -> io::Result<()> {
    let first = game.snapshot();
    terminal.draw(|f| ui::draw(f, &first))?;

    loop {
        let command = input::poll_command(keymap)?;
        let snapshot = game.tick(command);
        terminal.draw(|f| ui::draw(f, &snapshot))?;

        if snapshot.state == GameState::Exited {
            return terminal.show_cursor();
        }

        thread::sleep(game.delay());
    }
}
