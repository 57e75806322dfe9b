//! Terminal front end.
//!
//! Prints the board after every click and reads card ids from stdin, one per
//! line. `q` quits.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clicky_game::{CardCatalog, CardId, GameConfig, GameState, GameView, RoundSummary, Session};
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

struct TerminalView<W: Write> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    fn draw(&mut self, state: &GameState) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Clicky Game | round {} | score {} | high score {}",
            state.round(),
            state.score(),
            state.highscore()
        )?;
        for card in state.cards() {
            writeln!(self.out, "  [{:>3}] {}", card.id.raw(), card.name)?;
        }
        write!(self.out, "click> ")?;
        self.out.flush()
    }

    fn announce(&mut self, summary: &RoundSummary) -> io::Result<()> {
        if summary.outcome.is_win() {
            writeln!(self.out, "\nYou win! score: {}", summary.score)
        } else {
            writeln!(self.out, "\nGame over :( score: {}", summary.score)
        }
    }
}

impl<W: Write> GameView for TerminalView<W> {
    fn render(&mut self, state: &GameState) {
        if let Err(err) = self.draw(state) {
            warn!(%err, "failed to draw board");
        }
    }

    fn round_over(&mut self, summary: &RoundSummary) {
        if let Err(err) = self.announce(summary) {
            warn!(%err, "failed to announce round");
        }
    }
}

fn parse_click(line: &str, state: &GameState) -> Option<CardId> {
    let id = CardId::new(line.trim().parse().ok()?);
    state.contains(id).then_some(id)
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let catalog = CardCatalog::builtin()?;
    let view = TerminalView { out: io::stdout() };
    let mut session = Session::new(&catalog, GameConfig::default(), view);

    for bytes in io::stdin().lock().split(b'\n') {
        // Lines that are not valid UTF-8 fall through as unrecognised input.
        let bytes = bytes?;
        let line = String::from_utf8_lossy(&bytes);
        if line.trim().eq_ignore_ascii_case("q") {
            break;
        }

        match parse_click(&line, session.state()) {
            Some(id) => {
                session.click(id);
            }
            None => {
                println!("no card with id {:?}", line.trim());
                print!("click> ");
                io::stdout().flush()?;
            }
        }
    }

    println!("\nFinal high score: {}", session.state().highscore());
    Ok(())
}
