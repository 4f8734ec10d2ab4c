use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use tracing::{debug, info};

use crate::error::SessionError;
use crate::game::{Game, GameState};
use crate::glyph::TextMeasure;
use crate::runtime::{GameEvent, GameEventSource, Runner, Ticker};
use crate::session::Summary;
use crate::ui::{canvas::BufferSurface, split_playfield, StatusLine, SummaryView};

/// Play until a word reaches the right edge or the player bails out, then
/// draw the results.
pub fn play<B, E, T, F, R>(
    terminal: &mut Terminal<B>,
    runner: &mut Runner<E, T>,
    game: &mut Game<F, R>,
) -> Result<Summary, SessionError>
where
    B: Backend,
    E: GameEventSource,
    T: Ticker,
    F: TextMeasure,
    R: Rng,
{
    info!(screen = ?game.screen(), "session started");

    while game.is_running() {
        runner.pace();

        let mut letter = None;
        match runner.poll()? {
            Some(GameEvent::Letter(c)) => letter = Some(c),
            Some(GameEvent::Interrupt) => {
                game.interrupt();
                break;
            }
            // draw() resizes the buffers on its own
            Some(GameEvent::Resize) => debug!("terminal resized"),
            None => {}
        }

        let mut ticked: Result<GameState, _> = Ok(GameState::Running);
        terminal.draw(|f| {
            let (field_area, status_area) = split_playfield(f.area());
            {
                let screen = game.screen();
                let mut surface = BufferSurface::new(f.buffer_mut(), field_area, screen);
                ticked = game.tick(letter, &mut surface);
            }
            let metrics = game.metrics();
            f.render_widget(
                StatusLine {
                    completed: metrics.completed,
                    elapsed: metrics.elapsed(),
                },
                status_area,
            );
        })?;
        ticked?;
    }

    let view = SummaryView {
        summary: game.summary(),
    };
    terminal.draw(|f| f.render_widget(&view, f.area()))?;
    Ok(view.summary)
}

/// Play a session and hold the results on screen until a key is pressed.
pub fn run<B, E, T, F, R>(
    terminal: &mut Terminal<B>,
    runner: &mut Runner<E, T>,
    game: &mut Game<F, R>,
) -> Result<Summary, SessionError>
where
    B: Backend,
    E: GameEventSource,
    T: Ticker,
    F: TextMeasure,
    R: Rng,
{
    let summary = play(terminal, runner, game)?;
    runner.wait_for_key()?;
    Ok(summary)
}
