use std::io;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Unified event type consumed by the game loop
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A printable key was pressed
    Letter(char),
    /// Esc or Ctrl+C
    Interrupt,
    Resize,
}

impl GameEvent {
    /// Translate a terminal event, dropping the ones the game ignores.
    pub fn from_crossterm(ev: CtEvent) -> Option<Self> {
        match ev {
            CtEvent::Key(key) => Self::from_key(key),
            CtEvent::Resize(_, _) => Some(Self::Resize),
            _ => None,
        }
    }

    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        match key.code {
            KeyCode::Esc => Some(Self::Interrupt),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Self::Interrupt)
            }
            KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                None
            }
            KeyCode::Char(c) => Some(Self::Letter(c)),
            _ => None,
        }
    }
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait GameEventSource {
    /// Return a pending event without blocking, if there is one.
    fn poll(&mut self) -> io::Result<Option<GameEvent>>;

    /// Block until the next event arrives.
    fn wait(&mut self) -> io::Result<GameEvent>;
}

/// Production event source using crossterm. Polls on the calling thread.
#[derive(Debug, Default)]
pub struct CrosstermEventSource;

impl CrosstermEventSource {
    pub fn new() -> Self {
        Self
    }
}

impl GameEventSource for CrosstermEventSource {
    fn poll(&mut self) -> io::Result<Option<GameEvent>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        Ok(GameEvent::from_crossterm(event::read()?))
    }

    fn wait(&mut self) -> io::Result<GameEvent> {
        loop {
            if let Some(ev) = GameEvent::from_crossterm(event::read()?) {
                return Ok(ev);
            }
        }
    }
}

/// Test event source fed through a channel
pub struct TestEventSource {
    rx: Receiver<GameEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<GameEvent>) -> Self {
        Self { rx }
    }
}

impl GameEventSource for TestEventSource {
    fn poll(&mut self) -> io::Result<Option<GameEvent>> {
        match self.rx.try_recv() {
            Ok(ev) => Ok(Some(ev)),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => Ok(None),
        }
    }

    fn wait(&mut self) -> io::Result<GameEvent> {
        self.rx
            .recv()
            .map_err(|e| io::Error::new(io::ErrorKind::UnexpectedEof, e))
    }
}

/// Configurable ticker interface
pub trait Ticker {
    fn interval(&self) -> Duration;
}

/// Fixed interval ticker
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Drives the loop one tick at a time: one non-blocking poll per tick and a
/// minimum gap between tick starts.
pub struct Runner<E: GameEventSource, T: Ticker> {
    event_source: E,
    ticker: T,
    last_tick: Option<Instant>,
}

impl<E: GameEventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
            last_tick: None,
        }
    }

    /// At most one pending event, never blocks
    pub fn poll(&mut self) -> io::Result<Option<GameEvent>> {
        self.event_source.poll()
    }

    /// Sleep for whatever is left of the tick interval since the previous
    /// call.
    pub fn pace(&mut self) {
        let interval = self.ticker.interval();
        if let Some(last) = self.last_tick {
            let spent = last.elapsed();
            if spent < interval {
                std::thread::sleep(interval - spent);
            }
        }
        self.last_tick = Some(Instant::now());
    }

    /// Block until any key is pressed. Resizes are skipped.
    pub fn wait_for_key(&mut self) -> io::Result<()> {
        loop {
            match self.event_source.wait()? {
                GameEvent::Resize => continue,
                GameEvent::Letter(_) | GameEvent::Interrupt => return Ok(()),
            }
        }
    }
}
