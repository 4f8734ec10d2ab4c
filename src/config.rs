use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::app_dirs::AppDirs;
use crate::error::InitError;
use crate::geometry::{Screen, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH};
use crate::glyph::{CellFont, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH};
use crate::vocabulary::{Vocabulary, EXPECTED_WORDS};

/// Startup settings. Gameplay pacing is not configurable.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub screen_width: u32,
    pub screen_height: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    /// Word list to use instead of the bundled one
    pub vocabulary: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            vocabulary: None,
        }
    }
}

impl Config {
    pub fn screen(&self) -> Result<Screen, InitError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(InitError::Screen(format!(
                "must be non-zero, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        // playfield coordinates are signed
        let limit = i32::MAX as u32;
        if self.screen_width > limit || self.screen_height > limit {
            return Err(InitError::Screen(format!(
                "must not exceed {limit}, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        Ok(Screen::new(self.screen_width, self.screen_height))
    }

    pub fn font(&self) -> Result<CellFont, InitError> {
        CellFont::new(self.cell_width, self.cell_height)
    }

    pub fn load_vocabulary(&self) -> Result<Vocabulary, InitError> {
        match &self.vocabulary {
            Some(path) => Vocabulary::load(path, EXPECTED_WORDS),
            None => Vocabulary::bundled(),
        }
    }

    /// Load and validate everything a session needs, before the terminal is
    /// touched.
    pub fn resources(&self) -> Result<Resources, InitError> {
        let screen = self.screen()?;
        let font = self.font()?;
        if font.cell_height() > screen.height {
            return Err(InitError::Font(format!(
                "cell height {} does not fit a screen {} tall",
                font.cell_height(),
                screen.height
            )));
        }
        let vocabulary = self.load_vocabulary()?;
        vocabulary.check_renderable(&font, screen)?;
        info!(
            words = vocabulary.len(),
            source = ?self.vocabulary,
            "vocabulary loaded"
        );
        Ok(Resources {
            screen,
            font,
            vocabulary,
        })
    }
}

/// Validated startup resources
#[derive(Debug, Clone)]
pub struct Resources {
    pub screen: Screen,
    pub font: CellFont,
    pub vocabulary: Vocabulary,
}

pub trait ConfigStore {
    fn load(&self) -> Result<Config, InitError>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    /// A missing file means defaults; anything else that goes wrong is fatal.
    fn load(&self) -> Result<Config, InitError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(source) => {
                return Err(InitError::Config {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_slice::<Config>(&bytes).map_err(|source| InitError::ConfigFormat {
            path: self.path.clone(),
            source,
        })
    }
}
