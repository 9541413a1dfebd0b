//! Theme preference commands.
//!
//! # Usage
//!
//! ```bash
//! stockroom theme show
//! stockroom theme set oscuro
//! stockroom theme toggle
//! ```

use std::io::{self, Write};

use stockroom_admin::persistence::{load_theme, save_theme};
use stockroom_core::{StorageError, Theme};
use thiserror::Error;

use crate::ThemeAction;
use crate::config::CliConfig;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Run a theme command against the configured data directory.
pub fn run(action: ThemeAction, config: &CliConfig) -> Result<(), ThemeError> {
    let mut storage = config.storage();
    let current = load_theme(&storage);

    let theme = match action {
        ThemeAction::Show => current,
        ThemeAction::Set { theme } => {
            let theme: Theme = theme.parse().map_err(|_| ThemeError::InvalidTheme(theme))?;
            save_theme(&mut storage, theme)?;
            tracing::info!(%theme, "Theme saved");
            theme
        }
        ThemeAction::Toggle => {
            let theme = current.toggled();
            save_theme(&mut storage, theme)?;
            tracing::info!(from = %current, to = %theme, "Theme toggled");
            theme
        }
    };

    writeln!(io::stdout().lock(), "{theme}")?;
    Ok(())
}
