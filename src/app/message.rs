// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    /// Rescan the directory and rebind the gallery.
    Rescan,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Flags {
    /// Locale override (e.g. "fr").
    pub lang: Option<String>,
    /// Directory to browse; defaults to the working directory.
    pub directory: Option<PathBuf>,
    /// Fade delay override in milliseconds.
    pub fade_ms: Option<u32>,
    /// Cancel in-flight swaps when a new image is selected.
    pub cancel_pending: bool,
}

impl Flags {
    /// Parses flags from command-line arguments.
    ///
    /// ```text
    /// iced_gallery [--lang <code>] [--fade-ms <millis>] [--cancel-pending] [DIRECTORY]
    /// ```
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Self, pico_args::Error> {
        let lang = args.opt_value_from_str("--lang")?;
        let fade_ms = args.opt_value_from_str("--fade-ms")?;
        let cancel_pending = args.contains("--cancel-pending");
        let directory = args.opt_free_from_str::<PathBuf>()?;

        let remaining = args.finish();
        if let Some(extra) = remaining.first() {
            return Err(pico_args::Error::ArgumentParsingFailed {
                cause: format!("unexpected argument: {}", extra.to_string_lossy()),
            });
        }

        Ok(Self {
            lang,
            directory,
            fade_ms,
            cancel_pending,
        })
    }
}
