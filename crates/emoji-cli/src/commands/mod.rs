pub mod config_ops;
pub mod dict_ops;
pub mod translate_ops;

use std::fs;

use emoji_core::dict::load_index_or_empty;
use emoji_core::settings::{self, settings};
use emoji_core::EmojiIndex;
use tracing::debug;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}
pub(crate) use die;

/// Install a custom settings file before anything reads the settings.
pub fn init_settings(file: Option<&str>) {
    let Some(file) = file else {
        return;
    };
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error in {file}: {}");
    debug!(file, "custom settings installed");
}

/// Open the dictionary for translation. Failures degrade to the empty index
/// (with a warning on stderr).
pub fn open_index(dict: Option<&str>) -> EmojiIndex {
    let path = crate::resolve_dict_path(dict);
    debug!(path = %path.display(), "opening dictionary");
    load_index_or_empty(&path, settings().index.collision)
}
