pub mod commands;
pub mod trace_init;

use std::path::PathBuf;

/// Dictionary used when `--dict` is not given.
pub const DEFAULT_DICT_PATH: &str = "data/emoji.json";

/// Resolve the dictionary path: explicit flag, then `EMOJI_DICT`, then the
/// bundled default.
pub fn resolve_dict_path(flag: Option<&str>) -> PathBuf {
    flag.map(PathBuf::from)
        .or_else(|| std::env::var_os("EMOJI_DICT").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DICT_PATH))
}
