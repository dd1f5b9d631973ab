//! Progress bar over the videos of a batch

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const PROGRESS_TEMPLATE: &str =
    "{elapsed_precise:.bold} ▕{wide_bar:.red/white.dim}▏ {pos}/{len} videos {msg}";

const PROGRESS_CHARS: &str = "█▉▊▋▌▍▎▏  ";

/// Bar drawn on stderr, or a hidden one when `enabled` is false
pub fn video_progress_bar(len: usize, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars(PROGRESS_CHARS);

    ProgressBar::with_draw_target(Some(len as u64), ProgressDrawTarget::stderr()).with_style(style)
}
