//! Path helpers for video lookup and clip naming

use std::path::{Path, PathBuf};

use crate::ports::FsPort;

/// Container used for every written clip
pub const CLIP_EXTENSION: &str = "mp4";

/// Find a video by its name as given, then with the extension appended
pub fn resolve_video(fs: &dyn FsPort, name: &str, extension: &str) -> Option<String> {
    if fs.is_file(Path::new(name)) {
        return Some(name.to_string());
    }
    let qualified = format!("{}.{}", name, extension);
    fs.is_file(Path::new(&qualified)).then_some(qualified)
}

/// File name without directory and last extension
pub fn base_name(video: &str) -> String {
    Path::new(video)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| video.to_string())
}

/// `<dir>/<base-name>-<index>.mp4`
pub fn clip_output_path(dir: &Path, video: &str, index: usize) -> PathBuf {
    dir.join(format!("{}-{}.{}", base_name(video), index, CLIP_EXTENSION))
}
