// Batch cutter - Validates each job table entry and runs one transcoder call per frame

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, error, info, warn};

use crate::domain::model::*;
use crate::domain::rules::FrameRules;
use crate::ports::*;
use crate::utils::path::{base_name, clip_output_path, resolve_video};
use crate::utils::progress::video_progress_bar;

/// Why a whole video was left out of the batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotFound,
    InvalidFrames,
    NoFrames,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedVideo {
    pub video: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedClip {
    pub video: String,
    pub frame: Frame,
    pub output: PathBuf,
    pub reason: String,
}

/// Aggregated result of one batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub videos_cut: usize,
    pub skipped: Vec<SkippedVideo>,
    pub clips_written: Vec<PathBuf>,
    pub clips_failed: Vec<FailedClip>,
}

impl BatchReport {
    /// True when no transcoder call failed
    pub fn is_success(&self) -> bool {
        self.clips_failed.is_empty()
    }

    fn skip(&mut self, video: &str, reason: SkipReason) {
        self.skipped.push(SkippedVideo {
            video: video.to_string(),
            reason,
        });
    }
}

pub struct BatchCutter<'a> {
    config: &'a CutConfig,
    fs: &'a dyn FsPort,
    transcoder: &'a mut dyn TranscodePort,
    show_progress: bool,
    // next clip index per output base name, shared by videos with the same stem
    next_index: HashMap<String, usize>,
}

impl<'a> BatchCutter<'a> {
    pub fn new(
        config: &'a CutConfig,
        fs: &'a dyn FsPort,
        transcoder: &'a mut dyn TranscodePort,
    ) -> Self {
        Self {
            config,
            fs,
            transcoder,
            show_progress: true,
            next_index: HashMap::new(),
        }
    }

    /// Draw a progress bar while cutting (on by default)
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.show_progress = enabled;
        self
    }

    /// Process every entry in table order
    pub fn run(&mut self, table: JobTable) -> BatchReport {
        let mut report = BatchReport::default();
        self.next_index.clear();
        let bar = video_progress_bar(table.len(), self.show_progress);

        for (video, frames) in table {
            bar.set_message(video.clone());
            bar.suspend(|| self.cut_video(&video, &frames, &mut report));
            bar.inc(1);
        }

        bar.finish_and_clear();
        report
    }

    fn cut_video(&mut self, name: &str, frames: &FrameList, report: &mut BatchReport) {
        let Some(video) = resolve_video(self.fs, name, &self.config.extension) else {
            warn!("File {} not found, skipping", name);
            report.skip(name, SkipReason::NotFound);
            return;
        };

        if !FrameRules::list_valid(frames, &self.config.separators) {
            warn!("The frames of {} are not valid, skipping", video);
            if !frames.rejected.is_empty() {
                debug!("Unparsed tokens for {}: {:?}", video, frames.rejected);
            }
            report.skip(&video, SkipReason::InvalidFrames);
            return;
        }

        if frames.frames.is_empty() {
            warn!("No frames given for {}, skipping", video);
            report.skip(&video, SkipReason::NoFrames);
            return;
        }

        let sorted = FrameRules::sorted_by_start(&frames.frames);
        debug!("Frames for {}: {:?}", video, sorted);

        let stem = base_name(&video);
        let first = self.next_index.get(&stem).copied().unwrap_or(0);
        if first > 0 {
            info!(
                "Clips of {} are numbered from {}, an earlier video already used the name {}",
                video, first, stem
            );
        }
        self.next_index.insert(stem, first + sorted.len());

        for (offset, frame) in sorted.into_iter().enumerate() {
            let job = ClipJob {
                input: PathBuf::from(&video),
                output: clip_output_path(&self.config.output_dir, &video, first + offset),
                frame,
                audio_track: self.config.audio_track,
            };
            debug!("Treating frame {} of {}", job.frame, video);
            self.run_job(&video, job, report);
        }

        report.videos_cut += 1;
    }

    fn run_job(&mut self, video: &str, job: ClipJob, report: &mut BatchReport) {
        let failure = match self.transcoder.cut(&job) {
            Ok(ClipOutcome::Success) => {
                info!("Wrote {}", job.output.display());
                report.clips_written.push(job.output);
                return;
            }
            Ok(ClipOutcome::Failed { code, stderr }) => {
                let status = code
                    .map(|c| format!("exit code {}", c))
                    .unwrap_or_else(|| "terminated by signal".to_string());
                if stderr.is_empty() {
                    status
                } else {
                    format!("{}: {}", status, stderr)
                }
            }
            Err(e) => match std::error::Error::source(&e) {
                Some(source) => format!("{}: {}", e, source),
                None => e.to_string(),
            },
        };

        error!("Clip {} of {} failed ({})", job.frame, video, failure);
        report.clips_failed.push(FailedClip {
            video: video.to_string(),
            frame: job.frame,
            output: job.output,
            reason: failure,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{MemoryFs, RecordingTranscoder};
    use std::path::Path;

    fn table(entries: Vec<(&str, Vec<(&str, &str)>)>) -> JobTable {
        let mut table = JobTable::new();
        for (video, frames) in entries {
            let list = FrameList::from_frames(
                frames.into_iter().map(|(s, e)| Frame::new(s, e)).collect(),
            );
            table.insert(video, list);
        }
        table
    }

    fn run(table: JobTable, fs: &MemoryFs, transcoder: &mut RecordingTranscoder) -> BatchReport {
        let config = CutConfig::default();
        BatchCutter::new(&config, fs, transcoder)
            .with_progress(false)
            .run(table)
    }

    #[test]
    fn test_single_clip() {
        let fs = MemoryFs::new(&["a.mp4"]);
        let mut transcoder = RecordingTranscoder::new();
        let report = run(
            table(vec![("a.mp4", vec![("00:00:01", "00:00:05")])]),
            &fs,
            &mut transcoder,
        );

        assert_eq!(transcoder.jobs.len(), 1);
        let job = &transcoder.jobs[0];
        assert_eq!(job.input, PathBuf::from("a.mp4"));
        assert_eq!(job.output, Path::new("output").join("a-0.mp4"));
        assert_eq!(job.audio_track, 0);
        assert_eq!(report.videos_cut, 1);
        assert!(report.is_success());
    }

    #[test]
    fn test_clips_follow_lexical_start_order() {
        let fs = MemoryFs::new(&["a.mp4"]);
        let mut transcoder = RecordingTranscoder::new();
        run(
            table(vec![("a.mp4", vec![("2:00", "2:05"), ("10:00", "10:05")])]),
            &fs,
            &mut transcoder,
        );

        let starts: Vec<&str> = transcoder.jobs.iter().map(|j| j.frame.start.as_str()).collect();
        assert_eq!(starts, vec!["10:00", "2:00"]);
        assert_eq!(transcoder.jobs[1].output, Path::new("output").join("a-1.mp4"));
    }

    #[test]
    fn test_extension_is_appended_when_needed() {
        let fs = MemoryFs::new(&["show.mp4"]);
        let mut transcoder = RecordingTranscoder::new();
        run(table(vec![("show", vec![("1", "2")])]), &fs, &mut transcoder);

        assert_eq!(transcoder.jobs[0].input, PathBuf::from("show.mp4"));
        assert_eq!(transcoder.jobs[0].output, Path::new("output").join("show-0.mp4"));
    }

    #[test]
    fn test_missing_video_is_skipped() {
        let fs = MemoryFs::new(&[]);
        let mut transcoder = RecordingTranscoder::new();
        let report = run(
            table(vec![("ghost.mp4", vec![("1", "2")])]),
            &fs,
            &mut transcoder,
        );

        assert!(transcoder.jobs.is_empty());
        assert_eq!(
            report.skipped,
            vec![SkippedVideo {
                video: "ghost.mp4".to_string(),
                reason: SkipReason::NotFound,
            }]
        );
        assert!(report.is_success());
    }

    #[test]
    fn test_one_bad_frame_skips_whole_video() {
        let fs = MemoryFs::new(&["a.mp4", "b.mp4"]);
        let mut transcoder = RecordingTranscoder::new();
        let report = run(
            table(vec![
                ("a.mp4", vec![("0:01", "0:02"), ("0:03", "0:0x")]),
                ("b.mp4", vec![("0:01", "0:02")]),
            ]),
            &fs,
            &mut transcoder,
        );

        assert_eq!(transcoder.jobs.len(), 1);
        assert_eq!(transcoder.jobs[0].input, PathBuf::from("b.mp4"));
        assert_eq!(report.skipped[0].reason, SkipReason::InvalidFrames);
        assert_eq!(report.videos_cut, 1);
    }

    #[test]
    fn test_rejected_token_skips_video() {
        let fs = MemoryFs::new(&["a.mp4"]);
        let mut transcoder = RecordingTranscoder::new();
        let mut list = FrameList::from_frames(vec![Frame::new("1", "2")]);
        list.reject("3");
        let mut jobs = JobTable::new();
        jobs.insert("a.mp4", list);

        let report = run(jobs, &fs, &mut transcoder);
        assert!(transcoder.jobs.is_empty());
        assert_eq!(report.skipped[0].reason, SkipReason::InvalidFrames);
    }

    #[test]
    fn test_empty_frame_list_is_skipped() {
        let fs = MemoryFs::new(&["a.mp4"]);
        let mut transcoder = RecordingTranscoder::new();
        let report = run(table(vec![("a.mp4", vec![])]), &fs, &mut transcoder);

        assert!(transcoder.jobs.is_empty());
        assert_eq!(report.skipped[0].reason, SkipReason::NoFrames);
    }

    #[test]
    fn test_failed_clip_is_recorded_and_batch_continues() {
        let fs = MemoryFs::new(&["a.mp4"]);
        let failing = Path::new("output").join("a-0.mp4");
        let mut transcoder = RecordingTranscoder::failing(&[failing.to_str().unwrap()]);
        let report = run(
            table(vec![("a.mp4", vec![("1", "2"), ("3", "4")])]),
            &fs,
            &mut transcoder,
        );

        assert_eq!(transcoder.jobs.len(), 2);
        assert!(!report.is_success());
        assert_eq!(report.clips_failed.len(), 1);
        assert_eq!(report.clips_failed[0].output, failing);
        assert!(report.clips_failed[0].reason.contains("exit code 1"));
        assert_eq!(report.clips_written, vec![Path::new("output").join("a-1.mp4")]);
    }

    #[test]
    fn test_videos_sharing_a_stem_get_distinct_clip_names() {
        let fs = MemoryFs::new(&["a.mp4", "a.mkv", "x/b.mp4", "y/b.mp4"]);
        let mut transcoder = RecordingTranscoder::new();
        let report = run(
            table(vec![
                ("a.mp4", vec![("1", "2"), ("3", "4")]),
                ("a.mkv", vec![("5", "6")]),
                ("x/b.mp4", vec![("1", "2")]),
                ("y/b.mp4", vec![("1", "2")]),
            ]),
            &fs,
            &mut transcoder,
        );

        let outputs: Vec<PathBuf> = transcoder.jobs.iter().map(|j| j.output.clone()).collect();
        let out = Path::new("output");
        assert_eq!(
            outputs,
            vec![
                out.join("a-0.mp4"),
                out.join("a-1.mp4"),
                out.join("a-2.mp4"),
                out.join("b-0.mp4"),
                out.join("b-1.mp4"),
            ]
        );
        assert_eq!(report.clips_written.len(), 5);
    }

    #[test]
    fn test_failed_clip_still_consumes_its_index() {
        let fs = MemoryFs::new(&["a.mp4", "a.mkv"]);
        let failing = Path::new("output").join("a-0.mp4");
        let mut transcoder = RecordingTranscoder::failing(&[failing.to_str().unwrap()]);
        run(
            table(vec![("a.mp4", vec![("1", "2")]), ("a.mkv", vec![("3", "4")])]),
            &fs,
            &mut transcoder,
        );

        assert_eq!(transcoder.jobs[1].output, Path::new("output").join("a-1.mp4"));
    }

    #[test]
    fn test_spawn_error_reason_names_the_cause() {
        struct Unspawnable;

        impl TranscodePort for Unspawnable {
            fn cut(&mut self, _job: &ClipJob) -> crate::error::FrameCutResult<ClipOutcome> {
                Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no such binary").into())
            }
        }

        let fs = MemoryFs::new(&["a.mp4"]);
        let config = CutConfig::default();
        let mut transcoder = Unspawnable;
        let report = BatchCutter::new(&config, &fs, &mut transcoder)
            .with_progress(false)
            .run(table(vec![("a.mp4", vec![("1", "2")])]));

        assert_eq!(report.clips_failed[0].reason, "I/O error: no such binary");
    }

    #[test]
    fn test_audio_track_and_output_dir_come_from_config() {
        let fs = MemoryFs::new(&["a.mp4"]);
        let mut transcoder = RecordingTranscoder::new();
        let config = CutConfig {
            audio_track: 2,
            output_dir: PathBuf::from("clips"),
            ..CutConfig::default()
        };

        BatchCutter::new(&config, &fs, &mut transcoder)
            .with_progress(false)
            .run(table(vec![("a.mp4", vec![("1", "2")])]));

        assert_eq!(transcoder.jobs[0].audio_track, 2);
        assert_eq!(transcoder.jobs[0].output, Path::new("clips").join("a-0.mp4"));
    }
}
