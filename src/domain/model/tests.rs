// Unit tests for domain models

#[cfg(test)]
mod tests {
    use crate::domain::model::*;

    #[test]
    fn test_separators_default() {
        let seps = Separators::default();
        assert_eq!(seps.range(), '/');
        assert_eq!(seps.frame(), '_');
        assert_eq!(seps.timecode_alphabet(), "0123456789:/_");
    }

    #[test]
    fn test_separators_reject_identical() {
        assert!(Separators::new('/', '/').is_err());
    }

    #[test]
    fn test_separators_reject_timecode_characters() {
        assert!(Separators::new(':', '_').is_err());
        assert!(Separators::new('/', '5').is_err());
        assert!(Separators::new(' ', '_').is_err());
    }

    #[test]
    fn test_separators_custom() {
        let seps = Separators::new('-', ',').unwrap();
        assert_eq!(seps.timecode_alphabet(), "0123456789:-,");
        assert!(seps.appears_in("1:00-2:00"));
        assert!(!seps.appears_in("1:00/2:00"));
    }

    #[test]
    fn test_job_table_preserves_insertion_order() {
        let mut table = JobTable::new();
        table.insert("b.mp4", FrameList::new());
        table.insert("a.mp4", FrameList::new());
        table.insert("c.mp4", FrameList::new());

        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b.mp4", "a.mp4", "c.mp4"]);
    }

    #[test]
    fn test_job_table_overwrite_replaces_frames_in_place() {
        let mut table = JobTable::new();
        table.insert(
            "a.mp4",
            FrameList::from_frames(vec![Frame::new("0:01", "0:02"), Frame::new("0:03", "0:04")]),
        );
        table.insert("b.mp4", FrameList::new());
        table.insert(
            "a.mp4",
            FrameList::from_frames(vec![Frame::new("1:00", "1:30")]),
        );

        assert_eq!(table.len(), 2);
        let (first, frames) = table.iter().next().unwrap();
        assert_eq!(first, "a.mp4");
        assert_eq!(frames.frames, vec![Frame::new("1:00", "1:30")]);
        assert_eq!(table.frame_count(), 1);
    }

    #[test]
    fn test_frame_list_empty_counts_rejected() {
        let mut list = FrameList::new();
        assert!(list.is_empty());
        list.reject("garbage");
        assert!(!list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_frame_display() {
        let frame = Frame::new("00:00:01", "00:00:05");
        assert_eq!(format!("{}", frame), "00:00:01 -> 00:00:05");
    }

    #[test]
    fn test_cut_config_defaults() {
        let config = CutConfig::default();
        assert_eq!(config.audio_track, 0);
        assert_eq!(config.extension, "mp4");
        assert_eq!(config.output_dir, std::path::PathBuf::from("output"));
        assert_eq!(config.transcoder, "ffmpeg");
    }
}
