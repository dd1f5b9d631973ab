// Domain rules - Timecode parsing and validation

use crate::domain::model::*;

/// Check that every character of `text` appears in `alphabet`
pub fn uses_only(text: &str, alphabet: &str) -> bool {
    text.chars().all(|c| alphabet.contains(c))
}

/// Check that a line is made only of timecode characters
pub fn is_timecode_line(line: &str, separators: &Separators) -> bool {
    uses_only(line, &separators.timecode_alphabet())
}

/// Split a `START<range>END` token on the first range separator
///
/// No ordering or bounds checks are made: `9/1` yields start `9` and end `1`.
pub fn parse_frame(token: &str, separators: &Separators) -> Option<Frame> {
    token
        .split_once(separators.range())
        .map(|(start, end)| Frame::new(start, end))
}

/// Parse a line that may join several tokens with the frame separator
pub fn split_frames(line: &str, separators: &Separators) -> FrameList {
    let mut list = FrameList::new();
    for token in line.split(separators.frame()) {
        match parse_frame(token, separators) {
            Some(frame) => list.push(frame),
            None => list.reject(token),
        }
    }
    list
}

/// Rules deciding whether a frame list may be handed to the transcoder
pub struct FrameRules;

impl FrameRules {
    /// A single frame is valid when both timecodes pass the alphabet check
    pub fn frame_valid(frame: &Frame, separators: &Separators) -> bool {
        let alphabet = separators.timecode_alphabet();
        uses_only(&frame.start, &alphabet) && uses_only(&frame.end, &alphabet)
    }

    /// One invalid frame or unparsed token invalidates the whole list
    pub fn list_valid(list: &FrameList, separators: &Separators) -> bool {
        list.rejected.is_empty()
            && list
                .frames
                .iter()
                .all(|frame| Self::frame_valid(frame, separators))
    }

    /// Sort frames by start using plain string order
    ///
    /// The ordering is lexical, so `10:00` sorts before `2:00`.
    pub fn sorted_by_start(frames: &[Frame]) -> Vec<Frame> {
        let mut sorted = frames.to_vec();
        sorted.sort_by(|a, b| a.start.cmp(&b.start));
        sorted
    }
}
