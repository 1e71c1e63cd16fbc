use std::fmt;

/// Per-batch line accounting gathered while parsing a contact feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestCounters {
    pub lines: usize,
    pub blank: usize,
    pub comments: usize,
    pub headers: usize,
    pub accepted: usize,
    pub rejected: usize,
}

impl IngestCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_line(&mut self) {
        self.lines += 1;
    }

    pub fn record_blank(&mut self) {
        self.blank += 1;
    }

    pub fn record_comment(&mut self) {
        self.comments += 1;
    }

    pub fn record_header(&mut self) {
        self.headers += 1;
    }

    pub fn record_accepted(&mut self) {
        self.accepted += 1;
    }

    pub fn record_rejected(&mut self) {
        self.rejected += 1;
    }

    pub fn snapshot(&self) -> (usize, usize) {
        (self.accepted, self.rejected)
    }
}

impl fmt::Display for IngestCounters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lines={} accepted={} rejected={} comments={} blank={} headers={}",
            self.lines, self.accepted, self.rejected, self.comments, self.blank, self.headers
        )
    }
}
