use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    Text(String),
    Blank,
}

/// Lines queued for the terminal, written in one go by [`Output::write_to`].
#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(&mut self, s: impl Into<String>) {
        self.blocks.push(OutputBlock::Text(s.into()));
    }

    pub fn blank(&mut self) {
        self.blocks.push(OutputBlock::Blank);
    }

    /// Each block becomes one line (a multi-line text block keeps its own breaks).
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for block in &self.blocks {
            match block {
                OutputBlock::Text(t) => writeln!(w, "{}", t)?,
                OutputBlock::Blank => writeln!(w)?,
            }
        }
        w.flush()
    }

    /// Rendered text, mainly for tests and logging.
    pub fn to_text(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
