use std::io::{self, Write};

use crate::{error::Result, interfaces::Terminal};

/// Writes each line instead of running it
#[derive(Debug)]
pub struct EchoTerminal<W: Write> {
    writer: W,
}

impl EchoTerminal<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> EchoTerminal<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Terminal for EchoTerminal<W> {
    fn send_text(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }
}
