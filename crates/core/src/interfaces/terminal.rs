use crate::error::Result;

/// A named surface that accepts command lines
pub trait Terminal {
    /// Bring the terminal to the user's attention
    fn show(&mut self) {}

    /// Send `text` as one line of input
    fn send_text(&mut self, text: &str) -> Result<()>;
}
