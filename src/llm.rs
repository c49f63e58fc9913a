//! Model client seam.
//!
//! Provider selection and transport are deliberately out of scope; this
//! trait is the shape a caller plugs a concrete client into. The prompt
//! composer produces plain text for either method.

use crate::error::Result;

/// A language-model chat client: full-response or chunked streaming.
pub trait ModelClient {
    /// Send a prompt, return the full response text
    fn chat(&self, prompt: &str) -> Result<String>;

    /// Send a prompt, return response chunks as they arrive. The default
    /// degrades to a single chunk holding the full response.
    fn chat_stream(&self, prompt: &str) -> Result<Box<dyn Iterator<Item = String> + '_>> {
        let full = self.chat(prompt)?;
        Ok(Box::new(std::iter::once(full)))
    }
}
