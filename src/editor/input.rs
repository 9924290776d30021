use std::io::{self, Read};

/// Stream a `config:set` payload of `-` is read from.
pub trait InputSource {
    /// Reads everything left in the stream.
    ///
    /// # Errors
    /// Returns the underlying I/O error, including invalid UTF-8.
    fn read_all(&mut self) -> io::Result<String>;
}

/// [`InputSource`] over any reader.
pub struct ReaderInput<R> {
    reader: R,
}

impl<R: Read> ReaderInput<R> {
    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ReaderInput<io::Stdin> {
    /// Reads the process standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin())
    }
}

impl<R: Read> InputSource for ReaderInput<R> {
    fn read_all(&mut self) -> io::Result<String> {
        let mut content = String::new();
        self.reader.read_to_string(&mut content)?;
        Ok(content)
    }
}
