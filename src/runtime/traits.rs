//! Trait abstractions for runtime I/O
//!
//! These traits enable testing the executor with mock implementations.

use async_trait::async_trait;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin, Stdout};

/// Line-oriented text channel to the guest
#[async_trait]
pub trait Console: Send {
    /// Read the next line with its terminator removed; `None` at end of input
    async fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write one line of output
    async fn write_line(&mut self, line: &str) -> io::Result<()>;
}

// ============================================================================
// Production Adapters
// ============================================================================

/// Console over the process's stdin and stdout
pub struct StdConsole {
    reader: BufReader<Stdin>,
    stdout: Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
            stdout: tokio::io::stdout(),
        }
    }
}

/// Read one line, accepting `\n` or `\r\n` endings
///
/// Invalid UTF-8 is replaced rather than reported, so a garbled answer
/// reaches validation and gets re-asked like any other bad input.
async fn read_lossy_line<R>(reader: &mut R) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin + Send,
{
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf).await? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Console for StdConsole {
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        read_lossy_line(&mut self.reader).await
    }

    async fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.stdout.write_all(line.as_bytes()).await?;
        self.stdout.write_all(b"\n").await?;
        // Prompts must be visible before we block on the answer
        self.stdout.flush().await
    }
}
