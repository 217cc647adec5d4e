use crate::imports::*;
use async_trait::async_trait;
use std::io::BufRead;
use tokio::sync::mpsc;

/*
    SessionIO - where the session reads lines from and writes results to.
    * notify - Print a block of output
    * prompt - Show the prompt and wait for the next line, None once input is exhausted

    Implementations:
    * StdinInteraction - Console. Stdin is read on its own thread so waiting for a line never blocks the runtime.
      Bytes that are not UTF-8 are replaced, never rejected, so a malformed line is just an unknown command.
    * ScriptedInteraction - Fixed list of input lines, captures everything written. Used by `--command` and tests.
*/
#[async_trait]
pub trait SessionIO: Send + Sync {
    async fn notify(&self, message: &str) -> Result<()>;
    async fn prompt(&self, message: &str) -> Result<Option<String>>;
}

pub struct StdinInteraction {
    lines: Mutex<mpsc::Receiver<std::io::Result<String>>>,
}

impl StdinInteraction {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel(1);
        std::thread::spawn(move || {
            let mut stdin = std::io::stdin().lock();
            loop {
                let line = match read_line_lossy(&mut stdin) {
                    Ok(Some(line)) => Ok(line),
                    Ok(None) => break,
                    Err(e) => Err(e),
                };
                let failed = line.is_err();
                if sender.blocking_send(line).is_err() || failed {
                    break;
                }
            }
        });
        StdinInteraction {
            lines: Mutex::new(receiver),
        }
    }
}

impl Default for StdinInteraction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionIO for StdinInteraction {
    async fn notify(&self, message: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(message.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    async fn prompt(&self, message: &str) -> Result<Option<String>> {
        {
            let mut stdout = std::io::stdout().lock();
            write!(stdout, "{message}")?;
            stdout.flush()?;
        }
        match self.lines.lock().await.recv().await {
            Some(line) => Ok(Some(line.context("Failed to read from stdin")?)),
            None => Ok(None),
        }
    }
}

/// One line without its terminator, `None` at end of input.
pub(crate) fn read_line_lossy(reader: &mut impl BufRead) -> std::io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
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

#[derive(Debug, Clone, Default)]
pub struct ScriptedInteraction {
    input: Arc<Mutex<VecDeque<String>>>,
    output: Arc<Mutex<String>>,
}

impl ScriptedInteraction {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInteraction {
            input: Arc::new(Mutex::new(lines.into_iter().map(Into::into).collect())),
            output: Arc::new(Mutex::new(String::new())),
        }
    }

    /// Everything written so far, prompts excluded.
    pub async fn output(&self) -> String {
        self.output.lock().await.clone()
    }
}

#[async_trait]
impl SessionIO for ScriptedInteraction {
    async fn notify(&self, message: &str) -> Result<()> {
        self.output.lock().await.push_str(message);
        Ok(())
    }

    async fn prompt(&self, _message: &str) -> Result<Option<String>> {
        Ok(self.input.lock().await.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_replays_lines_then_ends() {
        let io = ScriptedInteraction::new(["help", "exit"]);

        assert_eq!(io.prompt("> ").await.unwrap().as_deref(), Some("help"));
        assert_eq!(io.prompt("> ").await.unwrap().as_deref(), Some("exit"));
        assert_eq!(io.prompt("> ").await.unwrap(), None);
    }

    #[test]
    fn lines_are_read_lossily() {
        let mut input = std::io::Cursor::new(b"help\r\nshow\xffcountries\n\nexit".to_vec());

        assert_eq!(read_line_lossy(&mut input).unwrap().as_deref(), Some("help"));
        assert_eq!(
            read_line_lossy(&mut input).unwrap().as_deref(),
            Some("show\u{FFFD}countries")
        );
        assert_eq!(read_line_lossy(&mut input).unwrap().as_deref(), Some(""));
        assert_eq!(read_line_lossy(&mut input).unwrap().as_deref(), Some("exit"));
        assert_eq!(read_line_lossy(&mut input).unwrap(), None);
    }

    #[tokio::test]
    async fn scripted_captures_output() {
        let io = ScriptedInteraction::new(Vec::<String>::new());
        let handle = io.clone();

        io.notify("UK\n").await.unwrap();
        io.notify("US\n").await.unwrap();
        assert_eq!(handle.output().await, "UK\nUS\n");
    }
}
