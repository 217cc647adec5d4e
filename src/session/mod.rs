use crate::imports::*;
use tokio_util::sync::CancellationToken;

pub mod io;
pub mod line;

use io::ScriptedInteraction;
use line::parse_command_line;

/*
    Session - the REPL. Prompts, tokenizes, dispatches and prints until one of:
    * a command returns Flow::Exit
    * input runs out (Ctrl-D, end of a script)
    * the cancellation token fires (Ctrl-C)

    Each dispatch runs to completion before the next prompt, so cancelling only ever interrupts the wait for input.
*/
pub const WELCOME_MESSAGE: &str =
    "Welcome to the Ships CLI! Enter 'help' to view available commands.\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Exit,
    EndOfInput,
    Cancelled,
}

pub struct Session<'a> {
    dispatcher: &'a Dispatcher,
    records: &'a RecordStore,
    io: Arc<dyn SessionIO>,
    cancel: CancellationToken,
    prompt: String,
}

impl<'a> Session<'a> {
    pub fn new(
        dispatcher: &'a Dispatcher,
        records: &'a RecordStore,
        io: Arc<dyn SessionIO>,
    ) -> Self {
        Session {
            dispatcher,
            records,
            io,
            cancel: CancellationToken::new(),
            prompt: "> ".to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub async fn run(&self) -> Result<SessionEnd> {
        tracing::info!(records = self.records.len(), "Session started");

        let end = loop {
            let line = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break SessionEnd::Cancelled,
                line = self.io.prompt(&self.prompt) => line?,
            };

            let Some(line) = line else {
                break SessionEnd::EndOfInput;
            };

            if self.execute_line(&line).await? == Flow::Exit {
                break SessionEnd::Exit;
            }
        };

        tracing::info!(end = ?end, "Session finished");
        Ok(end)
    }

    /// Runs `lines` as if typed at the prompt and copies everything they printed to `out`,
    /// including the output of commands that ran before a failure.
    pub async fn run_script(
        dispatcher: &'a Dispatcher,
        records: &'a RecordStore,
        lines: &[String],
        out: &mut impl Write,
    ) -> Result<SessionEnd> {
        let io = ScriptedInteraction::new(lines.iter().cloned());
        let result = Session::new(dispatcher, records, Arc::new(io.clone()))
            .run()
            .await;

        out.write_all(io.output().await.as_bytes())
            .and_then(|()| out.flush())
            .context("Failed to write script output")?;
        result
    }

    /// Tokenizes and dispatches one input line, printing whatever it produced.
    pub async fn execute_line(&self, line: &str) -> Result<Flow> {
        let parsed = match parse_command_line(line) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected input line");
                self.io.notify(&format!("Invalid input: {e}\n")).await?;
                return Ok(Flow::Continue);
            }
        };

        let mut out = Vec::new();
        let flow = self
            .dispatcher
            .dispatch(self.records, &parsed.command, &parsed.args, &mut out)?;
        if !out.is_empty() {
            self.io.notify(&String::from_utf8_lossy(&out)).await?;
        }
        Ok(flow)
    }
}
