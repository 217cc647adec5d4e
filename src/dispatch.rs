use crate::imports::*;

/*
    Types:
    * Dispatcher - Routes a command name to its handler, or to the unknown-command fallback.
      Stateless between calls: it owns the registry, the renderer and the handler settings, never the records.
*/
pub struct Dispatcher {
    registry: CommandRegistry,
    renderer: Box<dyn PlotRenderer>,
    settings: CommandSettings,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .field("settings", &self.settings)
            .finish()
    }
}

impl Dispatcher {
    pub fn new(
        registry: CommandRegistry,
        renderer: impl PlotRenderer + 'static,
        settings: CommandSettings,
    ) -> Self {
        Dispatcher {
            registry,
            renderer: Box::new(renderer),
            settings,
        }
    }

    /// Built-in commands rendering to SVG.
    pub fn defaults(settings: CommandSettings) -> Result<Self> {
        Ok(Self::new(
            CommandRegistry::defaults(),
            SvgRenderer::new()?,
            settings,
        ))
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &CommandSettings {
        &self.settings
    }

    /// Runs one command. User input problems never come back as errors; an `Err` here is
    /// a broken output stream and should end the session.
    #[tracing::instrument(skip(self, records, args, out), err, fields(arg_count = args.len()))]
    pub fn dispatch(
        &self,
        records: &RecordStore,
        command: &str,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<Flow> {
        let start_time = std::time::Instant::now();

        let Some(handler) = self.registry.get(command) else {
            tracing::debug!("Unknown command");
            writeln!(out, "{}", unknown_command_message(command))
                .context("Failed to write command output")?;
            return Ok(Flow::Continue);
        };

        let mut ctx = CommandContext {
            records,
            registry: &self.registry,
            renderer: self.renderer.as_ref(),
            settings: &self.settings,
            out,
        };
        let flow = handler.execute(&mut ctx, args)?;

        tracing::debug!(
            flow = ?flow,
            duration_ms = start_time.elapsed().as_millis() as u64,
            "Command execution complete"
        );
        Ok(flow)
    }
}

pub(crate) fn unknown_command_message(name: &str) -> String {
    format!("Unknown command '{name}'. Type 'help' to see available commands.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::RecordingRenderer;
    use crate::test_utils::{country_store, init_tracing};

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(
            CommandRegistry::defaults(),
            RecordingRenderer::default(),
            CommandSettings::default(),
        )
    }

    fn dispatch(dispatcher: &Dispatcher, records: &RecordStore, line: &[&str]) -> (Flow, String) {
        let (command, args) = line.split_first().unwrap();
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let mut out = Vec::new();
        let flow = dispatcher
            .dispatch(records, command, &args, &mut out)
            .unwrap();
        (flow, String::from_utf8(out).unwrap())
    }

    #[test]
    fn routes_to_handlers() {
        init_tracing();
        let dispatcher = dispatcher();
        let store = country_store();

        assert_eq!(
            dispatch(&dispatcher, &store, &["show_countries"]),
            (Flow::Continue, "UK\nUS\n".to_string())
        );
        assert_eq!(
            dispatch(&dispatcher, &store, &["top_countries", "1"]),
            (Flow::Continue, "US: 2\n".to_string())
        );
    }

    #[test]
    fn unknown_command_falls_back() {
        init_tracing();
        let dispatcher = dispatcher();
        let store = country_store();
        let before = store.clone();

        let (flow, output) = dispatch(&dispatcher, &store, &["foobar"]);

        assert_eq!(flow, Flow::Continue);
        assert_eq!(
            output,
            "Unknown command 'foobar'. Type 'help' to see available commands.\n"
        );
        assert_eq!(store, before);
    }

    #[test]
    fn invalid_counts_print_usage_only() {
        init_tracing();
        let dispatcher = dispatcher();
        let store = country_store();

        for arg in ["abc", "0", "-3"] {
            let (flow, output) = dispatch(&dispatcher, &store, &["top_countries", arg]);
            assert_eq!(flow, Flow::Continue);
            assert_eq!(
                output,
                "Usage: top_countries <num> (num must be a positive integer)\n"
            );
        }
    }

    #[test]
    fn exit_is_reported_as_flow() {
        let dispatcher = dispatcher();
        let (flow, output) = dispatch(&dispatcher, &RecordStore::default(), &["exit"]);
        assert_eq!(flow, Flow::Exit);
        assert_eq!(output, "Bye!\n");
    }

    #[test]
    fn dispatcher_is_stateless_between_calls() {
        let dispatcher = dispatcher();
        let store = country_store();

        let first = dispatch(&dispatcher, &store, &["top_countries", "2"]);
        let _ = dispatch(&dispatcher, &store, &["foobar"]);
        let second = dispatch(&dispatcher, &store, &["top_countries", "2"]);
        assert_eq!(first, second);
    }

    struct BrokenOutput;

    impl Write for BrokenOutput {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn output_failures_propagate() {
        let dispatcher = dispatcher();
        let result = dispatcher.dispatch(
            &country_store(),
            "show_countries",
            &[],
            &mut BrokenOutput,
        );

        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to write command output"));
    }
}
