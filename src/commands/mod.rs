pub mod countries;
pub mod exit;
pub mod help;
pub mod plots;
pub mod search;
pub mod traits;
pub mod types;

use crate::imports::*;
use std::num::{IntErrorKind, NonZeroUsize};

/*
    Types:
    * Flow - What the session should do after a command ran
    * CommandSettings - The part of the session configuration handlers can see
    * CommandContext - Everything a handler may touch for one dispatch: records, registry, renderer, output

    Helpers shared by the handlers for the argument-validation contract live at the bottom.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CommandSettings {
    pub histogram_bins: usize,
    pub histogram_file: String,
    pub map_file: String,
}

impl Default for CommandSettings {
    fn default() -> Self {
        CommandSettings {
            histogram_bins: 20,
            histogram_file: "speed_histogram.svg".to_string(),
            map_file: "ships_map.svg".to_string(),
        }
    }
}

pub struct CommandContext<'a> {
    pub records: &'a RecordStore,
    pub registry: &'a CommandRegistry,
    pub renderer: &'a dyn PlotRenderer,
    pub settings: &'a CommandSettings,
    pub out: &'a mut dyn Write,
}

impl CommandContext<'_> {
    pub fn line(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.out, "{text}").context("Failed to write command output")
    }

    /// Prints the command's usage line; handlers return straight after.
    pub fn usage(&mut self, command: &impl Descriptor) -> Result<Flow> {
        tracing::debug!(command = %command.name(), "Rejected arguments");
        self.line(command.usage())?;
        Ok(Flow::Continue)
    }
}

// Count arguments must be a plain integer above zero, nothing is coerced.
// Counts too large for usize mean "everything" and saturate.
pub(crate) fn parse_positive_count(arg: &str) -> Option<NonZeroUsize> {
    let value = match arg.parse::<u128>() {
        Ok(value) => usize::try_from(value).unwrap_or(usize::MAX),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => usize::MAX,
        Err(_) => return None,
    };
    NonZeroUsize::new(value)
}

// Optional single file argument, falling back to the configured default.
pub(crate) fn output_file(args: &[String], default: &str) -> Option<PathBuf> {
    match args {
        [] => Some(PathBuf::from(default)),
        [file] => Some(PathBuf::from(file)),
        _ => None,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_counts_parse() {
        assert_eq!(parse_positive_count("5").map(NonZeroUsize::get), Some(5));
        assert_eq!(parse_positive_count("1").map(NonZeroUsize::get), Some(1));
    }

    #[test]
    fn non_positive_and_non_integer_counts_are_rejected() {
        assert!(parse_positive_count("0").is_none());
        assert!(parse_positive_count("-3").is_none());
        assert!(parse_positive_count("abc").is_none());
        assert!(parse_positive_count("2.5").is_none());
        assert!(parse_positive_count("").is_none());
    }

    #[test]
    fn huge_counts_saturate() {
        let max = Some(usize::MAX);
        assert_eq!(
            parse_positive_count("9223372036854775808").map(NonZeroUsize::get),
            Some(usize::try_from(9223372036854775808u128).unwrap_or(usize::MAX))
        );
        assert_eq!(
            parse_positive_count("340282366920938463463374607431768211456000").map(NonZeroUsize::get),
            max
        );
        assert!(parse_positive_count("-340282366920938463463374607431768211456000").is_none());
    }

    #[test]
    fn output_file_defaults_and_overrides() {
        assert_eq!(output_file(&[], "map.svg"), Some(PathBuf::from("map.svg")));
        assert_eq!(
            output_file(&["out/custom.svg".to_string()], "map.svg"),
            Some(PathBuf::from("out/custom.svg"))
        );
        assert_eq!(
            output_file(&["a".to_string(), "b".to_string()], "map.svg"),
            None
        );
    }
}
