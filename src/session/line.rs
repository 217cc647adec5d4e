use crate::imports::*;

use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "session/command_line.pest"] // relative to src directory
struct CommandLineParser;

/// A tokenized input line: the command word and the tokens after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub command: String,
    pub args: Vec<String>,
}

/// Splits a line into tokens. `Ok(None)` for a blank line.
pub fn parse_command_line(input: &str) -> Result<Option<CommandLine>> {
    let line = CommandLineParser::parse(Rule::line, input)
        .map_err(|e| anyhow::anyhow!("{}", e.variant.message()))?
        .next()
        .context("Command line parser produced no output")?;

    let mut tokens = line.into_inner().filter_map(|pair| match pair.as_rule() {
        Rule::bare => Some(pair.as_str().to_string()),
        Rule::quoted => pair.into_inner().next().map(|inner| inner.as_str().to_string()),
        _ => None,
    });

    let Some(command) = tokens.next() else {
        return Ok(None);
    };
    Ok(Some(CommandLine {
        command,
        args: tokens.collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> (String, Vec<String>) {
        let line = parse_command_line(input).unwrap().unwrap();
        (line.command, line.args)
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(
            tokens("  top_countries   5 "),
            ("top_countries".to_string(), vec!["5".to_string()])
        );
        assert_eq!(
            tokens("search_ship\tqueen mary"),
            (
                "search_ship".to_string(),
                vec!["queen".to_string(), "mary".to_string()]
            )
        );
    }

    #[test]
    fn quotes_group_words() {
        assert_eq!(
            tokens(r#"draw_map "my maps/ships.svg""#),
            ("draw_map".to_string(), vec!["my maps/ships.svg".to_string()])
        );
        assert_eq!(
            tokens(r#"search_ship """#),
            ("search_ship".to_string(), vec![String::new()])
        );
    }

    #[test]
    fn blank_lines_are_none() {
        assert_eq!(parse_command_line("").unwrap(), None);
        assert_eq!(parse_command_line("   \t ").unwrap(), None);
    }

    #[test]
    fn unbalanced_quotes_are_rejected() {
        assert!(parse_command_line(r#"search_ship "disney"#).is_err());
    }
}
