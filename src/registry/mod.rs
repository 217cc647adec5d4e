use crate::imports::*;
use regex::Regex;

/*
    Types:
    * CommandRegistry - Lookup table of command name -> handler. Built once, never mutated, holds no records.
    * CommandRegistryBuilder - Collects commands, enforcing the NamePolicy and unique names as they are added
    * NamePolicy - Struct enforcing naming conventions and reserved names

    Registration mistakes are programming errors, so they panic at construction instead of surfacing at dispatch.
*/
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, Box<dyn Command>>,
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

impl CommandRegistry {
    pub fn builder() -> CommandRegistryBuilder {
        CommandRegistryBuilder::default()
    }

    /// Every built-in command.
    pub fn defaults() -> Self {
        Self::builder()
            .register(HelpCommand)
            .register(ShowCountriesCommand)
            .register(TopCountriesCommand)
            .register(ShipsByTypesCommand)
            .register(SearchShipCommand)
            .register(SpeedHistogramCommand)
            .register(DrawMapCommand)
            .register(ExitCommand)
            .build()
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|command| command.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    /// Commands in lexicographic name order, for help output.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Command> + '_ {
        self.commands.values().map(|command| command.as_ref())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[derive(Default)]
pub struct CommandRegistryBuilder {
    commands: BTreeMap<&'static str, Box<dyn Command>>,
}

impl CommandRegistryBuilder {
    pub fn register<C: Command + 'static>(mut self, command: C) -> Self {
        let name = command.name();
        DEFAULT_NAME_POLICY.validate(name, "command");
        if self.commands.contains_key(name) {
            panic!("CommandRegistry violation: command '{}' is registered twice", name);
        }
        tracing::debug!(command = %name, "Registered command");
        self.commands.insert(name, Box::new(command));
        self
    }

    pub fn build(self) -> CommandRegistry {
        CommandRegistry {
            commands: self.commands,
        }
    }
}

pub struct NamePolicy {
    pub reserved_names: &'static [&'static str],
    allowed_regex: Regex,
}

impl NamePolicy {
    pub fn new(reserved_names: &'static [&'static str], allowed_pattern: &str) -> Self {
        Self {
            reserved_names,
            allowed_regex: Regex::new(allowed_pattern)
                .expect("NamePolicy: invalid allowed_pattern regex"),
        }
    }

    pub fn validate(&self, name: impl Into<String>, context: &str) {
        let name = name.into();

        if self.reserved_names.contains(&name.as_str()) {
            panic!(
                "NamePolicy violation: {} name '{}' is reserved",
                context, name
            );
        }

        if !self.allowed_regex.is_match(&name) {
            panic!(
                "NamePolicy violation: {} name '{}' does not match pattern {}",
                context,
                name,
                self.allowed_regex.as_str()
            );
        }
    }
}

// "" is what an empty input line tokenizes to, it must never reach a handler.
pub static DEFAULT_NAME_POLICY: LazyLock<NamePolicy> =
    LazyLock::new(|| NamePolicy::new(&[""], r"^[a-z][a-z0-9_]*$"));
