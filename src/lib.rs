mod aggregate;
mod commands;
mod config;
mod dispatch;
mod loader;
mod registry;
mod render;
mod session;
mod values;

#[cfg(test)]
mod test_utils;

// Library exports
pub mod prelude {
    // Built-in Commands
    pub use crate::commands::countries::{ShowCountriesCommand, TopCountriesCommand};
    pub use crate::commands::exit::ExitCommand;
    pub use crate::commands::help::HelpCommand;
    pub use crate::commands::plots::{DrawMapCommand, SpeedHistogramCommand};
    pub use crate::commands::search::SearchShipCommand;
    pub use crate::commands::types::ShipsByTypesCommand;
    pub use crate::commands::{CommandContext, CommandSettings, Flow};

    // Aggregation primitives
    pub use crate::aggregate::{
        FrequencyTable, GeoPoint, count_by_value, distinct_sorted, extract_coordinates,
        extract_numeric, extract_speeds, extract_valid, ranked, search_substring, top_n,
    };

    // Registry and dispatch
    pub use crate::dispatch::Dispatcher;
    pub use crate::registry::{CommandRegistry, CommandRegistryBuilder};

    // Records
    pub use crate::values::record::{FieldKey, Record, RecordBuilder, RecordExt, ShipField};
    pub use crate::values::store::RecordStore;
    pub use crate::values::ScalarValue;

    // Collaborators
    pub use crate::config::SessionConfig;
    pub use crate::loader::{DataFormat, load_records};
    pub use crate::render::{HistogramPlot, PlotRenderer, ScatterPlot, svg::SvgRenderer};
    pub use crate::session::{Session, SessionEnd, WELCOME_MESSAGE};
    pub use crate::session::io::{ScriptedInteraction, SessionIO, StdinInteraction};
}

// Internal imports for use within the crate
#[allow(unused_imports)]
pub(crate) mod imports {
    pub use crate::prelude::*;

    pub use crate::commands::traits::{Command, Descriptor, Executable};
    pub use crate::registry::{DEFAULT_NAME_POLICY, NamePolicy};
    pub use crate::values::helpers::*;

    // Result and error handling
    pub type Result<T> = anyhow::Result<T>;
    pub use anyhow::Context as _;

    // File I/O
    pub use std::io::Write;
    pub use std::path::{Path, PathBuf};

    // Collections
    pub use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

    // Async
    pub use std::sync::Arc;
    pub use tokio::sync::Mutex;

    // Lazy initialization
    pub use std::sync::LazyLock;
}
