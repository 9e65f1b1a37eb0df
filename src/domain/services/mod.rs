//! Domain Services
//!
//! - `catalog` - resolves staged connector files
//! - `fan_out` - applies one action across every target host
//! - `remote_script` - shell snippets sent to hosts

mod catalog;
mod fan_out;
mod remote_script;

pub use catalog::{CatalogResolution, ConnectorCatalog, CONNECTOR_NAME_KEY};
pub use fan_out::{ExecutionMode, FanOutDeployer};
pub use remote_script::{
    mkdir_command, no_such_file_message, remove_script, shell_quote, shell_word,
};
