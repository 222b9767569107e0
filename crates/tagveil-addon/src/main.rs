//! Tagveil maintenance binary.
//!
//! A headless companion to the host integration: inspects or repairs the
//! hidden-tag config without the host running. Operates on the same file the
//! add-on persists to, through the same store.
//!
//! ```text
//! tagveil list            print the hidden tag paths
//! tagveil hide <path>     add a path to the hidden set
//! tagveil unhide <path>   remove a path from the hidden set
//! tagveil clear           unhide everything
//! ```

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use tagveil_addon::application::hidden_store::HiddenTagStore;
use tagveil_addon::infrastructure::storage::config::FileConfigStore;
use tagveil_core::TagPath;

const USAGE: &str = "usage: tagveil <list | hide <path> | unhide <path> | clear>";

fn main() -> anyhow::Result<()> {
    // Structured logging to stderr; level overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let backend = FileConfigStore::new()?;
    info!(config = %backend.path().display(), "using config file");
    let mut store = HiddenTagStore::load(Arc::new(backend));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["list"] => {
            for path in store.hidden_paths() {
                println!("{path}");
            }
        }
        ["hide", path] => {
            if store.hide(TagPath::new(*path)) {
                println!("hidden: {path}");
            } else {
                println!("already hidden (or empty): {path}");
            }
        }
        ["unhide", path] => {
            if store.unhide(&TagPath::new(*path)) {
                println!("unhidden: {path}");
            } else {
                println!("not in the hidden set: {path}");
            }
        }
        ["clear"] => {
            if store.unhide_all() {
                println!("hidden set cleared");
            } else {
                println!("hidden set was already empty");
            }
        }
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}
