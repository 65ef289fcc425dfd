//! Prints the style sheet of the documentation site.
//!
//! `RUST_LOG=debug` shows every injected block.

use gadjet::{prelude::*, site};

fn main() {
    env_logger::init();

    let mut registry = Registry::with_sheet(StyleSheet::new());
    if let Err(err) = site::define_components(&mut registry) {
        log::error!("{err}");
        std::process::exit(1);
    }

    let sheet = registry.sheet();
    log::info!("{} blocks, {} rules", sheet.len(), sheet.rule_count());
    println!("{}", sheet.to_css());
}
