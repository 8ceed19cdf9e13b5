use anyhow::Result;
use dioxus::logger;
use dioxus::logger::tracing::Level;

fn main() -> Result<()> {
    // Self-check rows and navigation events land on this subscriber
    // (browser console on the web target).
    logger::init(Level::INFO)?;

    dioxus::launch(olaat::site::App);

    Ok(())
}
