#![allow(non_snake_case)]

mod client;
mod config;
mod model;

use dioxus_logger::tracing::Level;

fn main() {
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    dioxus::launch(client::App);
}
