mod ai;
mod app;
mod banner;
mod cli;
mod commands;
mod config;
mod deck;
mod questionnaire;
mod render;
mod session;
mod theme;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
