mod book;
mod browse;
mod leads;
mod paths;
mod quote;
mod window;

use clap::{Parser, Subcommand};

use crate::{
    cli::{book::BookArgs, browse::BrowseArgs, leads::LeadsArgs, quote::QuoteArgs},
    prelude::*,
    tables::build_locations_table,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the bikes up for rent.
    #[clap(name = "browse")]
    Browse(BrowseArgs),

    /// Price a rental without booking it.
    #[clap(name = "quote")]
    Quote(Box<QuoteArgs>),

    /// Record a booking intent and prepare the WhatsApp booking request.
    #[clap(name = "book")]
    Book(Box<BookArgs>),

    /// Show the recorded booking intents, newest first.
    #[clap(name = "leads")]
    Leads(LeadsArgs),

    /// List the pickup locations.
    #[clap(name = "locations")]
    Locations,
}

impl Command {
    pub fn run(self) -> Result {
        match self {
            Self::Browse(args) => args.run(),
            Self::Quote(args) => args.run(),
            Self::Book(args) => args.run(),
            Self::Leads(args) => args.run(),
            Self::Locations => {
                println!("{}", build_locations_table());
                Ok(())
            }
        }
    }
}
