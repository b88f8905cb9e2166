//! # Cart Panel Demo
//!
//! Loads a cart, replays panel events in order, and prints the panel.
//!
//! ## Usage
//! ```bash
//! # Built-in sample cart, panel opened
//! cargo run -p basket-panel
//!
//! # Apply the code, bump an item, drop another
//! cargo run -p basket-panel -- --code DISCOUNT --inc 1 --remove 2
//!
//! # Load a snapshot and print the view as JSON
//! cargo run -p basket-panel -- --cart ./cart.json --json
//! ```
//!
//! Snapshot format: `{ "items": [ { "id", "title", "price", "quantity",
//! "discountPercentage", "thumbnail" } ], "discount": false }`.

use std::env;
use std::fs;

use basket_core::{DiscountRate, LineItem, Money};
use basket_panel::{init_tracing, Cart, CartPanel, CartStore, PanelConfig, PanelError, ScrollState};
use tracing::{error, info};

/// One panel event from the command line.
#[derive(Debug, PartialEq, Eq)]
enum Event {
    Code(String),
    Increment(String),
    Decrement(String),
    Remove(String),
}

/// Parsed command line.
#[derive(Debug, Default)]
struct Options {
    cart_path: Option<String>,
    as_json: bool,
    help: bool,
    events: Vec<Event>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            print_usage();
            std::process::exit(2);
        }
    };

    if options.help {
        print_usage();
        return Ok(());
    }

    let store = match &options.cart_path {
        Some(path) => {
            info!(path = %path, "Loading cart snapshot");
            let json = fs::read_to_string(path).map_err(|e| {
                error!(path = %path, error = %e, "Cart snapshot read failed");
                PanelError::from(e)
            })?;
            CartStore::from_json(&json)?
        }
        None => CartStore::from_cart(sample_cart()?),
    };

    let config = PanelConfig::from_env();
    let scroll = ScrollState::new();
    let mut panel = CartPanel::new(&store, &scroll);

    let mut view = panel.open();
    for event in options.events {
        view = match event {
            Event::Code(code) => panel.submit_discount(&code),
            Event::Increment(id) => panel.increment(&id)?,
            Event::Decrement(id) => panel.decrement(&id)?,
            Event::Remove(id) => panel.remove(&id)?,
        };
    }

    if options.as_json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", view.to_text(&config));
    }

    Ok(())
}

/// Reads flags in order. A value-taking flag never swallows the next flag.
fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--cart" => options.cart_path = Some(flag_value(flag, &mut iter)?),
            "--code" => options.events.push(Event::Code(flag_value(flag, &mut iter)?)),
            "--inc" => options.events.push(Event::Increment(flag_value(flag, &mut iter)?)),
            "--dec" => options.events.push(Event::Decrement(flag_value(flag, &mut iter)?)),
            "--remove" => options.events.push(Event::Remove(flag_value(flag, &mut iter)?)),
            "--json" => options.as_json = true,
            "--help" | "-h" => options.help = true,
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(options)
}

fn flag_value<'a>(flag: &str, iter: &mut impl Iterator<Item = &'a String>) -> Result<String, String> {
    match iter.next() {
        Some(value) if !value.starts_with("--") => Ok(value.clone()),
        _ => Err(format!("{} needs a value", flag)),
    }
}

fn sample_cart() -> Result<Cart, PanelError> {
    Ok(Cart::from_items(vec![
        LineItem::new("1", "Rattan Lounge Chair", Money::from_major_minor(10, 0), 2)
            .with_discount(DiscountRate::from_bps(1000))
            .with_thumbnail("/images/rattan-chair.jpg"),
        LineItem::new("2", "Oak Wall Shelf", Money::from_major_minor(25, 50), 1)
            .with_discount(DiscountRate::from_bps(1250))
            .with_thumbnail("/images/oak-shelf.jpg"),
        LineItem::new("3", "Linen Cushion", Money::from_major_minor(12, 99), 3)
            .with_discount(DiscountRate::from_bps(1296))
            .with_thumbnail("/images/linen-cushion.jpg"),
    ])?)
}

fn print_usage() {
    eprintln!(
        "Usage: basket-panel [--cart <file.json>] [--code <CODE>] [--inc <id>] \
         [--dec <id>] [--remove <id>] [--json]"
    );
}
