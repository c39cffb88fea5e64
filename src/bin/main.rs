extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate combobox;
extern crate shlex;

use std::env;
use std::io::{BufWriter, Write};

use clap::Parser;
use color_eyre::eyre::Result;
use combobox::prelude::*;

fn main() {
    env_logger::builder().format_timestamp_nanos().init();

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // if downstream pipe is closed, exit silently
            if let Some(io_err) = err.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::BrokenPipe
            {
                std::process::exit(0)
            }
            eprintln!("combobox: {err:?}");
            std::process::exit(2)
        }
    }
}

fn parse_args() -> ComboboxOptions {
    let mut args = Vec::new();

    args.push(env::args().next().unwrap_or_else(|| String::from("combobox")));
    args.extend(
        env::var("COMBOBOX_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    args.extend(env::args().skip(1));

    ComboboxOptions::parse_from(args).build()
}

fn real_main() -> Result<i32> {
    let opts = parse_args();
    debug!("options: {opts:?}");

    //------------------------------------------------------------------------------
    // filter mode
    if let Some(query) = &opts.filter {
        return filter_mode(query, opts.print_query);
    }

    //------------------------------------------------------------------------------
    let print_query = opts.print_query;
    let output = Session::run_with(opts)?;
    if output.is_abort {
        return Ok(output.exit_code());
    }

    let mut stdout = BufWriter::new(std::io::stdout().lock());
    if print_query {
        writeln!(stdout, "{}", output.query)?;
    }
    if let Some(item) = &output.selected_item {
        writeln!(stdout, "{}", item_to_string(Some(item)))?;
    }
    stdout.flush()?;

    Ok(output.exit_code())
}

/// Prints the names matching `query`, best first
fn filter_mode(query: &str, print_query: bool) -> Result<i32> {
    let mut stdout = BufWriter::new(std::io::stdout().lock());
    if print_query {
        writeln!(stdout, "{query}")?;
    }
    let matched = filter(&ITEMS, query);
    for item in &matched {
        writeln!(stdout, "{}", item.name)?;
    }
    stdout.flush()?;
    Ok(if matched.is_empty() { 1 } else { 0 })
}
