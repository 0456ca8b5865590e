use std::process;
use std::sync::mpsc;

use anyhow::Error;
use clap::Arg;
use clap::Command;
use urlfetch::HttpTransport;
use urlfetch_core::ExecutionContext;
use urlfetch_core::Fetcher;

fn main() -> Result<(), Error> {
    let matches = Command::new("urlfetch")
        .about("fetch urls and print their bodies")
        .arg(
            Arg::new("URL")
                .help("the url(s) to fetch")
                .required(true)
                .num_args(1..),
        )
        .get_matches();

    let urls: Vec<String> = matches
        .get_many::<String>("URL")
        .unwrap()
        .cloned()
        .collect();

    let context = ExecutionContext::new()?;
    let fetcher = Fetcher::new(HttpTransport::new()?, context.handle());

    let (tx, rx) = mpsc::channel();
    for url in &urls {
        let tx = tx.clone();
        let label = url.clone();
        fetcher.fetch(url, move |outcome| {
            let _ = tx.send((label, outcome));
        });
    }
    drop(tx);

    let mut failed = false;
    for (url, outcome) in rx {
        match outcome {
            Ok(body) => print!("{}", body),
            Err(category) => {
                eprintln!("{}: {}", url, category);
                failed = true;
            }
        }
    }

    if failed {
        process::exit(2);
    }

    Ok(())
}
