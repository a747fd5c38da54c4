//! Interactive console for equity and advice queries.
//!
//! Card arguments are concatenated notation, e.g. `equity AsKd 9h5sJc`.

use clap::Parser;
use railbird::api::API;
use railbird::api::AdviseRequest;
use railbird::api::EquityRequest;
use std::io::Write;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Query {
    #[command(about = "Estimate hero equity against random opponents", alias = "eq")]
    Equity {
        #[arg(required = true)]
        hole: String,
        board: Option<String>,
        #[arg(short = 'n', long, default_value_t = 1)]
        opponents: usize,
        #[arg(short, long)]
        trials: Option<usize>,
    },
    #[command(about = "Recommend an action for the spot", alias = "adv")]
    Advise {
        #[arg(required = true)]
        hole: String,
        board: Option<String>,
        #[arg(short, long)]
        position: Option<String>,
        #[arg(short = 'n', long, default_value_t = 1)]
        opponents: usize,
        #[arg(long)]
        pot: Option<f64>,
        #[arg(short, long)]
        facing: Option<String>,
    },
}

fn main() {
    let api = API::new();
    loop {
        print!("> ");
        let ref mut input = String::new();
        std::io::stdout().flush().unwrap();
        if std::io::stdin().read_line(input).unwrap() == 0 {
            break;
        }
        match input.trim() {
            "quit" => break,
            "exit" => break,
            _ => match handle(&api, input) {
                Err(e) => eprintln!("{}", e),
                Ok(_) => continue,
            },
        }
    }
}

fn handle(api: &API, input: &str) -> Result<(), Box<dyn std::error::Error>> {
    match Query::try_parse_from(std::iter::once("> ").chain(input.split_whitespace()))? {
        Query::Equity {
            hole,
            board,
            opponents,
            trials,
        } => {
            let report = api.equity(&EquityRequest {
                hand: hole,
                board,
                opponents: Some(opponents),
                trials,
            })?;
            Ok(println!("{}", report))
        }
        Query::Advise {
            hole,
            board,
            position,
            opponents,
            pot,
            facing,
        } => {
            let advice = api.advise(&AdviseRequest {
                hand: hole,
                board,
                position,
                opponents: Some(opponents),
                pot,
                facing,
            })?;
            Ok(println!("{}", advice))
        }
    }
}
