mod repl;
mod toolkit;

use anyhow::{Context, Result};
use calculator::history::{History, DEFAULT_CAPACITY};
use calculator::interpreter::{convert, evaluate, explain, tokens_to_string};
use calculator::numbers;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::{debug, warn};
use std::io;
use std::path::PathBuf;

/// Evaluates arithmetic expressions
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    #[clap(subcommand)]
    command: Option<Command>,

    /// File to keep the history in [default: ~/.calculator/history.txt]
    #[clap(long, global = true, value_name = "PATH")]
    history_file: Option<PathBuf>,

    /// Maximum number of history entries to keep
    #[clap(long, global = true, default_value_t = DEFAULT_CAPACITY)]
    history_capacity: usize,

    /// Neither read nor write the history file
    #[clap(long, global = true)]
    no_history: bool,

    #[clap(flatten)]
    verbose: Verbosity<WarnLevel>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one expression, e.g. `eval "2 * (3 + 4)"`
    Eval {
        /// The expression to evaluate; several words are joined with spaces
        #[clap(required = true, allow_hyphen_values = true)]
        expression: Vec<String>,

        /// Also print the expression in postfix order
        #[clap(long)]
        postfix: bool,

        /// Also print the operator tree of the expression
        #[clap(long)]
        tree: bool,
    },
    /// Read expressions line by line (the default)
    Repl,
    /// Print past calculations, newest first
    History {
        /// Remove every entry instead
        #[clap(long)]
        clear: bool,
    },
    /// Greatest common divisor of two integers
    Gcd {
        #[clap(allow_hyphen_values = true)]
        a: i64,
        #[clap(allow_hyphen_values = true)]
        b: i64,
    },
    /// Least common multiple of two integers
    Lcm {
        #[clap(allow_hyphen_values = true)]
        a: i64,
        #[clap(allow_hyphen_values = true)]
        b: i64,
    },
    /// Exact factorial of a non-negative integer
    Fact { n: u32 },
    /// Primes up to and including a bound
    Primes { n: usize },
    /// Mean of comma separated numbers
    Mean { values: String },
    /// Population and sample variance of comma separated numbers
    Var { values: String },
    /// Multiply a 2x3 demo matrix by a 3x2 demo matrix
    Matmul,
}

/// The history plus the file it is persisted in, if any.
struct HistoryStore {
    history: History,
    path: Option<PathBuf>,
}

impl HistoryStore {
    fn open(args: &Arguments) -> HistoryStore {
        let mut history = History::new(args.history_capacity);
        if args.no_history {
            return HistoryStore {
                history,
                path: None,
            };
        }

        let path = match &args.history_file {
            Some(path) => Some(path.clone()),
            None => History::default_path()
                .map_err(|error| warn!("History disabled: {:#}", error))
                .ok(),
        };
        if let Some(path) = &path {
            if let Err(error) = history.load_from_file(path) {
                warn!("Starting with an empty history: {:#}", error);
            }
        }
        HistoryStore { history, path }
    }

    fn save(&self) -> Result<()> {
        match &self.path {
            Some(path) => self.history.save_to_file(path),
            None => Ok(()),
        }
    }
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    debug!("{:?}", args);

    let mut store = HistoryStore::open(&args);

    match args.command.unwrap_or(Command::Repl) {
        Command::Eval {
            expression,
            postfix,
            tree,
        } => {
            let expression = expression.join(" ");
            if postfix {
                let postfix_tokens = convert(&expression)
                    .with_context(|| format!("could not parse '{}'", expression))?;
                println!("{}", tokens_to_string(&postfix_tokens)?);
            }
            if tree {
                let tree = explain(&expression)
                    .with_context(|| format!("could not parse '{}'", expression))?;
                print!("{}", tree);
            }
            let value = evaluate(&expression)
                .with_context(|| format!("could not evaluate '{}'", expression))?;
            println!("{}", value);

            store.history.record(&expression, value);
            store.save()?;
        }
        Command::Repl => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            repl::run(stdin.lock(), &mut stdout, &mut store.history)?;
            store.save()?;
        }
        Command::History { clear } => {
            if clear {
                store.history.clear();
                store.save()?;
            } else {
                for entry in store.history.all() {
                    println!("{}", entry);
                }
            }
        }
        Command::Gcd { a, b } => println!("{}", numbers::gcd(a, b)),
        Command::Lcm { a, b } => println!("{}", toolkit::lcm(a, b)?),
        Command::Fact { n } => println!("{}", numbers::factorial(n)),
        Command::Primes { n } => println!("{}", toolkit::primes(n)?),
        Command::Mean { values } => println!("{}", toolkit::mean(&values)?),
        Command::Var { values } => println!("{}", toolkit::variance(&values)?),
        Command::Matmul => print!("{}", toolkit::matmul()?),
    }

    Ok(())
}
