use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use gill::render::{grid_with_cursor, stack_dump};
use gill::{Error, Fish, InputQueue, Options, Step};

#[derive(Parser, Debug)]
#[command(name = "gill")]
#[command(about = "Run a ><> program")]
struct Args {
    /// Path to the program
    #[arg(required_unless_present = "code", conflicts_with = "code")]
    script: Option<PathBuf>,

    /// Program text given inline instead of a file
    #[arg(short, long)]
    code: Option<String>,

    /// Push the character codes of a string onto the initial stack
    #[arg(short, long = "string")]
    strings: Vec<String>,

    /// Push numbers onto the initial stack
    #[arg(short = 'v', long = "value", num_args = 1.., allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Reverse stack splits the way fishlanguage.com does
    #[arg(long)]
    compat: bool,

    /// Seed for the `x` instruction
    #[arg(long)]
    seed: Option<u64>,

    /// Seconds to sleep between instructions
    #[arg(short, long)]
    tick: Option<f64>,

    /// Stop after this many instructions (0 runs forever)
    #[arg(long, default_value = "0")]
    limit: u64,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Configuration errors exit with 2, faults during a run with 1.
fn exit_code(e: &Error) -> i32 {
    if e.is_runtime() {
        1
    } else {
        2
    }
}

fn main() {
    init_logging();
    let args = Args::parse();

    let src = match (&args.code, &args.script) {
        (Some(code), _) => code.clone(),
        (None, Some(path)) => match fs::read_to_string(path) {
            Ok(src) => src,
            Err(e) => {
                error!("cannot read {}: {}", path.display(), e);
                process::exit(2);
            }
        },
        (None, None) => unreachable!("clap requires a script or --code"),
    };

    let mut initial: Vec<f64> = args
        .strings
        .iter()
        .flat_map(|s| s.chars().map(|c| c as u32 as f64))
        .collect();
    initial.extend(&args.values);

    let options = Options { compatibility: args.compat, seed: args.seed };
    let mut fish = match Fish::load(&src, initial, options) {
        Ok(fish) => fish,
        Err(e) => {
            error!("cannot load program: {}", e);
            process::exit(exit_code(&e));
        }
    };

    let tick = args.tick.filter(|t| *t > 0.0).map(Duration::from_secs_f64);
    let mut input = InputQueue::spawn(io::stdin());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut cycles: u64 = 0;
    loop {
        if args.limit > 0 && cycles >= args.limit {
            warn!(limit = args.limit, "instruction limit reached");
            break;
        }
        match fish.step(&mut input, &mut out) {
            Ok(Step::Halted) => break,
            Ok(Step::Running) => {}
            Err(e) => {
                let _ = out.flush();
                error!("{}", e);
                let (x, y) = fish.position();
                eprintln!();
                eprint!("{}", grid_with_cursor(fish.grid(), x, y));
                eprintln!("{}", stack_dump(fish.stack()));
                eprintln!("something smells fishy...");
                process::exit(exit_code(&e));
            }
        }
        cycles += 1;
        if let Some(tick) = tick {
            let _ = out.flush();
            thread::sleep(tick);
        }
    }
    let _ = out.flush();
}
