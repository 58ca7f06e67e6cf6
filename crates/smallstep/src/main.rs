use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use smallstep::{Environment, Expr, Machine, DEFAULT_MAX_DEPTH};

#[derive(Parser)]
#[command(name = "smallstep")]
#[command(about = "Reduce a sample expression one step at a time")]
#[command(version)]
struct Cli {
    /// Sample expression to run
    #[arg(short, long, value_enum, default_value_t = Sample::Arithmetic)]
    sample: Sample,

    /// Maximum nesting depth evaluation may descend into
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Only print the final value
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Sample {
    /// 1 * 2 + 3 * 4
    Arithmetic,
    /// 5
    Literal,
    /// false
    Boolean,
    /// 1 + true
    Mismatch,
}

impl Sample {
    fn expression(self) -> Expr {
        match self {
            Sample::Arithmetic => Expr::add(Expr::multiply(1, 2), Expr::multiply(3, 4)),
            Sample::Literal => Expr::number(5),
            Sample::Boolean => Expr::boolean(false),
            Sample::Mismatch => Expr::add(1, true),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let env = Environment::with_max_depth(cli.max_depth);
    let mut machine = Machine::new(cli.sample.expression());
    if cli.quiet {
        machine.trace(env).context("reduction failed")?;
        println!("{}", machine.expression());
    } else {
        machine.run(env).context("reduction failed")?;
    }

    Ok(())
}
