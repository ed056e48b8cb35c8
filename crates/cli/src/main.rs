//! 8-bit processor emulator CLI.
//!
//! This binary is the external driver for the emulator. It performs:
//! 1. **Setup:** Load configuration, read the memory image and reset the processor.
//! 2. **Run:** Drive the simulator until halt, printing the register state after every step.
//! 3. **Report:** Print a statistics summary and exit with a status describing the outcome.
//!
//! Exit status: 0 on halt, 1 on load failure or illegal instruction, 2 when the
//! step budget ran out first.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use emu8_core::config::Config;
use emu8_core::core::Cpu;
use emu8_core::sim::loader::{self, ImageLayout};
use emu8_core::{EmuError, RunOutcome, Simulator};

const EXIT_ERROR: i32 = 1;
const EXIT_STEP_LIMIT: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "emu8",
    author,
    version,
    about = "Emulator for a small 8-bit processor",
    long_about = "Load a 64 KiB memory image and execute it until the processor halts.\n\nExamples:\n  emu8 run program.bin\n  emu8 run --layout flat --quiet program.bin\n  emu8 run --step --json program.bin"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a memory image until the processor halts.
    Run(RunArgs),
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Memory image to execute.
    image: PathBuf,

    /// How the image maps onto memory (overrides the configuration file).
    #[arg(long, value_enum)]
    layout: Option<LayoutArg>,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every executed instruction.
    #[arg(long)]
    trace: bool,

    /// Wait for Enter after every step.
    #[arg(long)]
    step: bool,

    /// Do not print the register state or the statistics.
    #[arg(short, long)]
    quiet: bool,

    /// Print the register state as one JSON object per step.
    #[arg(long)]
    json: bool,

    /// Stop after this many instructions (overrides the configuration file).
    #[arg(long)]
    max_steps: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutArg {
    /// Copy image bytes 0x8000.. to memory 0x8000..
    ProgramHalf,
    /// Copy the whole image to address 0.
    Flat,
}

impl From<LayoutArg> for ImageLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::ProgramHalf => Self::ProgramHalf,
            LayoutArg::Flat => Self::Flat,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            init_logging(args.trace);
            process::exit(cmd_run(&args));
        }
    }
}

/// Installs the `tracing` subscriber; `RUST_LOG` wins when set.
fn init_logging(trace: bool) {
    let default = if trace { "emu8_core=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Loads the image and runs it, returning the process exit status.
fn cmd_run(args: &RunArgs) -> i32 {
    let mut config = match &args.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => return fail(&e),
        },
        None => Config::default(),
    };
    if let Some(layout) = args.layout {
        config.image.layout = layout.into();
    }
    if let Some(max) = args.max_steps {
        config.general.max_steps = Some(max);
    }
    config.general.trace_instructions |= args.trace;

    let mut cpu = Cpu::new();
    cpu.reset();
    let loaded = loader::load_binary(&args.image)
        .and_then(|image| loader::load_image(&mut cpu, &image, config.image.layout));
    if let Err(e) = loaded {
        return fail(&e);
    }

    let mut sim = Simulator::from_config(cpu, &config);

    let outcome = sim.run_with(config.general.max_steps, |sim| {
        report(args, sim);
        if args.step {
            if sim.cpu.is_halted() {
                println!("[*] Halted. Press Enter to exit.");
            }
            pause();
        }
    });
    let status = match outcome {
        Ok(RunOutcome::Halted { .. }) => 0,
        Ok(RunOutcome::StepLimit { steps }) => {
            eprintln!("[!] Step limit of {steps} instructions reached");
            EXIT_STEP_LIMIT
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            if !args.quiet {
                sim.cpu.dump_state();
            }
            EXIT_ERROR
        }
    };

    if !args.quiet {
        sim.stats.print();
    }
    let _ = io::stdout().flush();
    status
}

/// Prints the state after one step.
fn report(args: &RunArgs, sim: &Simulator) {
    if args.quiet {
        return;
    }
    let snapshot = sim.cpu.snapshot();
    if args.json {
        match serde_json::to_string(&snapshot) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::error!(error = %e, "snapshot serialisation failed"),
        }
    } else {
        println!("{snapshot}\n");
    }
}

/// Blocks until a line arrives on stdin.
fn pause() {
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
}

fn fail(e: &EmuError) -> i32 {
    eprintln!("[!] FATAL: {e}");
    EXIT_ERROR
}
