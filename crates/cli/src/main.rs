//! Reference-model CLI.
//!
//! Runs the RV32I golden reference model standalone over a hex instruction
//! image: load and pad the image, execute to the terminating zero word,
//! then print the retired-step count, final PC, register dump, and any UART
//! output. Lockstep verification against a hardware design is a library
//! concern (`Simulator::run_against`); this binary exists for inspecting
//! what the model itself commits, instruction by instruction.

use clap::Parser;
use std::fs;
use std::process;
use tracing_subscriber::EnvFilter;

use rv32ref_core::Config;
use rv32ref_core::Simulator;
use rv32ref_core::sim::image::ProgramImage;

#[derive(Parser, Debug)]
#[command(
    name = "rv32ref",
    version,
    about = "Golden reference model for a single-cycle RV32I (+UART) design",
    long_about = "Execute a hex instruction image (one 32-bit word per line, stored \
                  byte-swapped) on the reference model and dump the final architectural \
                  state.\n\nExamples:\n  rv32ref Instructions.hex\n  rv32ref --trace \
                  --mem-size 2048 Instructions.hex\n  rv32ref --config run.json Instructions.hex"
)]
struct Cli {
    /// Hex instruction image, one word per line.
    image: String,

    /// JSON configuration file (overridden by the flags below).
    #[arg(long)]
    config: Option<String>,

    /// Memory capacity in bytes.
    #[arg(long)]
    mem_size: Option<usize>,

    /// Per-instruction trace output (sets the default log filter to debug).
    #[arg(long)]
    trace: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut config = match cli.config.as_deref() {
        Some(path) => load_config(path),
        None => Config::default(),
    };
    if let Some(size) = cli.mem_size {
        config.memory.size = size;
    }
    if cli.trace {
        config.general.trace = true;
    }

    init_tracing(config.general.trace);

    let text = fs::read_to_string(&cli.image).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: could not read image '{}': {}", cli.image, e);
        process::exit(1);
    });

    let depth = config.memory.depth_words();
    let image = ProgramImage::from_hex_lines(text.lines(), depth).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: bad instruction image '{}': {}", cli.image, e);
        process::exit(1);
    });

    println!("[*] Image: {} ({} word slots)", cli.image, image.len());
    println!("[*] Memory: {} bytes", config.memory.size);

    let mut sim = Simulator::new(image, &config);
    match sim.run() {
        Ok(steps) => {
            println!("[*] Halted after {} instructions, pc={:#010x}", steps, sim.cpu.pc);
        }
        Err(e) => {
            eprintln!("[!] FATAL: {}", e);
            process::exit(1);
        }
    }

    println!("***** REGISTERS *****");
    sim.cpu.regs.dump();

    let output = sim.cpu.uart.take_output();
    if !output.is_empty() {
        println!("***** UART OUTPUT *****");
        println!("{}", String::from_utf8_lossy(&output));
    }
}

/// Loads a JSON configuration file, exiting on any error.
fn load_config(path: &str) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: could not read config '{}': {}", path, e);
        process::exit(1);
    });
    Config::from_json(&text).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: bad config '{}': {}", path, e);
        process::exit(1);
    })
}

/// Installs the tracing subscriber; `RUST_LOG` overrides the default level.
fn init_tracing(trace: bool) {
    let default = if trace { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
