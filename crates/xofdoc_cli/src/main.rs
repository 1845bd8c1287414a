#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "xofdoc", about = "DirectX .x file inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Header fields and record statistics.
	Info(cmd::info::Args),
	/// Generic record tree dump.
	Tree(cmd::tree::Args),
	/// Decoded mesh summary.
	Scene(cmd::scene::Args),
	/// Flattened render buffers.
	Buffers(cmd::buffers::Args),
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> xofdoc::xof::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Tree(args) => cmd::tree::run(args),
		Commands::Scene(args) => cmd::scene::run(args),
		Commands::Buffers(args) => cmd::buffers::run(args),
	}
}
