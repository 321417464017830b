use anyhow::Result;
use mimalloc::MiMalloc;

mod gate;
mod menu;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn setup_logger(verbosity: usize) {
    let level = match verbosity {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Error,
        2 => log::LevelFilter::Warn,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new().filter_level(level).init();
}

fn main() -> Result<()> {
    let args: menu::SniffGate = argp::parse_args_or_exit(argp::DEFAULT);
    setup_logger(args.verbose);

    match args.nested {
        menu::Commands::Identify(options) => gate::identify_file(&options.input),
        menu::Commands::Check(options) => gate::check_file(&options.input, &options.allow),
        menu::Commands::Copy(options) => gate::copy_file(&options.input, &options.output, &options.allow),
    }
}
