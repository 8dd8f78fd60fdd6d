//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use huffcode::compression::compress::{build_table, compress};
use huffcode::compression::decompress::decompress;
use huffcode::tools::cli::{hcopts_init, Mode};

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace. The cli narrows this down.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Could not start the logger: {}", e);
    }

    let options = hcopts_init();
    info!("{} {}", options.op_mode, options.input);

    //----- Figure how what we need to do and go do it
    let result = match options.op_mode {
        Mode::Build => build_table(&options).map(|_| ()),
        Mode::Encode => compress(&options).map(|_| ()),
        Mode::Decode => decompress(&options).map(|_| ()),
    };

    match result {
        Ok(()) => info!("Done."),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
