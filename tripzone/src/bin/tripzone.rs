use clap::Parser;
use tripzone::app::TripZoneApp;

fn main() {
    env_logger::init();
    let args = TripZoneApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("tripzone failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
