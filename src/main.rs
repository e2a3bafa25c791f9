mod adapters;
mod engine;
mod error;
mod models;

use std::io::Write;

use log::error;

use engine::runner;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn main() {
    init_logging();

    let args = adapters::cli::parse_cli_args();

    if let Err(err) = runner::analyze_traffic(&args.input_file, args.output_file()) {
        error!("{}", err);
        std::process::exit(err.exit_code());
    }
}
