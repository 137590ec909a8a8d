use argparse::CliOpts;

mod argparse;

fn main() -> anyhow::Result<()> {
    color_backtrace::install();
    let args = argparse::get_args();
    setup_logger(args.verbose);
    log::trace!("Args: {:?}", args);

    run(&args).map_err(|e| {
        log::error!("{}", e);
        e.chain()
            .skip(1)
            .for_each(|cause| log::error!("because: {}", cause));
        anyhow::anyhow!("unrecoverable pointxy failure")
    })
}

fn run(args: &CliOpts) -> anyhow::Result<()> {
    if args.random {
        let settings = pointxy::Scatter {
            count: args.count,
            lo: args.lo,
            hi: args.hi,
        };
        pointxy::random(&settings)
    } else {
        pointxy::fixed(args.count)
    }
}

pub fn setup_logger(level: u8) {
    let mut builder = pretty_env_logger::formatted_timed_builder();

    let log_level = match level {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    builder.filter_level(log_level);
    builder.format_timestamp_millis();
    builder.init();
}
