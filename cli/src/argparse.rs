use clap::Parser;

pub fn get_args() -> CliOpts {
    CliOpts::parse()
}

#[derive(Parser, Debug)]
#[clap(version = clap::crate_version!())]
pub struct CliOpts {
    #[clap(short, long, parse(from_occurrences))]
    pub verbose: u8,
    /// draw coordinates at random instead of pinning every point to the origin
    #[clap(short, long)]
    pub random: bool,
    /// how many points to emit
    #[clap(long, default_value_t = pointxy::SCATTER_DEFAULT_COUNT)]
    pub count: usize,
    /// lower bound for randomly drawn coordinates
    #[clap(long, default_value_t = pointxy::SCATTER_DEFAULT_LO, allow_hyphen_values = true)]
    pub lo: f32,
    /// upper bound for randomly drawn coordinates
    #[clap(long, default_value_t = pointxy::SCATTER_DEFAULT_HI, allow_hyphen_values = true)]
    pub hi: f32,
}
