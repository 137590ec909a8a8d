use std::io;

pub use point::Point;
pub use scatter::{
    Scatter, ScatterError, SCATTER_DEFAULT_COUNT, SCATTER_DEFAULT_HI, SCATTER_DEFAULT_LO,
};

mod point;
mod scatter;

pub fn fixed(count: usize) -> anyhow::Result<()> {
    let points = scatter::fixed(count);
    log::info!("emitting {} fixed points", points.len());
    emit(&points, &mut io::stdout().lock())?;
    Ok(())
}

pub fn random(settings: &Scatter) -> anyhow::Result<()> {
    let points = settings.run(&mut rand::thread_rng())?;
    log::info!(
        "emitting {} points drawn from [{}, {}]",
        points.len(),
        settings.lo,
        settings.hi
    );
    emit(&points, &mut io::stdout().lock())?;
    Ok(())
}

fn emit<W: io::Write>(points: &[Point], w: &mut W) -> io::Result<()> {
    for point in points {
        writeln!(w, "{}", point)?;
    }
    Ok(())
}
