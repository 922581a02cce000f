use log::debug;
use std::io::{stdout, BufWriter};
use structopt::StructOpt;

mod cmdline;

fn main() {
    env_logger::init();

    let opt = cmdline::Opt::from_args();
    debug!("{:?}", opt);

    if let Err(e) = run(&opt) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(opt: &cmdline::Opt) -> Result<(), fpscan::Error> {
    if opt.verify {
        fpscan::verify()?;
        println!("ok: all {} pairs match", fpscan::probe::NUM_PAIRS);
        return Ok(());
    }

    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = fpscan::run(&opt.scan_config(), &mut out)?;

    if opt.summary {
        match summary.stopped_at {
            Some((i, j)) => eprintln!(
                "{} flagged pair(s), stopped at ({}, {})",
                summary.blocks, i, j
            ),
            None => eprintln!(
                "{} flagged pair(s), {} with bit 7 set",
                summary.blocks, summary.round_bit_blocks
            ),
        }
    }

    Ok(())
}
