//! Command-line argument parsing
use fpscan::{ScanConfig, StopMode};
use structopt::StructOpt;

/// Searches 8-bit products for disagreeing fixed-point roundings.
#[derive(Debug, StructOpt)]
#[structopt(name = "fpscan")]
pub struct Opt {
    /// Report every flagged pair instead of stopping at the first one whose
    /// product has bit 7 set.
    #[structopt(short = "a", long = "all")]
    pub all: bool,

    /// Search on all CPU cores. The output is unchanged.
    #[structopt(short = "j", long = "parallel")]
    pub parallel: bool,

    /// Print a summary line to stderr when done.
    #[structopt(short = "s", long = "summary")]
    pub summary: bool,

    /// Check the shift-based 8-bit product against exact rounding instead
    /// of scanning.
    #[structopt(long = "verify")]
    pub verify: bool,
}

impl Opt {
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            stop: if self.all {
                StopMode::Exhaustive
            } else {
                StopMode::FirstRoundBit
            },
            parallel: self.parallel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opt = Opt::from_iter(vec!["fpscan"]);
        assert_eq!(opt.scan_config(), ScanConfig::default());
        assert!(!opt.summary && !opt.verify);
    }

    #[test]
    fn flags() {
        let opt = Opt::from_iter(vec!["fpscan", "-a", "--parallel", "-s"]);
        assert_eq!(
            opt.scan_config(),
            ScanConfig {
                stop: StopMode::Exhaustive,
                parallel: true,
            }
        );
        assert!(opt.summary);
    }
}
