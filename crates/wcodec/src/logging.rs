use log::LevelFilter;
use stderrlog::Timestamp;

/// The filter levels `-v` steps through, quietest first.
const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Logging setup arg group.
#[derive(clap::Args, Debug, Default)]
pub struct LogArgs {
    /// Silence log messages.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log more than the command's default; repeat for more (-v, -vv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Enable timestamped logging.
    #[arg(long, global = true)]
    pub ts: bool,
}

impl LogArgs {
    /// The effective filter; each `-v` raises `default` by one level.
    pub fn level_filter(
        &self,
        default: LevelFilter,
    ) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        let base = LEVELS.iter().position(|l| *l == default).unwrap_or(0);
        let idx = (base + self.verbose as usize).min(LEVELS.len() - 1);
        LEVELS[idx]
    }

    /// Install the stderr logger.
    pub fn setup_logging(
        &self,
        default: LevelFilter,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .verbosity(self.level_filter(default))
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}
