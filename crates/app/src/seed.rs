//! Run seed selection: `--seed` beats the config file, which beats the clock.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Config(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Config(seed) | Self::Generated(seed) => seed,
        }
    }
}

static CALLS: AtomicU64 = AtomicU64::new(0);

/// Clock, pid and a call counter folded through a splitmix finalizer.
pub fn generate_runtime_seed() -> u64 {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| d.as_nanos());
    let folded = (nanos as u64) ^ ((nanos >> 64) as u64);
    let pid = u64::from(process::id()).rotate_left(17);
    let call = CALLS.fetch_add(1, Ordering::Relaxed).rotate_left(7);
    splitmix(folded ^ pid ^ call)
}

/// Picks the run seed. `args[0]` is the program name and is skipped; both
/// `--seed N` and `--seed=N` are accepted, at most once.
pub fn resolve_seed(
    args: &[String],
    config_seed: Option<u64>,
    generated_seed: u64,
) -> Result<SeedChoice> {
    let mut cli_seed = None;
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        let raw = if arg == "--seed" {
            let Some(value) = rest.next() else {
                bail!("missing value for --seed");
            };
            value.as_str()
        } else if let Some(value) = arg.strip_prefix("--seed=") {
            value
        } else {
            continue;
        };
        if cli_seed.is_some() {
            bail!("seed provided more than once");
        }
        let seed = raw.parse::<u64>().with_context(|| format!("seed '{raw}' must be a number"))?;
        cli_seed = Some(seed);
    }

    Ok(match (cli_seed, config_seed) {
        (Some(seed), _) => SeedChoice::Cli(seed),
        (None, Some(seed)) => SeedChoice::Config(seed),
        (None, None) => SeedChoice::Generated(generated_seed),
    })
}

fn splitmix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
