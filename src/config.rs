//! Command-line arguments and the run configuration they resolve to

use crate::errors::{VizError, VizResult};
use crate::playback::{delay_for_speed, DEFAULT_SPEED};
use crate::registry::AlgorithmInput;
use clap::Parser;
use rand::Rng;

pub const DEFAULT_ALGORITHM: &str = "bubble";
pub const DEFAULT_VALUES: [i64; 8] = [38, 27, 43, 3, 9, 82, 10, 64];
pub const DEFAULT_TARGET: i64 = 43;
/// Largest input array accepted from the command line
pub const MAX_INPUT_LEN: usize = 100;
/// Random values are drawn from `1..=RANDOM_MAX`
pub const RANDOM_MAX: i64 = 99;

#[derive(Parser, Debug)]
#[command(name = "algotrace")]
#[command(author, version, about = "Step through sorting, searching, graph and pattern algorithms", long_about = None)]
pub struct Cli {
    /// Algorithm id, e.g. quick, binary or sliding-window
    pub algorithm: Option<String>,

    /// Comma-separated input values for sorting and searching
    #[arg(long, value_name = "LIST", conflicts_with = "random")]
    pub values: Option<String>,

    /// Generate N random input values instead
    #[arg(long, value_name = "N")]
    pub random: Option<usize>,

    /// Value to look for in searching algorithms
    #[arg(long, allow_hyphen_values = true)]
    pub target: Option<i64>,

    /// Playback speed from 1 (slowest) to 10
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    pub speed: u8,

    /// List every algorithm and exit
    #[arg(long)]
    pub list: bool,

    /// List algorithms whose name, description or common problems mention TEXT
    #[arg(long, value_name = "TEXT", conflicts_with = "list")]
    pub search: Option<String>,

    /// Print the step sequence as JSON instead of opening the viewer
    #[arg(long)]
    pub json: bool,
}

/// What the binary should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    List,
    Search(String),
    Json,
    Interactive,
}

/// Validated settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub algorithm: String,
    pub input: AlgorithmInput,
    pub speed: u8,
    pub mode: Mode,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            algorithm: DEFAULT_ALGORITHM.to_string(),
            input: AlgorithmInput::new(DEFAULT_VALUES.to_vec()).with_target(DEFAULT_TARGET),
            speed: DEFAULT_SPEED,
            mode: Mode::Interactive,
        }
    }
}

impl RunConfig {
    pub fn from_cli(cli: Cli) -> VizResult<Self> {
        Self::resolve(cli, &mut rand::thread_rng())
    }

    /// Resolve arguments with an explicit random source
    pub fn resolve<R: Rng>(cli: Cli, rng: &mut R) -> VizResult<Self> {
        delay_for_speed(cli.speed)?;

        let values = match (cli.values, cli.random) {
            (Some(text), _) => parse_values(&text)?,
            (None, Some(n)) => random_values(n, rng)?,
            (None, None) => DEFAULT_VALUES.to_vec(),
        };

        let mode = if cli.list {
            Mode::List
        } else if let Some(query) = cli.search {
            Mode::Search(query)
        } else if cli.json {
            Mode::Json
        } else {
            Mode::Interactive
        };

        Ok(RunConfig {
            algorithm: cli
                .algorithm
                .unwrap_or_else(|| DEFAULT_ALGORITHM.to_string()),
            input: AlgorithmInput::new(values).with_target(cli.target.unwrap_or(DEFAULT_TARGET)),
            speed: cli.speed,
            mode,
        })
    }
}

/// Parse `5, 3,4` style input.
///
/// Blank entries are skipped; anything that is not an integer is rejected.
pub fn parse_values(text: &str) -> VizResult<Vec<i64>> {
    let values = text
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .map_err(|_| VizError::InvalidInput(format!("'{part}' is not an integer")))
        })
        .collect::<VizResult<Vec<i64>>>()?;
    check_len(values.len())?;
    Ok(values)
}

pub fn random_values<R: Rng>(n: usize, rng: &mut R) -> VizResult<Vec<i64>> {
    check_len(n)?;
    Ok((0..n).map(|_| rng.gen_range(1..=RANDOM_MAX)).collect())
}

fn check_len(len: usize) -> VizResult<()> {
    if len > MAX_INPUT_LEN {
        return Err(VizError::InvalidInput(format!(
            "{len} values given, at most {MAX_INPUT_LEN} are supported"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("algotrace").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values("5, 3,4").unwrap(), vec![5, 3, 4]);
        assert_eq!(parse_values("-2,,7").unwrap(), vec![-2, 7]);
        assert!(parse_values("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_values_rejects_text() {
        let err = parse_values("1,two").unwrap_err();
        assert_eq!(err, VizError::InvalidInput("'two' is not an integer".to_string()));
    }

    #[test]
    fn test_input_limit() {
        let text = vec!["1"; MAX_INPUT_LEN + 1].join(",");
        assert!(parse_values(&text).is_err());
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_values(MAX_INPUT_LEN + 1, &mut rng).is_err());
    }

    #[test]
    fn test_random_values_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let values = random_values(50, &mut rng).unwrap();
        assert_eq!(values.len(), 50);
        assert!(values.iter().all(|v| (1..=RANDOM_MAX).contains(v)));
    }

    #[test]
    fn test_defaults() {
        let config = RunConfig::from_cli(cli(&[])).unwrap();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn test_full_arguments() {
        let config = RunConfig::from_cli(cli(&[
            "binary", "--values", "9,1,5", "--target", "-5", "--speed", "8", "--json",
        ]))
        .unwrap();
        assert_eq!(config.algorithm, "binary");
        assert_eq!(config.input.values, vec![9, 1, 5]);
        assert_eq!(config.input.target, -5);
        assert_eq!(config.speed, 8);
        assert_eq!(config.mode, Mode::Json);
    }

    #[test]
    fn test_search_mode() {
        let config = RunConfig::from_cli(cli(&["--search", "cycle"])).unwrap();
        assert_eq!(config.mode, Mode::Search("cycle".to_string()));
        assert!(Cli::try_parse_from(["algotrace", "--list", "--search", "x"]).is_err());
    }

    #[test]
    fn test_bad_speed() {
        let err = RunConfig::from_cli(cli(&["--speed", "11"])).unwrap_err();
        assert_eq!(err, VizError::InvalidSpeed(11));
    }

    #[test]
    fn test_values_conflict_with_random() {
        let parsed = Cli::try_parse_from(["algotrace", "--values", "1", "--random", "3"]);
        assert!(parsed.is_err());
    }
}
