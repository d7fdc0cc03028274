use std::{
    env, fmt,
    net::{AddrParseError, SocketAddr},
};

use state_feed::FeatureMap;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MODE: RunMode = RunMode::Replay;
const DEFAULT_JOURNAL_OUTPUT_PATH: &str = "artifacts/journal.csv";
const DEFAULT_INITIAL_CASH: f64 = 1_000.0;
const DEFAULT_OBSERVATIONS_INPUT_PATH: Option<String> = None;
const DEFAULT_FEATURE_MAP: FeatureMap = FeatureMap::Default;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Replay,
    Sim,
}

impl RunMode {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "replay" => Some(Self::Replay),
            "sim" => Some(Self::Sim),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Replay => "replay",
            Self::Sim => "sim",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub mode: RunMode,
    pub journal_output_path: String,
    pub observations_input_path: Option<String>,
    pub initial_cash: f64,
    pub feature_map: FeatureMap,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidListenAddr(AddrParseError),
    InvalidMode,
    InvalidJournalOutputPath,
    InvalidObservationsInputPath,
    InvalidInitialCash,
    InvalidFeatureMap,
    NonUnicodeListenAddr,
    NonUnicodeMode,
    NonUnicodeJournalOutput,
    NonUnicodeObservationsInput,
    NonUnicodeInitialCash,
    NonUnicodeFeatureMap,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidListenAddr(err) => {
                write!(f, "QLAB_SERVER_ADDR is not a valid socket address: {err}")
            }
            Self::InvalidMode => {
                write!(f, "QLAB_MODE must be one of: replay, sim")
            }
            Self::InvalidJournalOutputPath => {
                write!(f, "QLAB_JOURNAL_OUTPUT must not be empty or whitespace")
            }
            Self::InvalidObservationsInputPath => {
                write!(f, "QLAB_OBSERVATIONS_INPUT must not be empty or whitespace")
            }
            Self::InvalidInitialCash => {
                write!(f, "QLAB_INITIAL_CASH must be a finite positive amount")
            }
            Self::InvalidFeatureMap => {
                write!(f, "QLAB_FEATURE_MAP must be one of: default, on-axis, shift")
            }
            Self::NonUnicodeListenAddr => {
                write!(f, "QLAB_SERVER_ADDR contains non-unicode data")
            }
            Self::NonUnicodeMode => {
                write!(f, "QLAB_MODE contains non-unicode data")
            }
            Self::NonUnicodeJournalOutput => {
                write!(f, "QLAB_JOURNAL_OUTPUT contains non-unicode data")
            }
            Self::NonUnicodeObservationsInput => {
                write!(f, "QLAB_OBSERVATIONS_INPUT contains non-unicode data")
            }
            Self::NonUnicodeInitialCash => {
                write!(f, "QLAB_INITIAL_CASH contains non-unicode data")
            }
            Self::NonUnicodeFeatureMap => {
                write!(f, "QLAB_FEATURE_MAP contains non-unicode data")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidListenAddr(err) => Some(err),
            _ => None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = match env::var("QLAB_SERVER_ADDR") {
            Ok(value) => value.parse().map_err(ConfigError::InvalidListenAddr)?,
            Err(env::VarError::NotPresent) => DEFAULT_LISTEN_ADDR
                .parse()
                .expect("default listen address must be valid"),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeListenAddr);
            }
        };

        let mode = match env::var("QLAB_MODE") {
            Ok(value) => RunMode::parse(value.as_str()).ok_or(ConfigError::InvalidMode)?,
            Err(env::VarError::NotPresent) => DEFAULT_MODE,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeMode);
            }
        };

        let journal_output_path = match env::var("QLAB_JOURNAL_OUTPUT") {
            Ok(value) => {
                if value.trim().is_empty() {
                    return Err(ConfigError::InvalidJournalOutputPath);
                }
                value
            }
            Err(env::VarError::NotPresent) => DEFAULT_JOURNAL_OUTPUT_PATH.to_owned(),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeJournalOutput);
            }
        };

        let observations_input_path = match env::var("QLAB_OBSERVATIONS_INPUT") {
            Ok(value) => {
                if value.trim().is_empty() {
                    return Err(ConfigError::InvalidObservationsInputPath);
                }
                Some(value)
            }
            Err(env::VarError::NotPresent) => DEFAULT_OBSERVATIONS_INPUT_PATH,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeObservationsInput);
            }
        };

        let initial_cash = match env::var("QLAB_INITIAL_CASH") {
            Ok(value) => {
                let parsed = value
                    .parse::<f64>()
                    .map_err(|_| ConfigError::InvalidInitialCash)?;
                if !parsed.is_finite() || parsed <= 0.0 {
                    return Err(ConfigError::InvalidInitialCash);
                }
                parsed
            }
            Err(env::VarError::NotPresent) => DEFAULT_INITIAL_CASH,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeInitialCash);
            }
        };

        let feature_map = match env::var("QLAB_FEATURE_MAP") {
            Ok(value) => {
                FeatureMap::parse(value.as_str()).ok_or(ConfigError::InvalidFeatureMap)?
            }
            Err(env::VarError::NotPresent) => DEFAULT_FEATURE_MAP,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeFeatureMap);
            }
        };

        Ok(Self {
            listen_addr,
            mode,
            journal_output_path,
            observations_input_path,
            initial_cash,
            feature_map,
        })
    }
}
