use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Settings for the peer directory: which zone it serves and how it is
/// kept fresh.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectoryConfig {
    /// Zone every peer name is published under, e.g. `ts.example.com`.
    #[serde(default)]
    pub zone: String,

    #[serde(default)]
    pub poll_interval: PollInterval,

    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    #[serde(default = "default_ttl")]
    pub ttl: u32,

    #[serde(default)]
    pub status_source: StatusSourceConfig,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            zone: String::new(),
            poll_interval: PollInterval::default(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            ttl: default_ttl(),
            status_source: StatusSourceConfig::default(),
        }
    }
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

fn default_ttl() -> u32 {
    60
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatusSourceConfig {
    /// Runs the tailscale CLI and parses its JSON status.
    TailscaleCli {
        #[serde(default = "default_status_command")]
        command: Vec<String>,
    },
    /// Reads a status document in the same JSON shape from disk.
    JsonFile { path: String },
}

impl Default for StatusSourceConfig {
    fn default() -> Self {
        StatusSourceConfig::TailscaleCli {
            command: default_status_command(),
        }
    }
}

fn default_status_command() -> Vec<String> {
    vec![
        "tailscale".to_string(),
        "status".to_string(),
        "--json".to_string(),
    ]
}

/// Refresh period. Accepts whole seconds (`90`) or a duration string made of
/// decimal numbers with units (`"90s"`, `"1.5h"`, `"1m30s"`, `"250ms"`,
/// `"500us"`). Valid units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`.
/// Zero disables periodic refresh after the startup build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "RawInterval", into = "RawInterval")]
pub struct PollInterval(Duration);

const NANOS_PER_SEC: u128 = 1_000_000_000;

impl PollInterval {
    pub const DEFAULT_SECS: u64 = 60;

    pub fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn parse(raw: &str) -> Result<Self, String> {
        let raw = raw.trim();
        let invalid = || format!("poll_interval has invalid duration: {}", raw);

        if raw.starts_with('-') {
            return Err(format!("poll_interval can't be negative: {}", raw));
        }
        if raw.is_empty() {
            return Err("poll_interval is empty".to_string());
        }
        if let Ok(secs) = raw.parse::<u64>() {
            return Ok(Self::from_secs(secs));
        }

        let mut total: u128 = 0;
        let mut rest = raw;
        while !rest.is_empty() {
            let number_len = rest
                .find(|c: char| !(c.is_ascii_digit() || c == '.'))
                .ok_or_else(|| format!("poll_interval is missing a unit: {}", raw))?;
            let number = &rest[..number_len];
            rest = &rest[number_len..];

            let unit_len = rest
                .find(|c: char| c.is_ascii_digit() || c == '.')
                .unwrap_or(rest.len());
            let unit = &rest[..unit_len];
            rest = &rest[unit_len..];

            let unit_nanos = match unit {
                "ns" => 1,
                "us" | "µs" | "μs" => 1_000,
                "ms" => 1_000_000,
                "s" => NANOS_PER_SEC,
                "m" => 60 * NANOS_PER_SEC,
                "h" => 3600 * NANOS_PER_SEC,
                unit => {
                    return Err(format!(
                        "poll_interval has unknown unit '{}' in {}",
                        unit, raw
                    ))
                }
            };

            let step = scale(number, unit_nanos).ok_or_else(invalid)?;
            total = total.checked_add(step).ok_or_else(invalid)?;
        }

        let nanos = u64::try_from(total).map_err(|_| invalid())?;
        Ok(Self(Duration::from_nanos(nanos)))
    }
}

/// `number` (digits with an optional fraction) times `unit_nanos`, or `None`
/// when it is malformed or overflows.
fn scale(number: &str, unit_nanos: u128) -> Option<u128> {
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if (whole.is_empty() && fraction.is_empty()) || fraction.contains('.') {
        return None;
    }

    let whole: u128 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut nanos = whole.checked_mul(unit_nanos)?;

    // Digits below one nanosecond are dropped.
    let mut place = unit_nanos;
    for digit in fraction.bytes() {
        place /= 10;
        if place == 0 {
            break;
        }
        nanos = nanos.checked_add(u128::from(digit - b'0') * place)?;
    }
    Some(nanos)
}

impl Default for PollInterval {
    fn default() -> Self {
        Self::from_secs(Self::DEFAULT_SECS)
    }
}

impl fmt::Display for PollInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nanos = self.0.as_nanos();
        if nanos % NANOS_PER_SEC == 0 {
            write!(f, "{}s", nanos / NANOS_PER_SEC)
        } else if nanos % 1_000_000 == 0 {
            write!(f, "{}ms", nanos / 1_000_000)
        } else if nanos % 1_000 == 0 {
            write!(f, "{}us", nanos / 1_000)
        } else {
            write!(f, "{}ns", nanos)
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
enum RawInterval {
    Seconds(i64),
    Text(String),
}

impl TryFrom<RawInterval> for PollInterval {
    type Error = String;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        match raw {
            RawInterval::Seconds(secs) if secs < 0 => {
                Err(format!("poll_interval can't be negative: {}", secs))
            }
            RawInterval::Seconds(secs) => Ok(PollInterval::from_secs(secs as u64)),
            RawInterval::Text(text) => PollInterval::parse(&text),
        }
    }
}

impl From<PollInterval> for RawInterval {
    fn from(interval: PollInterval) -> Self {
        RawInterval::Text(interval.to_string())
    }
}
