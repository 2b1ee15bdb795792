use secrecy::SecretString;
use serde::{Deserialize, Deserializer};

/// Body of a `POST /check-password` request, either form-encoded or JSON.
///
/// A missing field, an explicit `null` and an empty string all deserialize to
/// `password: None`.
#[derive(Debug, Default, Deserialize)]
pub struct PasswordSubmission {
    #[serde(default, deserialize_with = "non_empty_secret")]
    pub password: Option<SecretString>,
}

impl PasswordSubmission {
    pub fn new(password: impl Into<String>) -> Self {
        let password: String = password.into();
        Self {
            password: (!password.is_empty()).then(|| SecretString::new(password.into())),
        }
    }
}

fn non_empty_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .filter(|s| !s.is_empty())
        .map(|s| SecretString::new(s.into())))
}

/// Human-readable crack time for each attacker-speed assumption.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CrackTimeDisplay {
    pub online_throttling_100_per_hour: String,
    pub online_no_throttling_10_per_second: String,
    pub offline_slow_hashing_1e4_per_second: String,
    pub offline_fast_hashing_1e10_per_second: String,
}

/// Output of a [`StrengthEstimator`](crate::strength::StrengthEstimator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthEstimate {
    /// 0 (guessable) ..= 4 (very unguessable).
    pub score: u8,
    pub suggestions: Vec<String>,
    pub crack_times: CrackTimeDisplay,
}

/// Everything the report needs. Only built once the breach lookup succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub score: u8,
    pub suggestions: Vec<String>,
    pub crack_time_display: String,
    /// 0 = not found, otherwise the number of times the hash was seen.
    pub breach_count: u64,
}

impl CheckResult {
    pub fn from_parts(estimate: StrengthEstimate, breach_count: u64) -> Self {
        Self {
            score: estimate.score.min(4),
            suggestions: estimate.suggestions,
            crack_time_display: estimate.crack_times.offline_fast_hashing_1e10_per_second,
            breach_count,
        }
    }
}
