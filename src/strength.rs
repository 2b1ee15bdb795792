use secrecy::{ExposeSecret, SecretString};

use crate::types::{CrackTimeDisplay, StrengthEstimate};

/// Local, CPU-bound password strength heuristic.
///
/// Implementations are called from the blocking pool and must not do IO.
pub trait StrengthEstimator: Send + Sync {
    fn estimate(&self, password: &SecretString) -> StrengthEstimate;
}

/// [`StrengthEstimator`] backed by the `zxcvbn` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZxcvbnEstimator;

impl StrengthEstimator for ZxcvbnEstimator {
    fn estimate(&self, password: &SecretString) -> StrengthEstimate {
        let entropy = zxcvbn::zxcvbn(password.expose_secret(), &[]);

        // zxcvbn only produces feedback for weak passwords.
        let suggestions = entropy
            .feedback()
            .map(|fb| fb.suggestions().iter().map(|s| s.to_string()).collect())
            .unwrap_or_default();

        let times = entropy.crack_times();
        StrengthEstimate {
            score: entropy.score() as u8,
            suggestions,
            crack_times: CrackTimeDisplay {
                online_throttling_100_per_hour: times.online_throttling_100_per_hour().to_string(),
                online_no_throttling_10_per_second: times
                    .online_no_throttling_10_per_second()
                    .to_string(),
                offline_slow_hashing_1e4_per_second: times
                    .offline_slow_hashing_1e4_per_second()
                    .to_string(),
                offline_fast_hashing_1e10_per_second: times
                    .offline_fast_hashing_1e10_per_second()
                    .to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn common_password_scores_zero_with_suggestions() {
        let est = ZxcvbnEstimator.estimate(&secret("password"));
        assert_eq!(est.score, 0);
        assert!(!est.suggestions.is_empty());
        assert!(!est.crack_times.offline_fast_hashing_1e10_per_second.is_empty());
    }

    #[test]
    fn long_random_password_scores_high_without_suggestions() {
        let est = ZxcvbnEstimator.estimate(&secret("r0sebud-Plinth-Quasar-91-Vellum!"));
        assert!(est.score >= 3, "score was {}", est.score);
        assert!(est.suggestions.is_empty());
    }

    #[test]
    fn score_is_within_range() {
        for pwd in ["a", "abc123", "Tr0ub4dour&3", "correct horse battery staple"] {
            assert!(ZxcvbnEstimator.estimate(&secret(pwd)).score <= 4);
        }
    }
}
