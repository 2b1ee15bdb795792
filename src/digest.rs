use sha1::{Digest, Sha1};

/// Number of leading hex characters sent to the range API.
pub const PREFIX_LEN: usize = 5;

/// Length of a SHA-1 digest rendered as hex.
pub const HEX_LEN: usize = 40;

/// A SHA-1 digest split for a k-anonymity range query.
///
/// Only `prefix` may leave the process. `suffix` is matched locally against
/// the range response.
#[derive(Clone, PartialEq, Eq)]
pub struct HashRange {
    pub prefix: String,
    pub suffix: String,
}

impl std::fmt::Debug for HashRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashRange")
            .field("prefix", &self.prefix)
            .field("suffix", &"<redacted>")
            .finish()
    }
}

/// SHA-1 of the UTF-8 bytes of `password`, as 40 uppercase hex characters.
pub fn sha1_hex_upper(password: &str) -> String {
    let hash = Sha1::digest(password.as_bytes());
    format!("{:X}", hash)
}

/// Hash `password` and split the hex digest into a 5-char prefix and 35-char suffix.
pub fn hash_range(password: &str) -> HashRange {
    let hex = sha1_hex_upper(password);
    let (prefix, suffix) = hex.split_at(PREFIX_LEN);
    HashRange {
        prefix: prefix.to_string(),
        suffix: suffix.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_digest_for_password() {
        assert_eq!(
            sha1_hex_upper("password"),
            "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8"
        );
    }

    #[test]
    fn golden_split_for_password() {
        let range = hash_range("password");
        assert_eq!(range.prefix, "5BAA6");
        assert_eq!(range.suffix, "1E4C9B93F3F0682250B6CF8331B7EE68FD8");
    }

    #[test]
    fn split_lengths_and_case() {
        for pwd in ["a", "correct horse battery staple", "p\u{e4}ssw\u{f6}rd", "!@#$%^&*()"] {
            let range = hash_range(pwd);
            assert_eq!(range.prefix.len(), PREFIX_LEN);
            assert_eq!(range.suffix.len(), HEX_LEN - PREFIX_LEN);
            let all = format!("{}{}", range.prefix, range.suffix);
            assert!(all
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
        }
    }

    #[test]
    fn debug_hides_suffix() {
        let dbg = format!("{:?}", hash_range("password"));
        assert!(dbg.contains("5BAA6"));
        assert!(!dbg.contains("1E4C9B93"));
    }
}
