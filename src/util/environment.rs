use std::process::Command;

pub const UGT_HOME: &str = "UGT_HOME";

/// Reads an environment variable, returning `None` if it is unset.
pub fn read(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(v) => Some(v),
        Err(_) => None,
    }
}

const UNKNOWN: &str = "unknown";

/// Best-effort user name for recording in a build manifest.
pub fn username() -> String {
    read("USER")
        .or_else(|| read("USERNAME"))
        .unwrap_or(String::from(UNKNOWN))
}

/// Best-effort host name for recording in a build manifest.
///
/// Falls back to asking the `hostname` program when the shell variable is
/// not exported.
pub fn hostname() -> String {
    if let Some(name) = read("HOSTNAME") {
        return name;
    }
    match Command::new("hostname").output() {
        Ok(out) => match String::from_utf8(out.stdout) {
            Ok(s) if s.trim().is_empty() == false => s.trim().to_string(),
            _ => String::from(UNKNOWN),
        },
        Err(_) => String::from(UNKNOWN),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_missing_key() {
        assert_eq!(read("UGT_DEFINITELY_NOT_SET_1234"), None);
    }

    #[test]
    fn identity_is_never_empty() {
        assert!(username().is_empty() == false);
        assert!(hostname().is_empty() == false);
    }
}
