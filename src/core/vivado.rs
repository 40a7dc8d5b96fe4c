use crate::error::Error;
use crate::error::ProbedPaths;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

/// Default Xilinx Vivado installation locations, in priority order.
pub const VIVADO_BASE_DIR_1: &str = "/opt/xilinx/Vivado";
pub const VIVADO_BASE_DIR_2: &str = "/opt/Xilinx/Vivado";

/// Environment settings script found inside a versioned installation.
pub const SETTINGS_FILE: &str = "settings64.sh";

/// A Xilinx Vivado release number following the `YYYY.N` pattern, eg. `2018.2`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct VivadoVersion {
    year: u16,
    minor: u16,
}

impl Display for VivadoVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.year, self.minor)
    }
}

impl FromStr for VivadoVersion {
    type Err = VivadoVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, minor) = match s.split_once('.') {
            Some(parts) => parts,
            None => return Err(VivadoVersionError::BadFormat(s.to_string())),
        };
        if year.len() != 4 || year.chars().all(|c| c.is_ascii_digit()) == false {
            return Err(VivadoVersionError::BadFormat(s.to_string()));
        }
        if minor.is_empty() == true || minor.chars().all(|c| c.is_ascii_digit()) == false {
            return Err(VivadoVersionError::BadFormat(s.to_string()));
        }
        Ok(Self {
            year: year.parse().map_err(|_| VivadoVersionError::BadFormat(s.to_string()))?,
            minor: minor.parse().map_err(|_| VivadoVersionError::BadFormat(s.to_string()))?,
        })
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum VivadoVersionError {
    #[error("not a xilinx vivado version: {0:?}")]
    BadFormat(String),
}

/// Probes the candidate installation `roots` in priority order for the
/// version's environment settings script.
///
/// The first existing file wins; when none exists the error names every
/// probed path.
pub fn find_settings(roots: &[PathBuf], version: &VivadoVersion) -> Result<PathBuf, Error> {
    let candidates: Vec<PathBuf> = roots
        .iter()
        .map(|r| r.join(version.to_string()).join(SETTINGS_FILE))
        .collect();
    match candidates.iter().find(|p| p.is_file() == true) {
        Some(hit) => Ok(hit.clone()),
        None => Err(Error::VivadoSettingsNotFound(
            ProbedPaths(candidates),
            version.to_string(),
        )),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn version_pattern() {
        assert_eq!(
            VivadoVersion::from_str("2018.2").unwrap(),
            VivadoVersion { year: 2018, minor: 2 }
        );
        assert_eq!(VivadoVersion::from_str("2016.4").unwrap().to_string(), "2016.4");
        // two-digit years, missing minors, and junk are all rejected
        assert!(VivadoVersion::from_str("18.2").is_err());
        assert!(VivadoVersion::from_str("2018").is_err());
        assert!(VivadoVersion::from_str("2018.").is_err());
        assert!(VivadoVersion::from_str("2018.x").is_err());
        assert!(VivadoVersion::from_str("vivado").is_err());
    }

    #[test]
    fn first_existing_root_wins() {
        let scratch = tempfile::tempdir().unwrap();
        let first = scratch.path().join("xilinx");
        let second = scratch.path().join("Xilinx");
        let version = VivadoVersion::from_str("2018.2").unwrap();
        for root in [&first, &second] {
            std::fs::create_dir_all(root.join("2018.2")).unwrap();
            std::fs::write(root.join("2018.2").join(SETTINGS_FILE), "").unwrap();
        }

        let hit = find_settings(&[first.clone(), second.clone()], &version).unwrap();
        assert_eq!(hit, first.join("2018.2").join(SETTINGS_FILE));

        // drop the first candidate and the second is selected
        std::fs::remove_file(first.join("2018.2").join(SETTINGS_FILE)).unwrap();
        let hit = find_settings(&[first.clone(), second.clone()], &version).unwrap();
        assert_eq!(hit, second.join("2018.2").join(SETTINGS_FILE));
    }

    #[test]
    fn missing_installation_names_all_probed_paths() {
        let scratch = tempfile::tempdir().unwrap();
        let first = scratch.path().join("a");
        let second = scratch.path().join("b");
        let version = VivadoVersion::from_str("2019.1").unwrap();
        let err = find_settings(&[first.clone(), second.clone()], &version).unwrap_err();
        let text = err.to_string();
        assert!(text.contains(first.join("2019.1").join(SETTINGS_FILE).to_str().unwrap()));
        assert!(text.contains(second.join("2019.1").join(SETTINGS_FILE).to_str().unwrap()));
        assert!(text.contains("2019.1 is installed"));
    }
}
