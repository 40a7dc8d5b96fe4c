use colored::Colorize;
use std::{fmt::Display, path::PathBuf};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("build area already exists: {0:?}{1}")]
    BuildAreaExists(PathBuf, Hint),
    #[error("menu directory does not exist: {0:?}")]
    MenuDirMissing(PathBuf),
    #[error("invalid menu name: {0:?}{1}")]
    InvalidMenuName(String, Hint),
    #[error("menu contains no modules: {0:?}")]
    MenuHasNoModules(PathBuf),
    #[error("no such Xilinx Vivado settings file: {0}\n  check if Xilinx Vivado {1} is installed on this machine")]
    VivadoSettingsNotFound(ProbedPaths, String),
    #[error("file system path {0:?} is missing a name")]
    MissingFileSystemPathName(PathBuf),
    #[error("failed to detect user's home directory")]
    HomeDirNotFound,
    #[error("exited with error code: {0}")]
    ChildProcErrorCode(i32),
    #[error("terminated by signal")]
    ChildProcTerminated,
    #[error("failed to clone repository {0:?}: {1}")]
    CloneFailed(String, LastError),
    #[error("failed to read manifest file {0:?}: {1}")]
    ManifestNotRead(PathBuf, LastError),
}

#[derive(Debug, PartialEq)]
pub struct LastError(pub String);

impl Display for LastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Error::lowerize(self.0.to_string()))
    }
}

impl Error {
    pub fn lowerize(s: String) -> String {
        // get the first word
        let first_word = s.split_whitespace().into_iter().next().unwrap();
        // retain punctuation if the first word is all-caps and longer than 1 character
        if first_word.len() > 1
            && first_word
                .chars()
                .find(|c| c.is_ascii_lowercase() == true)
                .is_none()
        {
            s.to_string()
        } else {
            s.char_indices()
                .map(|(i, c)| if i == 0 { c.to_ascii_lowercase() } else { c })
                .collect()
        }
    }
}

/// The set of candidate locations that were checked for a vendor settings
/// script before giving up.
#[derive(Debug, PartialEq)]
pub struct ProbedPaths(pub Vec<PathBuf>);

impl Display for ProbedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut paths = self.0.iter();
        if let Some(first) = paths.next() {
            write!(f, "{:?}", first)?;
            for p in paths {
                write!(f, " or {:?}", p)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
pub enum Hint {
    RemoveBuildArea,
    MenuPrefix,
}

impl Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::RemoveBuildArea => "delete the existing build area before retrying this build",
            Self::MenuPrefix => "trigger menu directory names start with \"L1Menu_\"",
        };
        write!(
            f,
            "\n\n{}: {}",
            "hint".green(),
            Error::lowerize(message.to_string())
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn probed_paths_name_every_candidate() {
        let probed = ProbedPaths(vec![
            PathBuf::from("/opt/xilinx/Vivado/2018.2/settings64.sh"),
            PathBuf::from("/opt/Xilinx/Vivado/2018.2/settings64.sh"),
        ]);
        let text = probed.to_string();
        assert!(text.contains("/opt/xilinx/Vivado/2018.2/settings64.sh"));
        assert!(text.contains("/opt/Xilinx/Vivado/2018.2/settings64.sh"));
        assert!(text.contains(" or "));
    }

    #[test]
    fn lowerize_keeps_acronyms() {
        assert_eq!(
            Error::lowerize(String::from("Exited with error code: 2")),
            "exited with error code: 2"
        );
        assert_eq!(Error::lowerize(String::from("HLS path missing")), "HLS path missing");
    }
}
