use crate::error::Error;
use crate::error::LastError;
use crate::util::anyerror::Fault;
use crate::util::filesystem;
use std::path::Path;

/// Git commands run through subprocesses rather than libgit2 bindings.
pub struct ExtGit {
    command: String,
}

impl ExtGit {
    pub fn new() -> Self {
        Self {
            command: String::new(),
        }
    }

    /// Sets the command for calling git through processes.
    ///
    /// When `s` is `None`, the command assumes git is on the path.
    pub fn command(mut self, s: Option<String>) -> Self {
        self.command = s.unwrap_or(String::from("git"));
        self
    }

    /// Clones a repository `url` into `dest`, creating any missing parent
    /// directories first.
    ///
    /// A nonzero git exit status is escalated as a fatal error naming the
    /// repository.
    pub fn clone(&self, url: &str, dest: &Path) -> Result<(), Fault> {
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let args = [
            String::from("clone"),
            url.to_string(),
            dest.display().to_string(),
        ];
        match filesystem::invoke(Path::new("."), &self.command, &args) {
            Ok(()) => Ok(()),
            Err(e) => Err(Error::CloneFailed(url.to_string(), LastError(e.to_string())))?,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn failed_clone_names_the_repository() {
        let scratch = tempfile::tempdir().unwrap();
        // a git substitute that always fails
        let git = ExtGit::new().command(Some(String::from("false")));
        let err = git
            .clone("https://example.com/none.git", &scratch.path().join("dst"))
            .unwrap_err();
        assert!(err.to_string().contains("https://example.com/none.git"));
    }

    #[test]
    fn clone_creates_parent_directories() {
        let scratch = tempfile::tempdir().unwrap();
        let dest = scratch.path().join("deep").join("nested").join("repo");
        let git = ExtGit::new().command(Some(String::from("true")));
        git.clone("https://example.com/some.git", &dest).unwrap();
        assert!(dest.parent().unwrap().is_dir());
    }
}
