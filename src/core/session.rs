use crate::util::anyerror::Fault;
use crate::util::filesystem;
use std::path::Path;

/// Submits fire-and-forget jobs to detached terminal multiplexer sessions.
///
/// A job handed to [Screen::submit] runs unsupervised: this process never
/// joins, monitors, or receives results from it. Supervision is left to the
/// operator attaching to the session.
pub struct Screen {
    command: String,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            command: String::new(),
        }
    }

    /// Sets the command for calling the multiplexer through processes.
    ///
    /// When `s` is `None`, the command assumes `screen` is on the path.
    pub fn command(mut self, s: Option<String>) -> Self {
        self.command = s.unwrap_or(String::from("screen"));
        self
    }

    /// Starts a detached session named `session` running `script` under
    /// `bash -c`.
    ///
    /// A returned [Submission] means the multiplexer accepted the job, not
    /// that the job inside the session completed, or ever will.
    pub fn submit(&self, session: &str, script: &str) -> Result<Submission, Fault> {
        let args = [
            String::from("-dmS"),
            session.to_string(),
            String::from("bash"),
            String::from("-c"),
            script.to_string(),
        ];
        filesystem::invoke(Path::new("."), &self.command, &args)?;
        Ok(Submission {
            session: session.to_string(),
        })
    }

    /// Lists the active sessions as an observability aid; failures are
    /// ignored and the output is not parsed.
    pub fn list(&self) {
        let _ = filesystem::invoke(Path::new("."), &self.command, &[String::from("-ls")]);
    }
}

/// Proof that a job was handed off to a detached session.
#[derive(Debug, PartialEq)]
pub struct Submission {
    session: String,
}

impl Submission {
    pub fn get_session(&self) -> &str {
        &self.session
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn submit_runs_the_multiplexer() {
        // substitute a command that accepts any arguments
        let screen = Screen::new().command(Some(String::from("true")));
        let sub = screen.submit("build_1001_0", "make project").unwrap();
        assert_eq!(sub.get_session(), "build_1001_0");
    }

    #[test]
    fn failed_submission_is_fatal() {
        let screen = Screen::new().command(Some(String::from("false")));
        assert!(screen.submit("build_1001_0", "make project").is_err());
    }
}
