use crate::error::Error;
use crate::util::anyerror::Fault;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Resolves `path` into an absolute path against the current working directory.
pub fn full_path(path: &Path) -> Result<PathBuf, Fault> {
    match path.is_absolute() {
        true => Ok(path.to_path_buf()),
        false => Ok(std::env::current_dir()?.join(path)),
    }
}

/// Attempts to return the executable's path.
pub fn get_exe_path() -> Result<PathBuf, Fault> {
    match std::env::current_exe() {
        Ok(exe_path) => Ok(std::fs::canonicalize(exe_path)?),
        Err(e) => Err(Box::new(e)),
    }
}

/// Copies the contents of the `src` directory into `dst`, creating `dst`
/// and any missing parents first.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<(), Fault> {
    std::fs::create_dir_all(&dst)?;
    let opts = fs_extra::dir::CopyOptions::new()
        .content_only(true)
        .overwrite(true);
    fs_extra::dir::copy(&src, &dst, &opts)?;
    Ok(())
}

/// Runs `command` with `args` from the `cwd` directory and waits for it to
/// finish, escalating a nonzero exit status as a fatal error.
pub fn invoke(cwd: &Path, command: &str, args: &[String]) -> Result<(), Fault> {
    // display the literal command being ran
    let s = args.iter().fold(String::new(), |x, y| x + "\"" + &y + "\" ");
    println!("info: running: {} {}", command, s);
    let mut proc = Command::new(command).args(args).current_dir(cwd).spawn()?;
    let exit_code = proc.wait()?;
    match exit_code.code() {
        Some(num) => {
            if num != 0 {
                Err(Error::ChildProcErrorCode(num))?
            } else {
                Ok(())
            }
        }
        None => Err(Error::ChildProcTerminated)?,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn full_path_resolves_relative() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(
            full_path(Path::new("build")).unwrap(),
            cwd.join("build")
        );
        // absolute paths pass through untouched
        assert_eq!(
            full_path(Path::new("/opt/build")).unwrap(),
            PathBuf::from("/opt/build")
        );
    }

    #[test]
    fn copy_dir_replicates_tree() {
        let scratch = tempfile::tempdir().unwrap();
        let src = scratch.path().join("src");
        std::fs::create_dir_all(src.join("hdl")).unwrap();
        std::fs::write(src.join("hdl").join("top.vhd"), "entity top is").unwrap();

        let dst = scratch.path().join("dst");
        copy_dir(&src, &dst).unwrap();
        assert!(dst.join("hdl").join("top.vhd").is_file());
    }

    #[test]
    fn invoke_reports_exit_code() {
        let cwd = std::env::current_dir().unwrap();
        assert!(invoke(&cwd, "true", &[]).is_ok());
        let err = invoke(&cwd, "false", &[]).unwrap_err();
        assert_eq!(err.to_string(), Error::ChildProcErrorCode(1).to_string());
    }
}
