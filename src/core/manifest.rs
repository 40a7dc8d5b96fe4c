use crate::core::board::BoardType;
use crate::core::board::BOARD_FAMILY;
use crate::core::board::FIRMWARE_TYPE;
use crate::core::menu::Menu;
use crate::core::version::BuildVersion;
use crate::error::Error;
use crate::error::LastError;
use crate::util::anyerror::Fault;
use crate::util::environment;
use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

/// The build manifest: the flat key-value document written once at the end
/// of materialization and read back by the synthesis launcher.
///
/// Serialized as an ini-style file with `[environment]`, `[menu]`,
/// `[firmware]`, and `[device]` sections; [Display] and [FromStr] form a
/// lossless round trip for every value.
#[derive(Debug, PartialEq)]
pub struct Manifest {
    // environment
    timestamp: String,
    hostname: String,
    username: String,
    // menu
    build: BuildVersion,
    name: String,
    location: PathBuf,
    modules: usize,
    // firmware
    tag: String,
    fw_type: String,
    buildarea: PathBuf,
    // device
    device_type: String,
    device_name: String,
    device_alias: String,
}

impl Manifest {
    /// Assembles a manifest for a freshly materialized build area, capturing
    /// the current time and identity of the operator's machine.
    pub fn new(
        build: &BuildVersion,
        menu: &Menu,
        modules: usize,
        tag: &str,
        buildarea: PathBuf,
        board: BoardType,
    ) -> Self {
        Self {
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            hostname: environment::hostname(),
            username: environment::username(),
            build: build.clone(),
            name: menu.get_name().to_string(),
            location: menu.get_root().clone(),
            modules: modules,
            tag: tag.to_string(),
            fw_type: FIRMWARE_TYPE.to_string(),
            buildarea: buildarea,
            device_type: board.to_string(),
            device_name: BOARD_FAMILY.to_string(),
            device_alias: board.alias().to_string(),
        }
    }

    /// The canonical manifest file name for a build version, eg.
    /// `build_0x1001.cfg`.
    pub fn filename(build: &BuildVersion) -> String {
        format!("build_{}.cfg", build.to_prefixed())
    }

    pub fn save(&self, path: &Path) -> Result<(), Fault> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, Fault> {
        let contents = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                return Err(Error::ManifestNotRead(
                    path.to_path_buf(),
                    LastError(e.to_string()),
                ))?
            }
        };
        Ok(Self::from_str(&contents)?)
    }

    pub fn get_build(&self) -> &BuildVersion {
        &self.build
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_modules(&self) -> usize {
        self.modules
    }

    pub fn get_buildarea(&self) -> &PathBuf {
        &self.buildarea
    }

    pub fn get_tag(&self) -> &str {
        &self.tag
    }

    pub fn get_alias(&self) -> &str {
        &self.device_alias
    }
}

impl Display for Manifest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[environment]")?;
        writeln!(f, "timestamp = {}", self.timestamp)?;
        writeln!(f, "hostname = {}", self.hostname)?;
        writeln!(f, "username = {}", self.username)?;
        writeln!(f, "")?;
        writeln!(f, "[menu]")?;
        writeln!(f, "build = {}", self.build)?;
        writeln!(f, "name = {}", self.name)?;
        writeln!(f, "location = {}", self.location.display())?;
        writeln!(f, "modules = {}", self.modules)?;
        writeln!(f, "")?;
        writeln!(f, "[firmware]")?;
        writeln!(f, "tag = {}", self.tag)?;
        writeln!(f, "type = {}", self.fw_type)?;
        writeln!(f, "buildarea = {}", self.buildarea.display())?;
        writeln!(f, "")?;
        writeln!(f, "[device]")?;
        writeln!(f, "type = {}", self.device_type)?;
        writeln!(f, "name = {}", self.device_name)?;
        writeln!(f, "alias = {}", self.device_alias)?;
        Ok(())
    }
}

impl FromStr for Manifest {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut map = HashMap::new();
        let mut section = String::new();
        for (num, line) in s.lines().enumerate() {
            let line = line.trim();
            // skip blanks and comments
            if line.is_empty() == true || line.starts_with(';') || line.starts_with('#') {
                continue;
            }
            if let Some(header) = line.strip_prefix('[') {
                section = match header.strip_suffix(']') {
                    Some(name) => name.trim().to_ascii_lowercase(),
                    None => return Err(ManifestError::UnclosedSection(num + 1)),
                };
                continue;
            }
            match line.split_once('=') {
                Some((key, value)) => {
                    map.insert(
                        (section.clone(), key.trim().to_ascii_lowercase()),
                        value.trim().to_string(),
                    );
                }
                None => return Err(ManifestError::ExpectedAssignment(num + 1)),
            }
        }

        let mut take = |section: &str, key: &str| -> Result<String, ManifestError> {
            map.remove(&(section.to_string(), key.to_string()))
                .ok_or(ManifestError::MissingKey(
                    section.to_string(),
                    key.to_string(),
                ))
        };

        Ok(Self {
            timestamp: take("environment", "timestamp")?,
            hostname: take("environment", "hostname")?,
            username: take("environment", "username")?,
            build: BuildVersion::from_str(&take("menu", "build")?)
                .map_err(|e| ManifestError::InvalidValue("menu", "build", e.to_string()))?,
            name: take("menu", "name")?,
            location: PathBuf::from(take("menu", "location")?),
            modules: take("menu", "modules")?
                .parse()
                .map_err(|_| ManifestError::InvalidValue("menu", "modules", String::from("expects an unsigned integer")))?,
            tag: take("firmware", "tag")?,
            fw_type: take("firmware", "type")?,
            buildarea: PathBuf::from(take("firmware", "buildarea")?),
            device_type: take("device", "type")?,
            device_name: take("device", "name")?,
            device_alias: take("device", "alias")?,
        })
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ManifestError {
    #[error("line {0}: unclosed section header")]
    UnclosedSection(usize),
    #[error("line {0}: expected a 'key = value' assignment")]
    ExpectedAssignment(usize),
    #[error("missing required key '{1}' in section '[{0}]'")]
    MissingKey(String, String),
    #[error("key '{1}' in section '[{0}]': {2}")]
    InvalidValue(&'static str, &'static str, String),
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample_menu(root: &std::path::Path, modules: usize) -> Menu {
        let dir = root.join("L1Menu_Test");
        for i in 0..modules {
            std::fs::create_dir_all(dir.join("vhdl").join(format!("module_{}", i)).join("src"))
                .unwrap();
        }
        Menu::load(dir).unwrap()
    }

    #[test]
    fn round_trip_is_lossless() {
        let scratch = tempfile::tempdir().unwrap();
        let menu = sample_menu(scratch.path(), 3);
        let build = BuildVersion::from_str("0x1001").unwrap();
        let manifest = Manifest::new(
            &build,
            &menu,
            3,
            "mp7fw_v2_4_1",
            scratch.path().join("build").join("L1Menu_Test"),
            BoardType::Mp7xe690,
        );
        let parsed = Manifest::from_str(&manifest.to_string()).unwrap();
        assert_eq!(parsed, manifest);
        // values the launcher relies on come back verbatim
        assert_eq!(parsed.get_build().as_str(), "1001");
        assert_eq!(parsed.get_name(), "L1Menu_Test");
        assert_eq!(parsed.get_modules(), 3);
        assert_eq!(parsed.get_tag(), "mp7fw_v2_4_1");
        assert_eq!(parsed.get_alias(), "xe");
    }

    #[test]
    fn save_and_load() {
        let scratch = tempfile::tempdir().unwrap();
        let menu = sample_menu(scratch.path(), 2);
        let build = BuildVersion::from_str("dead").unwrap();
        let manifest = Manifest::new(
            &build,
            &menu,
            2,
            "mp7fw_v2_4_1",
            scratch.path().join("area"),
            BoardType::Mp7_690es,
        );
        let file = scratch.path().join(Manifest::filename(&build));
        assert_eq!(file.file_name().unwrap(), "build_0xdead.cfg");
        manifest.save(&file).unwrap();
        assert_eq!(Manifest::load(&file).unwrap(), manifest);
    }

    #[test]
    fn missing_key_is_fatal() {
        let text = "\
[environment]
timestamp = 2018-06-21 13:02:45
hostname = lxplus042
username = operator

[menu]
build = 1001
name = L1Menu_Test
location = /nfs/menus/L1Menu_Test
modules = 3

[firmware]
tag = mp7fw_v2_4_1
type = ugt

[device]
type = mp7xe_690
name = mp7
alias = xe
";
        assert_eq!(
            Manifest::from_str(text),
            Err(ManifestError::MissingKey(
                String::from("firmware"),
                String::from("buildarea")
            ))
        );
    }

    #[test]
    fn malformed_lines_are_rejected() {
        assert_eq!(
            Manifest::from_str("[menu\nbuild = 1001\n"),
            Err(ManifestError::UnclosedSection(1))
        );
        assert_eq!(
            Manifest::from_str("[menu]\nbuild\n"),
            Err(ManifestError::ExpectedAssignment(2))
        );
    }

    #[test]
    fn load_names_unreadable_file() {
        let scratch = tempfile::tempdir().unwrap();
        let ghost = scratch.path().join("build_0x1001.cfg");
        let err = Manifest::load(&ghost).unwrap_err();
        assert!(err.to_string().contains("build_0x1001.cfg"));
    }
}
