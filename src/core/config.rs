use crate::core::vivado;
use serde_derive::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

/// Optional settings file living directly under the tool's home directory.
pub const CONFIG_FILE: &str = "config.toml";

pub const DEFAULT_FW_REPO: &str = "https://github.com/herbberg/mp7fw_v2_4_1";
pub const DEFAULT_FW_TAG: &str = "mp7fw_v2_4_1";
pub const DEFAULT_GTL_REPO: &str = "https://github.com/herbberg/hls4gtl";
pub const DEFAULT_IMPL_REPO: &str = "https://github.com/herbberg/mp7ugt_hls";
pub const DEFAULT_VIVADO_VERSION: &str = "2018.2";

/// User configuration overriding the pinned repositories, default firmware
/// tag, and vendor tool defaults.
///
/// Every table and field is optional; absent values fall back to the
/// defaults above.
#[derive(Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    firmware: Option<FirmwareTable>,
    hls: Option<HlsTable>,
    vivado: Option<VivadoTable>,
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct FirmwareTable {
    repo: Option<String>,
    tag: Option<String>,
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct HlsTable {
    gtl_repo: Option<String>,
    impl_repo: Option<String>,
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct VivadoTable {
    version: Option<String>,
    search_paths: Option<Vec<PathBuf>>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            firmware: None,
            hls: None,
            vivado: None,
        }
    }

    /// The pinned firmware repository cloned into every build area.
    pub fn get_fw_repo(&self) -> &str {
        self.firmware
            .as_ref()
            .and_then(|t| t.repo.as_deref())
            .unwrap_or(DEFAULT_FW_REPO)
    }

    pub fn get_fw_tag(&self) -> &str {
        self.firmware
            .as_ref()
            .and_then(|t| t.tag.as_deref())
            .unwrap_or(DEFAULT_FW_TAG)
    }

    /// The HLS algorithm repository used by the end-to-end flow.
    pub fn get_gtl_repo(&self) -> &str {
        self.hls
            .as_ref()
            .and_then(|t| t.gtl_repo.as_deref())
            .unwrap_or(DEFAULT_GTL_REPO)
    }

    /// The uGT firmware implementation repository used by the end-to-end flow.
    pub fn get_impl_repo(&self) -> &str {
        self.hls
            .as_ref()
            .and_then(|t| t.impl_repo.as_deref())
            .unwrap_or(DEFAULT_IMPL_REPO)
    }

    pub fn get_vivado_version(&self) -> &str {
        self.vivado
            .as_ref()
            .and_then(|t| t.version.as_deref())
            .unwrap_or(DEFAULT_VIVADO_VERSION)
    }

    /// Candidate vendor installation roots, in priority order.
    pub fn get_vivado_search_paths(&self) -> Vec<PathBuf> {
        match self.vivado.as_ref().and_then(|t| t.search_paths.as_ref()) {
            Some(paths) => paths.clone(),
            None => vec![
                PathBuf::from(vivado::VIVADO_BASE_DIR_1),
                PathBuf::from(vivado::VIVADO_BASE_DIR_2),
            ],
        }
    }
}

impl FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}
