use crate::commands::helps::make;
use crate::core::board::BoardType;
use crate::core::board::BOARD_FAMILY;
use crate::core::board::FIRMWARE_TYPE;
use crate::core::context::Context;
use crate::core::extgit::ExtGit;
use crate::core::manifest::Manifest;
use crate::core::menu;
use crate::core::menu::Menu;
use crate::core::tcl;
use crate::core::version::BuildVersion;
use crate::error::Error;
use crate::error::Hint;
use crate::util::filesystem;
use std::path::Path;
use std::path::PathBuf;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

const PYTHON: &str = "python";
const PKG_PATCH: &str = "pkgpatch.py";
const PROJECT_MANAGER: &str = "ProjectManager.py";

const BUILD_DIR: &str = "build";
const LOCAL_FW_DIR: &str = "mp7_ugt";
const FIRMWARE_SUBTREES: [&str; 4] = ["cfg", "hdl", "ngc", "ucf"];
const CONSTANTS_PKG: &str = "constants_pkg.vhd";
const TARGET_PKG_TPL: &str = "gt_mp7_top_pkg_tpl.vhd";
const TARGET_PKG: &str = "gt_mp7_top_pkg.vhd";
const GTL_FDL_GTL_DIR: &str = "gt_mp7_core/gtl_fdl_wrapper/gtl";

/// The project materializer: lays out a fresh build area for every module of
/// a trigger menu and records the result in a build manifest.
#[derive(Debug, PartialEq)]
pub struct Make {
    menu: PathBuf,
    path: PathBuf,
    build: BuildVersion,
    hls: PathBuf,
    fwpath: PathBuf,
    tag: Option<String>,
    board: Option<BoardType>,
    tclfile: Option<String>,
}

impl Subcommand<Context> for Make {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(make::HELP))?;
        Ok(Make {
            // Options
            tag: cli.get(Arg::option("tag").value("tag"))?,
            board: cli.get(Arg::option("board").value("type"))?,
            tclfile: cli.get(Arg::option("tclfile").value("name"))?,
            path: cli.require(Arg::option("path").value("dir"))?,
            build: cli.require(Arg::option("build").value("version"))?,
            hls: cli.require(Arg::option("hls").value("path"))?,
            fwpath: cli.require(Arg::option("fwpath").value("dir"))?,
            // Positionals
            menu: cli.require(Arg::positional("menu"))?,
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        let config = c.get_config();
        let tag = self.tag.as_deref().unwrap_or(config.get_fw_tag()).to_string();
        let board = self.board.unwrap_or_default();
        let tclfile = self
            .tclfile
            .as_deref()
            .unwrap_or(tcl::TCL_ADD_HLS_IP_CORE)
            .to_string();

        let path = filesystem::full_path(&self.path)?;
        let fwpath = filesystem::full_path(&self.fwpath)?;
        let hls = filesystem::full_path(&self.hls)?;
        let menu_root = filesystem::full_path(&self.menu)?;

        // all preconditions are verified before any directory is created
        let build_root = Self::build_root(&path, &self.build);
        Self::verify_fresh(&build_root)?;
        let menu = Menu::load(menu_root)?;
        let modules = menu.count_modules()?;
        if modules == 0 {
            return Err(Error::MenuHasNoModules(menu.get_root().clone()))?;
        }

        println!("info: creating uGT build area ...");
        println!("info: tag: {}", tag);
        println!("info: path: {}", build_root.display());
        println!("info: menu location: {}", menu.get_root().display());
        println!("info: menu name: {}", menu.get_name());
        println!("info: menu modules: {}", modules);
        println!("info: build: {}", self.build.to_prefixed());
        println!("info: board type: {}", board);
        println!("info: tcl name: {}", tclfile);
        println!("info: HLS path: {}", hls.display());

        // fetch the pinned firmware revision into the build area
        let fw_checkout = build_root.join(&tag);
        std::fs::create_dir_all(&fw_checkout)?;
        ExtGit::new()
            .command(None)
            .clone(config.get_fw_repo(), &fw_checkout)?;

        // patch the target package with build id, timestamp, username, hostname
        println!("info: patching target package with current build metadata ...");
        let hdl_dir = fwpath.join("firmware").join("hdl");
        filesystem::invoke(
            &fwpath,
            PYTHON,
            &[
                fwpath.join("scripts").join(PKG_PATCH).display().to_string(),
                String::from("--build"),
                self.build.to_string(),
                hdl_dir.join(TARGET_PKG_TPL).display().to_string(),
                hdl_dir.join(TARGET_PKG).display().to_string(),
            ],
        )?;

        println!("info: creating module build areas ...");
        let project_dir = fw_checkout.join(BUILD_DIR).join(menu.get_name());
        for i in 0..modules {
            let module_dir = Self::module_dir(&project_dir, i);
            let local_fw_dir = module_dir.join(LOCAL_FW_DIR);
            std::fs::create_dir_all(&local_fw_dir)?;

            // replicate the firmware source trees into the module build area
            for sub in FIRMWARE_SUBTREES {
                filesystem::copy_dir(
                    &fwpath.join("firmware").join(sub),
                    &local_fw_dir.join("firmware").join(sub),
                )?;
            }

            // install the menu's generated constants for this module
            let gtl_dir = local_fw_dir.join("firmware").join("hdl").join(GTL_FDL_GTL_DIR);
            std::fs::copy(
                menu.module_src(i).join(CONSTANTS_PKG),
                gtl_dir.join(CONSTANTS_PKG),
            )?;

            // generate the vendor project
            filesystem::invoke(
                &fw_checkout,
                PYTHON,
                &[
                    String::from(PROJECT_MANAGER),
                    String::from("vivado"),
                    local_fw_dir.display().to_string(),
                    String::from("-w"),
                    module_dir.display().to_string(),
                ],
            )?;

            // vendor IP integration script
            std::fs::write(
                module_dir.join(&tclfile),
                tcl::add_hls_ip_core(&hls.display().to_string()),
            )?;
        }

        let manifest = Manifest::new(&self.build, &menu, modules, &tag, project_dir, board);
        manifest.save(&fw_checkout.join(BUILD_DIR).join(Manifest::filename(&self.build)))?;
        println!("info: finished with success");
        Ok(())
    }
}

impl Make {
    /// Computes `<path>/mp7_ugt/0x<build>`, the root of one build's area.
    fn build_root(path: &Path, build: &BuildVersion) -> PathBuf {
        path.join(format!("{}_{}", BOARD_FAMILY, FIRMWARE_TYPE))
            .join(build.to_prefixed())
    }

    /// Composes the isolated build directory for module `index`.
    fn module_dir(project_dir: &Path, index: usize) -> PathBuf {
        project_dir.join(menu::module_name(index))
    }

    /// A build-area collision is fatal; the existing tree is never mutated.
    fn verify_fresh(build_root: &Path) -> Result<(), Error> {
        match build_root.exists() {
            true => Err(Error::BuildAreaExists(
                build_root.to_path_buf(),
                Hint::RemoveBuildArea,
            )),
            false => Ok(()),
        }
    }
}
