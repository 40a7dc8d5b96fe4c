use crate::commands::helps::flow;
use crate::core::context::Context;
use crate::core::extgit::ExtGit;
use crate::core::manifest::Manifest;
use crate::core::session::Screen;
use crate::core::version::BuildVersion;
use crate::core::vivado;
use crate::core::vivado::VivadoVersion;
use crate::error::Error;
use crate::util::filesystem;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

const PYTHON: &str = "python";
const MANAGE: &str = "manage.py";

const GTL_DIR: &str = "hls4gtl";
const IMPL_DIR: &str = "mp7ugt_hls";
const WORK_DIR: &str = "work";
const EXPORTED_IP_DIR: &str = "hls_impl/solution1/impl/ip";

/// The end-to-end orchestrator: prepares a working area under the user's
/// home directory, runs the HLS stages, then chains the materializer and the
/// launcher inside one detached session.
#[derive(Debug, PartialEq)]
pub struct Flow {
    builddir: String,
    menupath: String,
    menuname: String,
    build: BuildVersion,
    vivado: Option<VivadoVersion>,
    module: Option<usize>,
    tag: Option<String>,
}

impl Subcommand<Context> for Flow {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(flow::HELP))?;
        Ok(Flow {
            // Options
            vivado: cli.get(Arg::option("vivado").value("version"))?,
            module: cli.get(Arg::option("module").value("index"))?,
            tag: cli.get(Arg::option("tag").value("tag"))?,
            build: cli.require(Arg::option("build").value("version"))?,
            // Positionals
            builddir: cli.require(Arg::positional("builddir"))?,
            menupath: cli.require(Arg::positional("menupath"))?,
            menuname: cli.require(Arg::positional("menuname"))?,
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        let config = c.get_config();
        let vivado_version = match &self.vivado {
            Some(v) => v.clone(),
            None => VivadoVersion::from_str(config.get_vivado_version())?,
        };
        let module = self.module.unwrap_or(0);
        let tag = self.tag.as_deref().unwrap_or(config.get_fw_tag()).to_string();

        // fail fast when the vendor environment is absent; the detached
        // session would otherwise die long after this process returned
        vivado::find_settings(&config.get_vivado_search_paths(), &vivado_version)?;

        let home = match home::home_dir() {
            Some(p) => p,
            None => return Err(Error::HomeDirNotFound)?,
        };
        // both directories hang off the user's home directory
        let menu_dir = home.join(&self.menupath).join(&self.menuname);
        let work_dir = home.join(&self.builddir).join(&self.menuname);
        let gtl_dir = work_dir.join(GTL_DIR);
        let impl_dir = work_dir.join(IMPL_DIR);
        let work = work_dir.join(WORK_DIR);

        println!("info: starting HLS build flow ...");
        println!("info: menu directory: {}", menu_dir.display());
        println!("info: build directory: {}", work_dir.display());
        println!("info: vivado version: {}", vivado_version);
        println!("info: fw tag: {}", tag);
        println!("info: build version: {}", self.build.to_prefixed());
        println!("info: module: {}", module);

        std::fs::create_dir_all(&work_dir)?;
        let git = ExtGit::new().command(None);
        git.clone(config.get_gtl_repo(), &gtl_dir)?;
        git.clone(config.get_impl_repo(), &impl_dir)?;

        // configure the HLS project for the selected menu module
        filesystem::invoke(
            &gtl_dir,
            PYTHON,
            &[
                String::from(MANAGE),
                String::from("init"),
                menu_dir.display().to_string(),
                module.to_string(),
            ],
        )?;

        let exe = filesystem::get_exe_path()?;
        let session = Self::session_name(&self.build);
        let manifest = Self::manifest_path(&work, &self.build, &tag);
        let script = Self::session_script(
            &exe,
            &gtl_dir,
            &impl_dir,
            &menu_dir,
            &work,
            &self.build,
            &tag,
            &vivado_version,
            &manifest,
        );

        println!(
            "info: starting screen session '{}' for HLS and FW synthesis ...",
            session
        );
        let screen = Screen::new().command(None);
        screen.submit(&session, &script)?;
        screen.list();
        println!("info: done.");
        Ok(())
    }
}

impl Flow {
    /// One session per build, eg. `hls_0x1001`.
    fn session_name(build: &BuildVersion) -> String {
        format!("hls_{}", build.to_prefixed())
    }

    /// Where the materializer inside the session will write its manifest.
    fn manifest_path(work: &Path, build: &BuildVersion, tag: &str) -> PathBuf {
        work.join("mp7_ugt")
            .join(build.to_prefixed())
            .join(tag)
            .join("build")
            .join(Manifest::filename(build))
    }

    /// The full pipeline run inside the session: cosimulation, IP export,
    /// materialization, then synthesis launch. Each stage only proceeds when
    /// the previous one succeeded.
    fn session_script(
        exe: &Path,
        gtl_dir: &Path,
        impl_dir: &Path,
        menu_dir: &Path,
        work: &Path,
        build: &BuildVersion,
        tag: &str,
        vivado: &VivadoVersion,
        manifest: &Path,
    ) -> String {
        format!(
            "cd {gtl} && \
             {py} {manage} cosim && \
             {py} {manage} export && \
             {exe} make {menu} --path {work} --build {build} --tag {tag} --hls {gtl}/{ip} --fwpath {fw} && \
             {exe} synth {vivado} {manifest}",
            gtl = gtl_dir.display(),
            py = PYTHON,
            manage = MANAGE,
            exe = exe.display(),
            menu = menu_dir.display(),
            work = work.display(),
            build = build.to_prefixed(),
            tag = tag,
            ip = EXPORTED_IP_DIR,
            fw = impl_dir.display(),
            vivado = vivado,
            manifest = manifest.display(),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn session_name_carries_the_build() {
        let build = BuildVersion::from_str("0xABCD").unwrap();
        assert_eq!(Flow::session_name(&build), "hls_0xabcd");
    }

    #[test]
    fn manifest_path_follows_the_tag() {
        let build = BuildVersion::from_str("1001").unwrap();
        assert_eq!(
            Flow::manifest_path(Path::new("/home/operator/hls/work"), &build, "mp7fw_v2_4_1"),
            PathBuf::from(
                "/home/operator/hls/work/mp7_ugt/0x1001/mp7fw_v2_4_1/build/build_0x1001.cfg"
            )
        );
        // a different tag shifts the checkout component as well
        assert_eq!(
            Flow::manifest_path(Path::new("/home/operator/hls/work"), &build, "mp7fw_v3_0_0"),
            PathBuf::from(
                "/home/operator/hls/work/mp7_ugt/0x1001/mp7fw_v3_0_0/build/build_0x1001.cfg"
            )
        );
    }

    #[test]
    fn script_chains_every_stage() {
        let build = BuildVersion::from_str("1001").unwrap();
        let vivado = VivadoVersion::from_str("2018.2").unwrap();
        let script = Flow::session_script(
            Path::new("/usr/local/bin/ugt"),
            Path::new("/home/op/hls/L1Menu_Test/hls4gtl"),
            Path::new("/home/op/hls/L1Menu_Test/mp7ugt_hls"),
            Path::new("/home/op/menus/L1Menu_Test"),
            Path::new("/home/op/hls/L1Menu_Test/work"),
            &build,
            "mp7fw_v2_4_1",
            &vivado,
            Path::new("/home/op/hls/L1Menu_Test/work/mp7_ugt/0x1001/mp7fw_v2_4_1/build/build_0x1001.cfg"),
        );
        // the stages appear in order and are joined by '&&'
        let cosim = script.find("manage.py cosim").unwrap();
        let export = script.find("manage.py export").unwrap();
        let make = script.find("ugt make").unwrap();
        let synth = script.find("ugt synth 2018.2").unwrap();
        assert!(cosim < export && export < make && make < synth);
        assert_eq!(script.matches("&&").count(), 4);
        assert!(script.contains("--hls /home/op/hls/L1Menu_Test/hls4gtl/hls_impl/solution1/impl/ip"));
        assert!(script.contains("--fwpath /home/op/hls/L1Menu_Test/mp7ugt_hls"));
    }
}
