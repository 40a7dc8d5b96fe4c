use crate::commands::helps::synth;
use crate::core::context::Context;
use crate::core::manifest::Manifest;
use crate::core::menu;
use crate::core::session::Screen;
use crate::core::vivado;
use crate::core::vivado::VivadoVersion;
use std::path::PathBuf;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

/// The synthesis launcher: reads a build manifest and submits one detached
/// synthesis session per module.
#[derive(Debug, PartialEq)]
pub struct Synth {
    vivado: VivadoVersion,
    manifest: PathBuf,
    tclfile: Option<String>,
    vivado_base_dir: Option<PathBuf>,
}

impl Subcommand<Context> for Synth {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(synth::HELP))?;
        Ok(Synth {
            // Options
            tclfile: cli.get(Arg::option("tclfile").value("name"))?,
            vivado_base_dir: cli.get(Arg::option("vivado-base-dir").value("dir"))?,
            // Positionals
            vivado: cli.require(Arg::positional("vivado"))?,
            manifest: cli.require(Arg::positional("manifest"))?,
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        let manifest = Manifest::load(&self.manifest)?;
        // echo the manifest so the operator can verify what is being built
        print!("{}", manifest);
        println!(
            "info: preparing to start synthesis for menu '{}' ...",
            manifest.get_name()
        );

        // resolve the vendor environment before submitting anything
        let roots = match &self.vivado_base_dir {
            Some(dir) => vec![dir.clone()],
            None => c.get_config().get_vivado_search_paths(),
        };
        let settings = vivado::find_settings(&roots, &self.vivado)?;
        let tclfile = self
            .tclfile
            .as_deref()
            .unwrap_or(crate::core::tcl::TCL_ADD_HLS_IP_CORE);

        let screen = Screen::new().command(None);
        for i in 0..manifest.get_modules() {
            let session = Self::session_name(&manifest, i);
            let builddir = manifest.get_buildarea().join(menu::module_name(i));
            let script = Self::session_script(&settings, &builddir, tclfile);
            println!("info: starting screen session '{}' for module {} ...", session, i);
            screen.submit(&session, &script)?;
        }
        screen.list();
        println!("info: done.");
        Ok(())
    }
}

impl Synth {
    /// One session per module, eg. `build_1001_0`.
    fn session_name(manifest: &Manifest, index: usize) -> String {
        format!("build_{}_{}", manifest.get_build(), index)
    }

    /// The full pipeline run inside a session. Each stage only proceeds when
    /// the previous one succeeded.
    fn session_script(settings: &std::path::Path, builddir: &std::path::Path, tclfile: &str) -> String {
        format!(
            "source {}; cd {}; make project && vivado -mode batch -source {} && make bitfile",
            settings.display(),
            builddir.display(),
            tclfile
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::board::BoardType;
    use crate::core::menu::Menu;
    use crate::core::version::BuildVersion;
    use std::str::FromStr;

    fn sample_manifest(root: &std::path::Path, modules: usize) -> Manifest {
        let dir = root.join("L1Menu_Test");
        for i in 0..modules {
            std::fs::create_dir_all(dir.join("vhdl").join(menu::module_name(i)).join("src"))
                .unwrap();
        }
        let menu = Menu::load(dir).unwrap();
        Manifest::new(
            &BuildVersion::from_str("0x1001").unwrap(),
            &menu,
            modules,
            "mp7fw_v2_4_1",
            root.join("area"),
            BoardType::Mp7xe690,
        )
    }

    #[test]
    fn session_names_are_unique_per_module() {
        let scratch = tempfile::tempdir().unwrap();
        let manifest = sample_manifest(scratch.path(), 2);
        assert_eq!(Synth::session_name(&manifest, 0), "build_1001_0");
        assert_eq!(Synth::session_name(&manifest, 1), "build_1001_1");
    }

    #[test]
    fn script_chains_the_stages() {
        let script = Synth::session_script(
            std::path::Path::new("/opt/xilinx/Vivado/2018.2/settings64.sh"),
            std::path::Path::new("/work/area/module_0"),
            "addHlsIpCore.tcl",
        );
        assert_eq!(
            script,
            "source /opt/xilinx/Vivado/2018.2/settings64.sh; \
             cd /work/area/module_0; \
             make project && vivado -mode batch -source addHlsIpCore.tcl && make bitfile"
        );
    }
}
