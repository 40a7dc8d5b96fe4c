pub const HELP: &str = r#"Launch synthesis sessions from a build manifest.

Usage:
    ugt synth [options] <vivado> <manifest>

Args:
    <vivado>                xilinx vivado version, eg. 2018.2
    <manifest>              path to the build manifest file

Options:
    --tclfile <name>        name of the tcl script inside each module
    --vivado-base-dir <dir> override the vivado installation root

Use 'ugt help synth' to read more about the command.
"#;
