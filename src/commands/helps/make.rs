pub const HELP: &str = r#"Create a build area for a trigger menu.

Usage:
    ugt make [options] --path <dir> --build <version> --hls <path> --fwpath <dir> <menu>

Args:
    <menu>                  path to the trigger menu directory

Options:
    --path <dir>            parent directory receiving the build area
    --build <version>       firmware build version, eg. 0x1001
    --hls <path>            path to the exported HLS IP core
    --fwpath <dir>          path to the uGT firmware sources
    --tag <tag>             firmware release tag to check out
    --board <type>          board type: mp7_690es, mp7xe_690
    --tclfile <name>        name for the generated tcl script

Use 'ugt help make' to read more about the command.
"#;
