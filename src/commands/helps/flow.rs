pub const HELP: &str = r#"Run the end-to-end HLS build flow.

Usage:
    ugt flow [options] --build <version> <builddir> <menupath> <menuname>

Args:
    <builddir>              build directory under the user's home
    <menupath>              menu directory path under the user's home
    <menuname>              name of the trigger menu, eg. L1Menu_Test

Options:
    --build <version>       firmware build version, eg. 0x1001
    --vivado <version>      xilinx vivado version to synthesize with
    --module <index>        menu module driving the HLS project
    --tag <tag>             firmware release tag to check out

Use 'ugt help flow' to read more about the command.
"#;
