pub const MANUAL: &str = "\
NAME
    make - create a build area for a trigger menu

SYNOPSIS
    ugt make [options] --path <dir> --build <version> --hls <path>
             --fwpath <dir> <menu>

DESCRIPTION
    This command materializes a complete build area for every module of a
    trigger menu. The area is created at '<dir>/mp7_ugt/0x<version>' and
    must not already exist; a collision is fatal and leaves the existing
    tree untouched.

    The pinned firmware repository is cloned into the area under the
    release tag, the target package is patched with the build version and
    the operator's identity, and each menu module receives its own
    isolated project directory with a copy of the firmware sources, the
    module's generated constants package, and a tcl script integrating the
    exported HLS IP core.

    All inputs are validated before the first directory is created. On
    success a build manifest is written into the area's build directory;
    'ugt synth' reads that manifest to launch synthesis.

OPTIONS
    <menu>
        Path to the trigger menu directory. The directory name must start
        with 'L1Menu_' and carry the generated VHDL sources per module
        under 'vhdl/module_<i>/src'.

    --path <dir>
        Parent directory receiving the build area.

    --build <version>
        Firmware build version as a hexadecimal number, with or without
        the '0x' prefix.

    --hls <path>
        Path to the exported HLS IP core referenced by the tcl script.

    --fwpath <dir>
        Path to the uGT firmware sources replicated into each module.

    --tag <tag>
        Firmware release tag to check out. Defaults to the configured tag.

    --board <type>
        Board type: 'mp7_690es' or 'mp7xe_690' (default).

    --tclfile <name>
        Name for the generated tcl script. Defaults to 'addHlsIpCore.tcl'.

EXAMPLES
    ugt make /nfs/menus/L1Menu_Test --path ~/work --build 0x1001 \\
        --hls ~/hls/ip --fwpath ~/mp7ugt_hls
";
