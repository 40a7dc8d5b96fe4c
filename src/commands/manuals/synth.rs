pub const MANUAL: &str = "\
NAME
    synth - launch synthesis sessions from a build manifest

SYNOPSIS
    ugt synth [options] <vivado> <manifest>

DESCRIPTION
    This command reads a build manifest written by 'ugt make' and submits
    one detached screen session per menu module. Each session sources the
    Xilinx Vivado environment, generates the vendor project, integrates
    the HLS IP core, and builds the bitfile. A later stage only runs when
    the one before it succeeded.

    The vendor environment is resolved before anything is submitted: the
    configured installation roots are probed in priority order for the
    version's 'settings64.sh', and a missing installation is fatal with
    every probed path named.

    A successful run means every session was handed off to the
    multiplexer, not that synthesis finished. Attach to a session, eg.
    'screen -r build_1001_0', to supervise it.

OPTIONS
    <vivado>
        Xilinx Vivado version following the 'YYYY.N' pattern, eg. 2018.2.

    <manifest>
        Path to the build manifest file, eg. 'build_0x1001.cfg'.

    --tclfile <name>
        Name of the tcl script run inside each module's build directory.
        Defaults to 'addHlsIpCore.tcl'.

    --vivado-base-dir <dir>
        Override the installation roots with one directory.

EXAMPLES
    ugt synth 2018.2 ~/work/mp7_ugt/0x1001/mp7fw_v2_4_1/build/build_0x1001.cfg
";
