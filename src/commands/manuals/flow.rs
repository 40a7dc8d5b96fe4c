pub const MANUAL: &str = "\
NAME
    flow - run the end-to-end HLS build flow

SYNOPSIS
    ugt flow [options] --build <version> <builddir> <menupath> <menuname>

DESCRIPTION
    This command chains the whole pipeline inside one detached screen
    session named 'hls_0x<build>'. The menu is read from
    '$HOME/<menupath>/<menuname>' and a working area is prepared at
    '$HOME/<builddir>/<menuname>'. The HLS algorithm and firmware
    implementation repositories are cloned into the working area and the
    HLS project is initialized for the selected menu module.

    The session then runs cosimulation, exports the IP core, materializes
    the build area with 'ugt make', and launches synthesis with
    'ugt synth'. A later stage only runs when the one before it
    succeeded.

    The Xilinx Vivado installation is verified before the session is
    submitted so a missing vendor environment fails in the foreground
    rather than inside the detached session.

OPTIONS
    <builddir>
        Build directory created under the user's home directory.

    <menupath>
        Menu directory path under the user's home directory.

    <menuname>
        Name of the trigger menu, eg. 'L1Menu_Test'.

    --build <version>
        Firmware build version as a hexadecimal number.

    --vivado <version>
        Xilinx Vivado version to synthesize with. Defaults to the
        configured version.

    --module <index>
        Menu module driving the HLS project. Defaults to 0.

    --tag <tag>
        Firmware release tag to check out. Defaults to the configured tag.

EXAMPLES
    ugt flow hls-builds menus L1Menu_Test --build 0x1001 --vivado 2018.2
";
