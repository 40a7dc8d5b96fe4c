// General help for the ugt command-line tool.
pub const MANUAL: &str = "\
NAME
    ugt - uGT trigger firmware build orchestration

SYNOPSIS
    ugt [options] [command]

DESCRIPTION
    Ugt prepares, launches, and chains firmware synthesis builds for the
    CMS global trigger upgrade. Each subcommand covers one stage: 'make'
    lays out a fresh build area from a trigger menu, 'synth' submits one
    detached synthesis session per menu module, and 'flow' runs the
    complete HLS pipeline from algorithm cosimulation to bitfile
    generation.

    Detached sessions run under the terminal multiplexer 'screen'. Ugt
    reports a successful hand-off only; attach to a session to supervise
    the job inside it.

OPTIONS
    --version
        Print version information and exit

EXAMPLES
    ugt --version
    ugt help make
";
