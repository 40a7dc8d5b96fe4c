pub const HELP: &str = r#"Ugt is a build orchestration tool for uGT trigger firmware.

Usage:
    ugt [options] [command]

Commands:
    make                  create a build area for a trigger menu
    synth                 launch synthesis sessions from a build manifest
    flow                  run the end-to-end HLS build flow

Options:
    --version             print version information and exit
    --help, -h            print help information

Use 'ugt help <command>' for more information about a command."#;
