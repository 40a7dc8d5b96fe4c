use crate::commands::flow::Flow;
use crate::commands::help::Help;
use crate::commands::helps::ugt;
use crate::commands::make::Make;
use crate::commands::synth::Synth;
use crate::core::config;
use crate::core::context::Context;
use crate::util::environment;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Command, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Ugt {
    version: bool,
    command: Option<UgtSubcommand>,
}

impl Command for Ugt {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(cliproc::Help::with(ugt::HELP))?;
        Ok(Ugt {
            version: cli.check(Arg::flag("version"))?,
            command: cli.nest(Arg::subcommand("command"))?,
        })
    }

    fn execute(self) -> proc::Result {
        // prioritize version information
        if self.version == true {
            println!("ugt {}", VERSION);
            Ok(())
        // run the specified command
        } else if let Some(c) = self.command {
            // set up the shared runtime state
            let context = Context::new()
                .home(environment::UGT_HOME)?
                .settings(config::CONFIG_FILE)?;
            c.execute(&context)
        // if no command is given then print default help
        } else {
            println!("{}", ugt::HELP);
            Ok(())
        }
    }
}

#[derive(Debug, PartialEq)]
enum UgtSubcommand {
    Make(Make),
    Synth(Synth),
    Flow(Flow),
    Help(Help),
}

impl Subcommand<Context> for UgtSubcommand {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        match cli.select(&["make", "synth", "flow", "help"])?.as_ref() {
            "make" => Ok(UgtSubcommand::Make(Make::interpret(cli)?)),
            "synth" => Ok(UgtSubcommand::Synth(Synth::interpret(cli)?)),
            "flow" => Ok(UgtSubcommand::Flow(Flow::interpret(cli)?)),
            "help" => Ok(UgtSubcommand::Help(Help::interpret(cli)?)),
            _ => panic!("an unimplemented command was passed through!"),
        }
    }

    fn execute(self, c: &Context) -> proc::Result {
        match self {
            UgtSubcommand::Make(sub) => sub.execute(c),
            UgtSubcommand::Synth(sub) => sub.execute(c),
            UgtSubcommand::Flow(sub) => sub.execute(c),
            UgtSubcommand::Help(sub) => sub.execute(&()),
        }
    }
}

const VERSION: &str = env!("CARGO_PKG_VERSION");
