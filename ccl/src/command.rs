use crate::terminal::Stylus;
use crate::{constants::*, utils::*};
use anyhow::Error;
use ccl_logic::{
    decompose_with, inspect,
    trace::{subscriber::JsonLogger, DEFAULT_JSON_LOG_FILE},
    transform::{NotAndStrategy, DEFAULT_MAX_DEPTH},
    Options,
};
use itertools::Itertools;
use std::{fs, path::PathBuf};
use structopt::StructOpt;

#[derive(StructOpt)]
enum ProcessCommand {
    #[structopt(
        name = "decompose",
        about = "Decompose a checker condition into OR-free fragments"
    )]
    Decompose {
        #[structopt(
            short = "i",
            long = "input",
            parse(from_os_str),
            help = "Path to the input condition file"
        )]
        input: Option<PathBuf>,
        #[structopt(
            short = "o",
            long = "output",
            parse(from_os_str),
            help = "Directory to save the fragments in"
        )]
        output: Option<PathBuf>,
    },
    #[structopt(
        name = "inspect",
        about = "Show every stage of the decomposition of a checker condition"
    )]
    Inspect {
        #[structopt(
            short = "i",
            long = "input",
            parse(from_os_str),
            help = "Path to the input condition file"
        )]
        input: Option<PathBuf>,
    },
}

fn read_condition(input: Option<PathBuf>) -> Result<String, Error> {
    if let Some(input) = input {
        read_condition_from_file(&input)
    } else {
        read_condition_from_stdin()
    }
}

impl ProcessCommand {
    fn run(self, options: &Options, stylus: &Stylus) -> Result<(), Error> {
        match self {
            ProcessCommand::Decompose { input, output } => {
                let condition = read_condition(input)?;

                stylus.set(STYLE_INFO);
                println!("Decomposing condition:");

                stylus.set(STYLE_CONDITION);
                println!("{}", condition.trim());
                println!();

                let fragments = decompose_with(&condition, options)
                    .map_err(|e| Error::new(e).context("failed to decompose the input condition"))?;

                let mut count = 0;
                fragments
                    .iter()
                    .for_each(|f| print_fragment(f, stylus, &mut count));

                println!();
                stylus.set(STYLE_INFO);
                println!(
                    "{} fragments were found with the {} NOT-AND strategy.",
                    count, options.not_and
                );

                if let Some(output) = output {
                    let paths = save_fragments(&output, &fragments)?;
                    println!("{} files were written to {}.", paths.len(), output.display());
                }
                println!();
                Ok(())
            }
            ProcessCommand::Inspect { input } => {
                let condition = read_condition(input)?;
                let decomposition = inspect(&condition, options)
                    .map_err(|e| Error::new(e).context("failed to decompose the input condition"))?;

                print_section("Condition", condition.trim(), STYLE_CONDITION, stylus);
                print_section(
                    "Expression",
                    &decomposition.expression().to_string(),
                    STYLE_EXPRESSION,
                    stylus,
                );
                print_section(
                    "Symbols",
                    &serde_json::to_string_pretty(decomposition.table())?,
                    STYLE_EXPRESSION,
                    stylus,
                );
                print_section(
                    "Negation normal form",
                    &decomposition.nnf().to_string(),
                    STYLE_EXPRESSION,
                    stylus,
                );
                print_section(
                    "Distributed",
                    &decomposition.distributed().to_string(),
                    STYLE_EXPRESSION,
                    stylus,
                );
                print_section(
                    "Fragments",
                    &decomposition.fragments().iter().join("\n"),
                    STYLE_EXPRESSION,
                    stylus,
                );
                print_section(
                    "Reconstruction",
                    &decomposition.reconstruct(),
                    STYLE_CONDITION,
                    stylus,
                );
                Ok(())
            }
        }
    }
}

#[derive(StructOpt)]
#[structopt(
    name = "ccl",
    about = "A tool for decomposing checker conditions into independently testable scenarios"
)]
#[structopt(setting = structopt::clap::AppSettings::ColoredHelp)]
pub(super) struct Command {
    #[structopt(subcommand)]
    command: ProcessCommand,
    #[structopt(
        long = "not-and",
        default_value = "simple",
        help = "Strategy for negating conjunctions: simple or expanded."
    )]
    not_and: NotAndStrategy,
    #[structopt(long = "max-depth", help = "Bound the nesting depth of the input condition.")]
    max_depth: Option<usize>,
    #[structopt(long = "no-color", help = "Disable colored output.")]
    no_color: bool,
    #[structopt(
        short = "l",
        long = "log",
        parse(from_os_str),
        help = "Path to the log file."
    )]
    log: Option<PathBuf>,
}

impl Command {
    pub fn run(self) -> Result<(), Error> {
        let process = self.command;
        let stylus = stylus(!self.no_color);
        let options = Options {
            not_and: self.not_and,
            max_depth: self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
        };

        if !self.no_color {
            stylus.set(STYLE_LOGO);
            println!("{}", ASCII_ART);
        }

        let run = || process.run(&options, &stylus);

        if let Some(log) = self.log {
            let log = if log.as_os_str().is_empty() {
                PathBuf::from(DEFAULT_JSON_LOG_FILE)
            } else {
                log
            };
            let log = fs::File::create(log)
                .map_err(|e| Error::new(e).context("failed to create the log file"))?;
            let logger = JsonLogger::new(log);
            tracing::subscriber::with_default(logger, run)
        } else {
            run()
        }
    }
}
