use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of src/transforms.rs and the built-in renderers.
// Build scripts can't access src/ modules.
const AVAILABLE_TRANSFORMS: &[&str] = &["lines-simple", "model-json", "model-treeviz"];
const RENDERERS: &[&str] = &["apps-script", "json", "treeviz"];
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("formdown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn markdown questionnaires into Google Forms scripts")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-renderers")
                .long("list-renderers")
                .help("List available renderers and inspect transforms")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .short('l')
                .value_parser(clap::builder::PossibleValuesParser::new(LOG_LEVELS)),
        )
        .subcommand(
            Command::new("convert")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_parser(clap::builder::PossibleValuesParser::new(RENDERERS)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .arg(
                    Arg::new("path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .index(2)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_TRANSFORMS,
                        )),
                ),
        );

    generate_to(Bash, &mut cmd, "formdown", &outdir)?;
    generate_to(Zsh, &mut cmd, "formdown", &outdir)?;
    generate_to(Fish, &mut cmd, "formdown", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
