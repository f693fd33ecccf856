// Command-line interface for formdown
//
// This binary turns markdown questionnaires into scripts that create the form,
// and offers an inspect command to look at how a document was understood.
//
// Usage:
//  formdown <input> [--to <renderer>] [--output <file>]    - Render a form (default)
//  formdown convert <input> [--to <renderer>] [-o <file>]  - Same as above (explicit)
//  formdown inspect <path> [<transform>]                   - Execute a transform (defaults to "model-treeviz")
//  formdown --list-renderers                               - List renderers and transforms
//
// The renderer is taken from --to, else detected from the output file extension,
// else `render.target` from the configuration.
//
// Extra Parameters:
//
// Renderer-specific parameters can be passed using --extra-<parameter-name> <value>.
// Known configuration keys are applied to the config first (function-name, indent,
// strict); anything left is passed to the renderer or transform.
// Example:
//  formdown survey.md --extra-function-name buildSurvey

use formdown_cli::transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use formdown::model::unresolved_targets;
use formdown::{parse_form, FormError, RendererRegistry};
use formdown_config::{FormdownConfig, Loader};
use std::collections::HashMap;
use std::fs;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("formdown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn markdown questionnaires into Google Forms scripts")
        .long_about(
            "formdown reads a markdown questionnaire and renders it, by default as a\n\
            Google Apps Script function that creates the form.\n\n\
            Commands:\n  \
            - convert: Render a questionnaire (default command)\n  \
            - inspect: View how the document was classified and parsed\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass renderer options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            formdown survey.md                          # Apps Script on stdout\n  \
            formdown survey.md -o survey.gs             # Write to a file\n  \
            formdown survey.md --to json                # Parsed model as JSON\n  \
            formdown survey.md --extra-strict           # Fail on unknown navigation targets\n  \
            formdown inspect survey.md lines-simple     # Line classification",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-renderers")
                .long("list-renderers")
                .help("List available renderers and inspect transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a formdown.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .short('l')
                .value_name("LEVEL")
                .help("Log level for diagnostics on stderr (overrides RUST_LOG and config)")
                .value_parser(clap::builder::PossibleValuesParser::new(LOG_LEVELS))
                .ignore_case(true)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Render a questionnaire (default command)")
                .long_about(
                    "Parse a markdown questionnaire and render it.\n\n\
                    Renderers:\n  \
                    - apps-script: Google Apps Script function (.gs, .js)\n  \
                    - json:        Parsed form model (.json)\n  \
                    - treeviz:     Tree view of the form (.tree)\n\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    formdown convert survey.md                     # Apps Script (stdout)\n  \
                    formdown convert survey.md -o form.gs          # Renderer from extension\n  \
                    formdown survey.md --to treeviz                # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Renderer to use (detected from --output, else from config)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect how a questionnaire is parsed")
                .long_about(
                    "View the document at different stages.\n\n\
                    Transforms:\n  \
                    - lines-simple:   Classification of every line\n  \
                    - model-json:     Parsed model as JSON\n  \
                    - model-treeviz:  Parsed model as a tree (default)\n\n\
                    Extra Parameters:\n  \
                    --extra-full      Include descriptions in the tree",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'model-treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A bare file path means the default convert command
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && cleaned_args[1] != "inspect"
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "help"
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-renderers") {
        handle_list_renderers_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    init_logging(
        matches.get_one::<String>("log-level").map(|s| s.as_str()),
        &config.logging.level,
    );

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let Some(path) = sub_matches.get_one::<String>("path") else {
                fail("Missing input path");
            };
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or("model-treeviz");
            handle_inspect_command(path, transform, &extra_params);
        }
        Some(("convert", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                fail("Missing input path");
            };
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let to = resolve_target(
                sub_matches.get_one::<String>("to").map(|s| s.as_str()),
                output,
                &config,
            );
            handle_convert_command(input, &to, output, &extra_params, &config);
        }
        _ => fail("Unknown subcommand. Use --help for usage information."),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

/// Logging goes to stderr so stdout stays clean for the rendered output.
///
/// Level: `--log-level`, else `RUST_LOG`, else `logging.level` from config.
fn init_logging(cli_level: Option<&str>, config_level: &str) {
    let filter = match cli_level {
        Some(level) => EnvFilter::new(level.to_lowercase()),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config_level.to_lowercase())),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Pick the renderer: explicit `--to`, then the output extension, then config.
fn resolve_target(to: Option<&str>, output: Option<&str>, config: &FormdownConfig) -> String {
    if let Some(to) = to {
        return to.to_string();
    }
    let detected =
        output.and_then(|path| RendererRegistry::default().detect_renderer_from_filename(path));
    detected.unwrap_or_else(|| config.render.target.clone())
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, transform: &str, extra_params: &HashMap<String, String>) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        fail(&format!("Error reading file '{path}': {e}"));
    });

    let output = transforms::execute_transform(&source, transform, extra_params)
        .unwrap_or_else(|e| fail(&format!("Execution error: {e}")));

    print!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &FormdownConfig,
) {
    let registry = RendererRegistry::default();

    if let Err(e) = registry.get(to) {
        fail(&format!("Error: {e}"));
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        fail(&format!("Error reading file '{input}': {e}"));
    });

    let form = parse_form(&source).unwrap_or_else(|e| fail(&format!("Parse error: {e}")));
    debug!(
        "Parsed '{}': {} sections, {} items",
        form.title,
        form.sections.len(),
        form.items().count()
    );

    let unresolved = unresolved_targets(&form);
    if !unresolved.is_empty() {
        if config.validation.strict_navigation {
            fail(&format!(
                "Validation error: {}",
                FormError::UnresolvedNavigation(unresolved)
            ));
        }
        for target in &unresolved {
            warn!("Navigation target not found: {target}");
        }
    }

    let mut render_options = config.render.params_for(to);
    for (key, value) in extra_params {
        render_options.insert(key.clone(), value.clone());
    }

    let result = registry
        .render_with_options(&form, to, &render_options)
        .unwrap_or_else(|e| fail(&format!("Render error: {e}")));

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                fail(&format!("Error writing file '{path}': {e}"));
            });
        }
        None => print!("{result}"),
    }
}

/// Handle the list-renderers command
fn handle_list_renderers_command() {
    let registry = RendererRegistry::default();

    println!("Renderers:");
    for name in registry.list_renderers() {
        if let Ok(renderer) = registry.get(&name) {
            println!(
                "  {name:<12} {} (.{})",
                renderer.description(),
                renderer.file_extensions().join(", .")
            );
        }
    }

    println!("\nInspect transforms:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> FormdownConfig {
    let loader = Loader::new().with_optional_file("formdown.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader
        .build()
        .unwrap_or_else(|err| fail(&format!("Failed to load configuration: {err}")))
}

/// Move known configuration keys out of the extras into the config.
fn apply_config_overrides(
    config: &mut FormdownConfig,
    extra_params: &mut HashMap<String, String>,
) {
    if let Some(name) = take_override(extra_params, &["function-name", "function_name"]) {
        config.render.function_name = name;
    }
    if let Some(indent) = extra_params.remove("indent") {
        config.render.indent = indent;
    }
    if let Some(raw) = take_override(extra_params, &["strict", "strict-navigation"]) {
        config.validation.strict_navigation = parse_bool_arg("strict", &raw);
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => fail(&format!("Invalid boolean value '{other}' for --extra-{flag}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_extra_args_empty() {
        let args = args(&["formdown", "inspect", "form.md"]);
        let (cleaned, extra) = parse_extra_args(&args);

        assert_eq!(cleaned, args);
        assert!(extra.is_empty());
    }

    #[test]
    fn test_parse_extra_args_mixed_with_regular_args() {
        let (cleaned, extra) = parse_extra_args(&args(&[
            "formdown",
            "convert",
            "form.md",
            "--extra-function-name",
            "buildSurvey",
            "--to",
            "apps-script",
        ]));

        assert_eq!(
            cleaned,
            args(&["formdown", "convert", "form.md", "--to", "apps-script"])
        );
        assert_eq!(extra.len(), 1);
        assert_eq!(extra.get("function-name"), Some(&"buildSurvey".to_string()));
    }

    #[test]
    fn test_parse_extra_args_boolean_flags() {
        let (cleaned, extra) = parse_extra_args(&args(&[
            "formdown",
            "form.md",
            "--extra-strict",
            "--extras-full",
        ]));

        assert_eq!(cleaned, args(&["formdown", "form.md"]));
        assert_eq!(extra.get("strict"), Some(&"true".to_string()));
        assert_eq!(extra.get("full"), Some(&"true".to_string()));
    }

    #[test]
    fn apply_config_overrides_updates_known_keys() {
        let mut config = load_cli_config(None);
        let mut extras = HashMap::new();
        extras.insert("function-name".to_string(), "buildRsvp".to_string());
        extras.insert("indent".to_string(), "\t".to_string());
        extras.insert("strict".to_string(), "yes".to_string());
        extras.insert("full".to_string(), "true".to_string());

        apply_config_overrides(&mut config, &mut extras);

        assert_eq!(config.render.function_name, "buildRsvp");
        assert_eq!(config.render.indent, "\t");
        assert!(config.validation.strict_navigation);
        assert_eq!(extras.len(), 1);
        assert!(extras.contains_key("full"));
    }

    #[test]
    fn target_prefers_flag_then_extension_then_config() {
        let config = load_cli_config(None);
        assert_eq!(resolve_target(Some("json"), Some("out.gs"), &config), "json");
        assert_eq!(resolve_target(None, Some("out.json"), &config), "json");
        assert_eq!(resolve_target(None, Some("out.txt"), &config), "apps-script");
        assert_eq!(resolve_target(None, None, &config), "apps-script");
    }

    #[test]
    fn cli_accepts_default_convert_arguments() {
        let matches = build_cli()
            .try_get_matches_from(args(&["formdown", "convert", "form.md", "-o", "form.gs"]))
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "convert");
        assert_eq!(sub.get_one::<String>("output").map(String::as_str), Some("form.gs"));
    }
}
