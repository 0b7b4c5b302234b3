// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod print;

use anyhow::{Context, Result};
use config::Config;
use prospectus_app::{AppState, CategoryFilter, SectionKind};
use prospectus_tui::UiOptions;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `prospectus --print-example-config` to generate a v1 template",
            options.config_path.display()
        )
    })?;

    let section_override = options.section.as_deref().map(parse_section).transpose()?;
    let filter_override = options.filter.as_deref().map(parse_filter).transpose()?;

    let content = prospectus_content::stock()?;
    if options.check_only {
        return Ok(());
    }

    if options.json {
        println!("{}", print::render_json(&content)?);
        return Ok(());
    }

    if let Some(section) = section_override {
        let filter = filter_override.unwrap_or(CategoryFilter::All);
        print!("{}", print::render_section(&content, section, filter));
        return Ok(());
    }

    let mut state = AppState::default();
    state.section = config.start_section();
    state.services.filter = filter_override.unwrap_or_else(|| config.start_filter());

    let ui_options = UiOptions {
        mouse: config.mouse(),
        mono: config.mono(),
    };
    prospectus_tui::run_app(&mut state, &content, &ui_options)
}

fn parse_section(raw: &str) -> Result<SectionKind> {
    SectionKind::parse(raw).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown section {raw:?}; expected one of: {}",
            config::section_names()
        )
    })
}

fn parse_filter(raw: &str) -> Result<CategoryFilter> {
    CategoryFilter::parse(raw).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown filter {raw:?}; expected one of: {}",
            config::filter_names()
        )
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_example: bool,
    section: Option<String>,
    filter: Option<String>,
    json: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_example: false,
        section: None,
        filter: None,
        json: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--section" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--section requires a section name"))?;
                options.section = Some(value.as_ref().to_owned());
            }
            "--filter" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--filter requires a filter name"))?;
                options.filter = Some(value.as_ref().to_owned());
            }
            "--json" => {
                options.json = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("prospectus (Rust)");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a v1 config template");
    println!("  --section <name>         Print one section as plain text and exit");
    println!("  --filter <name>          Narrow the services grid before launch or print");
    println!("  --json                   Print the full site content as JSON and exit");
    println!("  --check                  Validate config + content and exit");
    println!("  --help                   Show this help");
}

#[cfg(test)]
mod tests {
    use super::{CliOptions, parse_cli_args, parse_filter, parse_section};
    use anyhow::Result;
    use prospectus_app::{CategoryFilter, SectionKind, ServiceCategory};
    use std::path::PathBuf;

    fn default_options_path() -> PathBuf {
        PathBuf::from("/tmp/prospectus-config.toml")
    }

    #[test]
    fn parse_cli_args_defaults_to_provided_config_path() -> Result<()> {
        let options = parse_cli_args(Vec::<String>::new(), default_options_path())?;
        assert_eq!(
            options,
            CliOptions {
                config_path: default_options_path(),
                print_config_path: false,
                print_example: false,
                section: None,
                filter: None,
                json: false,
                check_only: false,
                show_help: false,
            }
        );
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_config_path_override() -> Result<()> {
        let options = parse_cli_args(
            vec!["--config", "/custom/config.toml"],
            default_options_path(),
        )?;
        assert_eq!(options.config_path, PathBuf::from("/custom/config.toml"));
        Ok(())
    }

    #[test]
    fn parse_cli_args_errors_for_missing_config_value() {
        let error = parse_cli_args(vec!["--config"], default_options_path())
            .expect_err("missing config value should fail");
        assert!(error.to_string().contains("--config requires a file path"));
    }

    #[test]
    fn parse_cli_args_captures_section_and_filter_values() -> Result<()> {
        let options = parse_cli_args(
            vec!["--section", "services", "--filter", "ai"],
            default_options_path(),
        )?;
        assert_eq!(options.section.as_deref(), Some("services"));
        assert_eq!(options.filter.as_deref(), Some("ai"));
        Ok(())
    }

    #[test]
    fn parse_cli_args_errors_for_missing_section_value() {
        let error = parse_cli_args(vec!["--section"], default_options_path())
            .expect_err("missing section value should fail");
        assert!(error.to_string().contains("--section requires a section name"));
    }

    #[test]
    fn parse_cli_args_errors_for_missing_filter_value() {
        let error = parse_cli_args(vec!["--filter"], default_options_path())
            .expect_err("missing filter value should fail");
        assert!(error.to_string().contains("--filter requires a filter name"));
    }

    #[test]
    fn parse_cli_args_errors_for_unknown_argument() {
        let error = parse_cli_args(vec!["--wat"], default_options_path())
            .expect_err("unknown arg should fail");
        let message = error.to_string();
        assert!(message.contains("unknown argument"));
        assert!(message.contains("--help"));
    }

    #[test]
    fn parse_cli_args_sets_print_and_check_flags() -> Result<()> {
        let options = parse_cli_args(
            vec!["--print-config-path", "--print-example-config", "--check"],
            default_options_path(),
        )?;
        assert!(options.print_config_path);
        assert!(options.print_example);
        assert!(options.check_only);
        assert!(!options.json);
        assert!(!options.show_help);
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_json_flag() -> Result<()> {
        let options = parse_cli_args(vec!["--json"], default_options_path())?;
        assert!(options.json);
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_help_flag_for_long_and_short_variants() -> Result<()> {
        let long = parse_cli_args(vec!["--help"], default_options_path())?;
        assert!(long.show_help);

        let short = parse_cli_args(vec!["-h"], default_options_path())?;
        assert!(short.show_help);
        Ok(())
    }

    #[test]
    fn parse_section_accepts_every_label() -> Result<()> {
        for section in SectionKind::ALL {
            assert_eq!(parse_section(section.label())?, section);
        }
        Ok(())
    }

    #[test]
    fn parse_section_rejects_unknown_names_with_the_accepted_list() {
        let error = parse_section("pricing").expect_err("unknown section should fail");
        let message = error.to_string();
        assert!(message.contains("unknown section \"pricing\""), "got: {message}");
        assert!(message.contains("home"), "got: {message}");
        assert!(message.contains("contact"), "got: {message}");
    }

    #[test]
    fn parse_filter_maps_ai_to_the_ml_category() -> Result<()> {
        assert_eq!(
            parse_filter("ai")?,
            CategoryFilter::Only(ServiceCategory::Ai)
        );
        assert_eq!(parse_filter("all")?, CategoryFilter::All);
        Ok(())
    }

    #[test]
    fn parse_filter_rejects_unknown_names() {
        let error = parse_filter("devops").expect_err("unknown filter should fail");
        let message = error.to_string();
        assert!(message.contains("unknown filter \"devops\""), "got: {message}");
        assert!(message.contains("all, business"), "got: {message}");
    }
}
