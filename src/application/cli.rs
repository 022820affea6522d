#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;
use std::path;

use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::pages::PageRequest;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Emotion;
use crate::domain::models::PageEvent;
use crate::domain::models::PageKind;
use crate::domain::models::StoreName;
use crate::domain::services::Assets;
use crate::domain::services::SessionContext;
use crate::infrastructure::storage::FileStore;
use crate::infrastructure::storage::StoreManager;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

async fn print_session() -> Result<()> {
    let store_name = StoreName::parse(Config::get(ConfigKey::Store))
        .ok_or_else(|| return anyhow!("Unknown store {}", Config::get(ConfigKey::Store)))?;
    let session = SessionContext::load(StoreManager::get(store_name)?).await?;

    if let Some(session_id) = session.current() {
        println!("{session_id}");
    } else {
        println!("There is no session yet. It is assigned when you share your first post!");
    }

    return Ok(());
}

fn emotions_help() -> String {
    return Emotion::VARIANTS.join(", ");
}

fn arg_out() -> Arg {
    return Arg::new("out")
        .short('o')
        .long("out")
        .num_args(1)
        .value_parser(value_parser!(path::PathBuf))
        .help("Directory to write the rendered page and its static assets to. The page is printed to stdout when omitted.");
}

fn subcommand_share() -> Command {
    return Command::new("share")
        .about("Share how you feel and get AI feedback, similar posts and suggestions.")
        .arg(
            Arg::new("emotion")
                .short('e')
                .long("emotion")
                .num_args(1)
                .required(true)
                .help(format!("How you feel. Emotions with their own icon: {}", emotions_help())),
        )
        .arg(
            Arg::new("content")
                .help("What is on your mind.")
                .num_args(1..)
                .required(true),
        )
        .arg(arg_out());
}

fn subcommand_community() -> Command {
    return Command::new("community")
        .about("Browse community posts, optionally filtered by emotion.")
        .arg(
            Arg::new("emotion")
                .short('e')
                .long("emotion")
                .num_args(1)
                .help(format!("Only show posts for this emotion. Emotions with their own icon: {}", emotions_help())),
        )
        .arg(
            Arg::new("limit")
                .short('l')
                .long("limit")
                .num_args(1)
                .value_parser(value_parser!(u32))
                .help("Maximum number of posts to list."),
        )
        .arg(
            Arg::new("upvote")
                .short('u')
                .long("upvote")
                .num_args(1)
                .action(ArgAction::Append)
                .help("Upvote a listed post by ID. Can be repeated, every occurrence adds one vote."),
        )
        .arg(arg_out());
}

fn subcommand_session() -> Command {
    return Command::new("session")
        .about("Inspect the session assigned by the backend.")
        .arg_required_else_help(true)
        .subcommand(Command::new("show").about("Print the held session ID."))
        .subcommand(Command::new("path").about("Print the path of the file the session is stored in."));
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for moodshare")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running moodshare with environment variable RUST_LOG=moodshare")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        )
        .subcommand(
            Command::new("assets").about("List all bundled static assets.")
        );
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("moodshare")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .subcommand(subcommand_share())
        .subcommand(subcommand_community())
        .subcommand(subcommand_session())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(Command::new("manpages").about("Generates manpages and outputs to stdout."))
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("MOODSHARE_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::ApiUrl.to_string())
                .long(ConfigKey::ApiUrl.to_string())
                .env("MOODSHARE_API_URL")
                .num_args(1)
                .help(format!("Base URL of the moodshare backend. [default: {}]", Config::default(ConfigKey::ApiUrl)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Store.to_string())
                .long(ConfigKey::Store.to_string())
                .env("MOODSHARE_STORE")
                .num_args(1)
                .help(format!("Where the session is kept between runs. [default: {}]", Config::default(ConfigKey::Store)))
                .value_parser(PossibleValuesParser::new(StoreName::VARIANTS))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::StateFile.to_string())
                .long(ConfigKey::StateFile.to_string())
                .env("MOODSHARE_STATE_FILE")
                .num_args(1)
                .help(format!("File the session is stored in when using the file store. [default: {}]", Config::default(ConfigKey::StateFile)))
                .global(true),
        );
}

fn share_request(matches: &ArgMatches) -> Result<PageRequest> {
    let emotion = matches
        .get_one::<String>("emotion")
        .ok_or_else(|| return anyhow!("An emotion is required"))?;
    let content = matches
        .get_many::<String>("content")
        .map(|words| return words.map(|w| return w.as_str()).collect::<Vec<&str>>().join(" "))
        .unwrap_or_default();

    return Ok(PageRequest {
        kind: PageKind::Share,
        events: vec![
            PageEvent::Loaded,
            PageEvent::Submit {
                content,
                emotion: emotion.to_string(),
            },
        ],
        upvotes: vec![],
        limit: None,
        out_dir: matches.get_one::<path::PathBuf>("out").cloned(),
    });
}

fn community_request(matches: &ArgMatches) -> PageRequest {
    let mut events = vec![PageEvent::Loaded];
    if let Some(emotion) = matches.get_one::<String>("emotion") {
        // A filter replaces the initial listing, skip loading it at all.
        events = vec![PageEvent::Filter {
            emotion: Some(emotion.to_string()),
        }];
    }

    let upvotes = matches
        .get_many::<String>("upvote")
        .map(|ids| return ids.cloned().collect::<Vec<String>>())
        .unwrap_or_default();

    return PageRequest {
        kind: PageKind::Community,
        events,
        upvotes,
        limit: matches.get_one::<u32>("limit").copied(),
        out_dir: matches.get_one::<path::PathBuf>("out").cloned(),
    };
}

/// Parses arguments and runs any command that does not render a page.
/// Returns the page to open, if any.
pub async fn parse() -> Result<Option<PageRequest>> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("share", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            return Ok(Some(share_request(subcmd_matches)?));
        }
        Some(("community", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            return Ok(Some(community_request(subcmd_matches)));
        }
        Some(("session", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            match subcmd_matches.subcommand() {
                Some(("show", _)) => {
                    print_session().await?;
                }
                Some(("path", _)) => {
                    println!("{}", FileStore::default().file_path().display());
                }
                _ => {
                    subcommand_session().print_long_help()?;
                }
            }
        }
        Some(("debug", debug_matches)) => match debug_matches.subcommand() {
            Some(("log-path", _)) => {
                let log_path = Config::cache_dir().join("debug.log");
                println!("{}", log_path.to_string_lossy());
            }
            Some(("enum-config", _)) => {
                println!("{}", ConfigKey::VARIANTS.join("\n"));
            }
            Some(("assets", _)) => {
                println!("{}", Assets::list().join("\n"));
            }
            _ => {
                subcommand_debug().print_long_help()?;
            }
        },
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
            }
            _ => {
                subcommand_config().print_long_help()?;
            }
        },
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
        }
        _ => {
            build().print_long_help()?;
        }
    }

    return Ok(None);
}
