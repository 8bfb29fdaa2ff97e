use clap::Arg;
use clap::Command;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

pub fn build() -> Command {
    return Command::new("phrasedeck")
        .about("A terminal board for collecting phrases")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .long(ConfigKey::ConfigFile.to_string())
                .help(format!(
                    "Path to a TOML configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .num_args(1),
        )
        .arg(
            Arg::new(ConfigKey::LogFile.to_string())
                .long(ConfigKey::LogFile.to_string())
                .help(format!(
                    "Where the UI writes its log [default: {}]",
                    Config::default(ConfigKey::LogFile)
                ))
                .num_args(1),
        )
        .arg(
            Arg::new(ConfigKey::MinPhraseLength.to_string())
                .long(ConfigKey::MinPhraseLength.to_string())
                .help(format!(
                    "Minimum number of characters a phrase must have [default: {}]",
                    Config::default(ConfigKey::MinPhraseLength)
                ))
                .num_args(1),
        );
}
