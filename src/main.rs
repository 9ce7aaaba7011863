use clap::Parser;
use person_intro::utils::logger;
use person_intro::{CliConfig, Person};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting person-intro CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let people = [
        Person::new("Alice", 25, 5.9, true),
        Person::new("Bob", 30, 6.1, false),
    ];

    for person in &people {
        person.introduce();
    }

    tracing::info!("Introduced {} people", people.len());
}
