use log::{error, info};

use election_ledger::{config::DEFAULT_CONFIG_PATH, logging, Config, ElectionLedger, Error};

/// Run the school election: seed candidates and voters, cast the ballots,
/// show the results and save everything.
fn run(config: &Config) -> Result<(), Error> {
    let mut ledger = ElectionLedger::new();
    ledger.load_all(config.data_path())?;

    ledger.add_candidate("Aarav", "Head Boy");
    ledger.add_candidate("Vivaan", "Head Boy");
    ledger.add_candidate("Diya", "Head Girl");
    ledger.add_candidate("Isha", "Head Girl");

    for student_id in ["student001", "student002", "student003"] {
        ledger.register_voter(student_id);
    }

    let ballots = [
        ("student001", "Head Boy", "Aarav"),
        ("student002", "Head Boy", "Vivaan"),
        ("student003", "Head Girl", "Isha"),
    ];
    for (voter_id, role, candidate) in ballots {
        match ledger.cast_vote(voter_id, role, candidate) {
            Ok(receipt) => println!("{receipt}"),
            Err(err) => println!("Error: {err}"),
        }
    }

    ledger.display_results();
    ledger.save_all(config.data_path())?;
    Ok(())
}

fn main() {
    let config = match Config::load(DEFAULT_CONFIG_PATH) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1)
        }
    };

    // Set up logging.
    if let Err(err) = logging::init(&config) {
        eprintln!("{err}");
        std::process::exit(1)
    }
    info!("Initialised logging");

    if let Err(err) = run(&config) {
        error!("{err}");
        error!("Critical failure, shutting down");
        std::process::exit(1)
    }
}
