//! Interactive terminal front-end for the sociogram graph engine.
//!
//! Reads configuration from environment variables (see [`config::Config`]),
//! optionally seeds a demo cast, then runs a line-oriented command loop
//! against a [`SocialGraph`] until `quit` or end of input. The engine owns
//! the data; this binary owns everything presentational: prompts,
//! formatting, the confirmation step before `clear`, and the one-decimal
//! rounding of the average-friends stat.
//!
//! ## Quick start
//!
//! ```bash
//! # Interactive session with the demo cast
//! cargo run --bin sociogram
//!
//! # Empty network, debug logging
//! SOCIOGRAM_SEED=0 SOCIOGRAM_LOG_LEVEL=sociogram_graph=debug cargo run --bin sociogram
//! ```

use std::io::{self, BufRead, Write};

use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use sociogram_graph::{PersonId, SocialGraph};

mod commands;
mod config;

use commands::Command;
use config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "sociogram starting");

    let mut graph = SocialGraph::new();
    if config.seed {
        seed_demo_cast(&mut graph)?;
        info!(
            people = graph.person_count(),
            connections = graph.total_connections(),
            "seeded demo network"
        );
    }

    println!("sociogram - type `help` for commands");
    print_stats(&graph);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break; // end of input
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            // Destructive and irreversible, so confirm on the terminal.
            // The engine itself clears unconditionally when asked.
            Command::Clear => {
                print!("clear the entire network? this cannot be undone [y/N] ");
                io::stdout().flush()?;
                let confirmed = match lines.next() {
                    Some(answer) => answer?.trim().eq_ignore_ascii_case("y"),
                    None => false,
                };
                if confirmed {
                    graph.clear();
                    println!("network cleared");
                    print_stats(&graph);
                } else {
                    println!("kept the network");
                }
            }
            other => run_command(&mut graph, &config, other)?,
        }
    }

    info!("sociogram exiting");
    Ok(())
}

/// Apply one non-lifecycle command and render its outcome.
fn run_command(graph: &mut SocialGraph, config: &Config, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Add { name, bio } => {
            // The parser only yields whitespace-free name tokens, which keeps
            // the engine's non-empty-name caller contract.
            let person = graph.add_person(name, bio);
            println!("added {} (id {})", person.name, person.id);
            print_stats(graph);
        }
        Command::Connect(a, b) => match graph.add_connection(a, b) {
            Ok(()) => {
                println!("{} and {} are now friends", name_of(graph, a), name_of(graph, b));
                print_stats(graph);
            }
            Err(error) => {
                warn!(%error, "connect rejected");
                println!("{error}");
            }
        },
        Command::Remove(id) => {
            let label = name_of(graph, id);
            if graph.remove_person(id) {
                println!("removed {label}");
                print_stats(graph);
            } else {
                println!("no person with id {id}");
            }
        }
        Command::Path(a, b) => match graph.find_shortest_path(a, b) {
            Some(path) => {
                let hops = path.len() - 1;
                let names: Vec<String> = path.iter().map(|&id| name_of(graph, id)).collect();
                println!("{} ({hops} hop{})", names.join(" -> "), plural(hops));
            }
            None => println!(
                "{} and {} are not connected",
                name_of(graph, a),
                name_of(graph, b)
            ),
        },
        Command::Mutual(a, b) => {
            let mutual = graph.mutual_friends(a, b);
            if mutual.is_empty() {
                println!(
                    "{} and {} have no mutual friends",
                    name_of(graph, a),
                    name_of(graph, b)
                );
            } else {
                let names: Vec<String> = mutual.iter().map(|&id| name_of(graph, id)).collect();
                println!("mutual friends: {}", names.join(", "));
            }
        }
        Command::Suggest(id) => {
            let suggestions = graph.suggest_friends(id);
            if suggestions.is_empty() {
                println!("no friend suggestions for {}", name_of(graph, id));
            } else {
                println!("friend suggestions for {}:", name_of(graph, id));
                for suggestion in suggestions.iter().take(config.suggest_limit) {
                    println!(
                        "  {} ({} mutual friend{})",
                        name_of(graph, suggestion.person_id),
                        suggestion.mutual_count,
                        plural(suggestion.mutual_count)
                    );
                }
            }
        }
        Command::Degrees(a, b) => match graph.degrees_of_separation(a, b) {
            Some(0) => println!("same person"),
            Some(degrees) => println!(
                "{degrees} degree{} of separation between {} and {}",
                plural(degrees),
                name_of(graph, a),
                name_of(graph, b)
            ),
            None => println!(
                "{} and {} are not connected",
                name_of(graph, a),
                name_of(graph, b)
            ),
        },
        Command::List => {
            if graph.person_count() == 0 {
                println!("no people yet");
            }
            for person in graph.people() {
                println!(
                    "  [{}] {} - {} ({} friend{})",
                    person.id,
                    person.name,
                    person.bio,
                    person.friend_count(),
                    plural(person.friend_count())
                );
            }
        }
        Command::Stats => print_stats(graph),
        Command::Dump => println!("{}", serde_json::to_string_pretty(&graph.people())?),
        Command::Help => print_help(),
        // handled by the main loop
        Command::Clear | Command::Quit => unreachable!(),
    }
    Ok(())
}

/// Stats line, re-rendered after every mutation.
/// Average friends is rounded to one decimal here; the engine reports it
/// exact.
fn print_stats(graph: &SocialGraph) {
    println!(
        "people: {}  connections: {}  avg friends: {:.1}",
        graph.person_count(),
        graph.total_connections(),
        graph.average_friends()
    );
}

fn name_of(graph: &SocialGraph, id: PersonId) -> String {
    graph
        .person(id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| format!("#{id}"))
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

fn print_help() {
    println!(
        "commands:\n  \
         add <name> [bio…]     add a person\n  \
         connect <id> <id>     make two people friends\n  \
         remove <id>           remove a person and their connections\n  \
         path <id> <id>        shortest chain of friends\n  \
         mutual <id> <id>      friends both people share\n  \
         suggest <id>          ranked friend-of-friend suggestions\n  \
         degrees <id> <id>     degrees of separation\n  \
         list                  all people\n  \
         stats                 network statistics\n  \
         dump                  JSON snapshot of all people\n  \
         clear                 wipe the network (asks first)\n  \
         quit                  leave"
    );
}

/// A small cast so queries have something to chew on from the first prompt.
fn seed_demo_cast(graph: &mut SocialGraph) -> anyhow::Result<()> {
    let ada = graph.add_person("Ada", "analytical engines").id;
    let grace = graph.add_person("Grace", "compiler pioneer").id;
    let alan = graph.add_person("Alan", "universal machines").id;
    let katherine = graph.add_person("Katherine", "orbital mechanics").id;
    let edsger = graph.add_person("Edsger", "prefers shortest paths").id;
    graph.add_person("Barbara", "abstract data types");

    // Barbara starts disconnected so `path`/`degrees` can show the
    // not-connected case out of the box.
    for (a, b) in [
        (ada, grace),
        (grace, alan),
        (ada, katherine),
        (katherine, alan),
        (alan, edsger),
    ] {
        graph.add_connection(a, b)?;
    }
    Ok(())
}
