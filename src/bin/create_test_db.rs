use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;

use project_vault::Database;

/// A utility for creating a test database for the REST API server of project_vault.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        Some(extension) if !extension.is_empty() => {}
        _ => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let database = Database::new(output_path);
    database.initialize()?;
    let conn = database.open()?;

    println!("Creating test projects...");

    let projects = [
        ("Website redesign", Some("Acme Ltd"), Some("Active"), Some(4500.0)),
        ("Mobile app", Some("Globex"), Some("On hold"), Some(12000.0)),
        ("Internal tooling", None, None, None),
    ];

    for (name, client, status, budget) in projects {
        conn.execute(
            "INSERT INTO projects (name, client, status, budget) VALUES (?1, ?2, ?3, ?4)",
            (name, client, status, budget),
        )?;
        let project_id = conn.last_insert_rowid();

        let transactions = [
            ("Deposit", Some("Income"), 1000.0, "2024-01-03"),
            ("Lunch with client", Some("Food"), -42.5, "2024-01-10"),
            ("Stock photos", None, -19.99, "2024-01-15"),
        ];

        for (description, category, amount, date) in transactions {
            conn.execute(
                "INSERT INTO transactions (project_id, description, category, amount, date)
                VALUES (?1, ?2, ?3, ?4, ?5)",
                (project_id, description, category, amount, date),
            )?;
        }
    }

    println!("Success!");

    Ok(())
}
