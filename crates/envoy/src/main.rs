mod checklist;
mod client;
mod config;
mod logging;
mod ui;

use anyhow::Result;
use client::ApiClient;
use config::Config;
use citykey_shared::Db;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    // Load config
    let mut config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return Err(e);
        }
    };

    // Parse args
    let args: Vec<String> = std::env::args().collect();

    let client = ApiClient::new(config.server_url.clone());

    // Handle commands — default to chat if no args
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("chat");

    match command {
        "chat" => {
            ui::interactive_chat(client, config.language).await?;
        }
        "explain" => match args.get(2) {
            Some(source) => ui::explain_document(client, config.language, source).await?,
            None => print_usage(),
        },
        "checklist" => {
            let db = Db::open(Config::data_path()?)?;
            checklist::run(db, config.language)?;
        }
        "config" => {
            if args.len() < 3 {
                println!("Current config:");
                println!("  Server URL: {}", config.server_url);
                println!("  Language: {} ({})", config.language, config.language.native_name());
            } else if args[2] == "set" && args.len() >= 5 {
                match args[3].as_str() {
                    "server" => {
                        config.server_url = args[4].clone();
                        config.save()?;
                        println!("Server URL updated to: {}", config.server_url);
                    }
                    "language" => {
                        config.set_language(&args[4])?;
                        println!("Language updated to: {}", config.language.name());
                    }
                    _ => print_usage(),
                }
            } else {
                print_usage();
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        message => {
            // Treat any other argument as a message
            ui::single_message(client, config.language, message.to_string()).await?;
        }
    }

    Ok(())
}

fn print_usage() {
    println!("Envoy - CityKey client");
    println!("\nUsage:");
    println!("  envoy chat                        Start interactive chat");
    println!("  envoy \"your question\"             Ask a single question");
    println!("  envoy explain FILE                Explain an Arabic document (- for stdin)");
    println!("  envoy explain {}          Explain the bundled sample tenancy contract", ui::SAMPLE_FLAG);
    println!("  envoy checklist                   Open the arrival checklist");
    println!("  envoy config                      Show current configuration");
    println!("  envoy config set server URL       Set server URL");
    println!("  envoy config set language CODE    Set language (en, ar, hi, ur, tl, fr, bn, ru)");
}
