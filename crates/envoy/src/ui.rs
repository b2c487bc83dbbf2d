use crate::client::ApiClient;
use anyhow::Result;
use std::io::{self, Read, Write};
use citykey_shared::{ChatMessage, ChatResponse, Language};

/// Selects the bundled tenancy contract instead of a file.
pub const SAMPLE_FLAG: &str = "--sample";

const SAMPLE_CONTRACT: &str = include_str!("../samples/sample-contract.txt");

pub async fn single_message(client: ApiClient, language: Language, message: String) -> Result<()> {
    match client.chat(message, language, &[]).await {
        Ok(response) => print_reply(&response),
        Err(e) => eprintln!("Error: {}", e),
    }
    Ok(())
}

pub async fn interactive_chat(client: ApiClient, language: Language) -> Result<()> {
    println!("CityKey assistant ({}). Type 'quit' to exit.\n", language.native_name());

    // Kept for this session only
    let mut history: Vec<ChatMessage> = Vec::new();
    let mut demo_noted = false;

    loop {
        print!("You: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.eq_ignore_ascii_case("quit") {
            println!("Goodbye!");
            break;
        }

        if input.is_empty() {
            continue;
        }

        println!();

        match client.chat(input.to_string(), language, &history).await {
            Ok(response) => {
                if response.demo && !demo_noted {
                    println!("(demo mode: the server has no AI credential configured)\n");
                    demo_noted = true;
                }
                println!("CityKey: {}\n", response.response);
                history.push(ChatMessage::user(input));
                history.push(ChatMessage::assistant(response.response));
            }
            Err(e) => {
                eprintln!("Error: {}\n", e);
            }
        }
    }

    Ok(())
}

/// Explain a pasted document. `-` reads from stdin, `--sample` uses the bundled contract.
pub async fn explain_document(client: ApiClient, language: Language, source: &str) -> Result<()> {
    let document = read_document(source)?;
    if document.trim().is_empty() {
        return Err(anyhow::anyhow!("Nothing to explain: the document is empty"));
    }

    println!("Analyzing document...\n");
    match client.explain_document(&document, language).await {
        Ok(response) => print_reply(&response),
        Err(e) => {
            eprintln!("Sorry, I encountered an error while analyzing the document: {}", e);
        }
    }
    Ok(())
}

fn read_document(source: &str) -> Result<String> {
    if source == SAMPLE_FLAG {
        Ok(SAMPLE_CONTRACT.to_string())
    } else if source == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(std::fs::read_to_string(source)?)
    }
}

fn print_reply(response: &ChatResponse) {
    if response.demo {
        println!("(demo mode)\n");
    }
    println!("{}", response.response);
}
