use annai::prelude::*;
use clap::Parser;
use std::fs;
use std::io::{self, Write};

/// An interactive terminal wizard driving a branching dialog flow
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a dialog definition JSON file (defaults to the built-in
    /// ticket triage flow)
    #[arg(short, long)]
    flow: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let flow = match cli.flow {
        Some(path) => {
            let json = fs::read_to_string(&path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read flow file '{}': {}", path, e))
            });
            let definition = DialogDefinition::from_json(&json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to parse flow definition: {}", e))
            });
            DialogFlow::from_definition(definition).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to compile flow definition: {}", e))
            })
        }
        None => ticket_triage_flow(),
    };

    run_session(Arc::new(flow));
}

fn run_session(flow: Arc<DialogFlow>) {
    let mut session = DialogSession::new(flow);

    // The start step is usually a bare anchor; step off it immediately,
    // the way a chat view opens the dialog on its first real prompt.
    let bare_start = {
        let start = session.current_step();
        start.content().is_empty() && start.next().is_some()
    };
    if bare_start {
        session.advance();
    }

    loop {
        render_step(&session);

        let controls = session.controls();
        let action = prompt_for_input("Action");
        match action.as_str() {
            "q" => break,
            "b" if controls.back => session.back(),
            "n" if controls.forward.is_some() => session.advance(),
            choice => match choice.parse::<usize>() {
                Ok(index) if index >= 1 && index <= controls.menu.len() => {
                    session.select_branch(&controls.menu[index - 1]);
                }
                _ => println!("Unrecognized action '{}'.", choice),
            },
        }
    }

    println!("\nSession ended.");
}

fn render_step(session: &DialogSession) {
    let step = session.current_step();
    let controls = session.controls();

    if !step.content().is_empty() {
        println!("\n{}", step.content());
    }

    if !controls.menu.is_empty() {
        println!();
        for (index, key) in controls.menu.iter().enumerate() {
            let label = IssueType::from_key(key)
                .map(IssueType::label)
                .unwrap_or(key.as_str());
            let marker = if session.pending_branch() == Some(key.as_str()) {
                "*"
            } else {
                " "
            };
            println!(" {}{}: {}", marker, index + 1, label);
        }
    }

    if let Some(url) = ticket_url(step) {
        println!("\nOpen your ticket here: {}", url);
    }

    let mut actions: Vec<String> = Vec::new();
    if !controls.menu.is_empty() {
        actions.push(format!("1-{} = select", controls.menu.len()));
    }
    if let Some(label) = &controls.forward {
        actions.push(format!("n = {}", label));
    }
    if controls.back {
        actions.push("b = Back".to_string());
    }
    actions.push("q = Quit".to_string());
    println!("[{}]", actions.join(", "));
}

/// Prompts the user and reads one trimmed line from stdin.
fn prompt_for_input(prompt_text: &str) -> String {
    let mut line = String::new();
    print!("> {}: ", prompt_text);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    line.trim().to_string()
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
