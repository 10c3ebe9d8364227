//! `storykit stories` - list and render the built-in stories

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};

use storykit::stories::{Story, StoryBook};

pub fn list(json: bool) -> Result<()> {
    let book = StoryBook::with_builtin_catalogs()?;

    if json {
        let entries: Vec<Value> = book
            .entries()
            .iter()
            .map(|entry| {
                json!({
                    "id": entry.id(),
                    "namespace": entry.namespace,
                    "name": entry.name,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let mut current = "";
    for entry in book.entries() {
        if entry.namespace != current {
            current = entry.namespace;
            println!("\n📚 {}", current.bold());
        }
        println!("  • {}", entry.id());
    }
    Ok(())
}

pub fn show(id: &str, updates: &[String], json: bool, interactive: bool) -> Result<()> {
    let book = StoryBook::with_builtin_catalogs()?;
    let mut story = book.find(id)?.story();

    for update in updates {
        apply(&mut story, update)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&story.to_json())?);
        return Ok(());
    }

    println!("{}", story.render());
    if interactive {
        run_interactive(&mut story)?;
    }
    Ok(())
}

/// Read `key=<json>` lines until EOF or an empty line
fn run_interactive(story: &mut Story) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", "args>".dimmed());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            break;
        }

        match apply(story, &line) {
            Ok(()) => println!("{}", story.render()),
            Err(err) => eprintln!("❌ {:#}", err),
        }
    }
    Ok(())
}

fn apply(story: &mut Story, update: &str) -> Result<()> {
    let (key, value) = parse_update(update)?;
    if let Some(action) = story.update_args([(key, value)]) {
        println!("🎬 updateArgs {}", action);
    }
    Ok(())
}

/// `key=<json>`; values that are not valid JSON are taken as strings
fn parse_update(update: &str) -> Result<(String, Value)> {
    let (key, raw) = update
        .split_once('=')
        .with_context(|| format!("Expected key=<json>, got '{}'", update))?;
    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("Empty arg name in '{}'", update);
    }
    let value = serde_json::from_str(raw.trim()).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_update() {
        assert_eq!(parse_update("number=5").unwrap(), ("number".to_string(), json!(5)));
        assert_eq!(
            parse_update("obj={\"a\": [1, 2]}").unwrap(),
            ("obj".to_string(), json!({"a": [1, 2]}))
        );
        assert_eq!(
            parse_update("label=hello world").unwrap(),
            ("label".to_string(), json!("hello world"))
        );
        assert!(parse_update("no-equals").is_err());
        assert!(parse_update("=1").is_err());
    }

    #[test]
    fn test_apply_updates_args_story() -> Result<()> {
        let book = StoryBook::with_builtin_catalogs()?;
        let mut story = book.find("typescript/scalars")?.story();
        apply(&mut story, "bool=true")?;
        assert_eq!(story.to_json()["args"]["bool"], json!(true));
        assert_eq!(story.to_json()["args"]["number"], Value::Null);
        Ok(())
    }
}
