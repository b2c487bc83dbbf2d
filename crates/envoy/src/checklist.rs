use anyhow::Result;
use std::io::{self, Write};
use std::sync::Arc;
use citykey_shared::checklist::{find, TaskId, TASKS};
use citykey_shared::language::Direction;
use citykey_shared::{Catalog, Checklist, Db, Language};

/// Right-to-left mark, so terminals lay out Arabic and Urdu lines correctly.
const RLM: char = '\u{200F}';

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Expand(TaskId),
    Toggle(TaskId),
    Reset,
    Quit,
    Unknown,
}

pub fn parse_command(input: &str) -> Command {
    let mut parts = input.split_whitespace();
    let first = parts.next().unwrap_or("");
    let second = parts.next();

    match (first.to_lowercase().as_str(), second) {
        ("quit" | "q", None) => Command::Quit,
        ("reset", None) => Command::Reset,
        ("done" | "d", Some(id)) => id.parse().map(Command::Toggle).unwrap_or(Command::Unknown),
        (id, None) => id.parse().map(Command::Expand).unwrap_or(Command::Unknown),
        _ => Command::Unknown,
    }
}

pub fn render(checklist: &Checklist, catalog: &Catalog, lang: Language) -> String {
    let t = |key: &'static str| catalog.text(lang, key).to_string();
    let mut out = String::new();

    out.push_str(&format!("{}\n", t("checklist_title")));
    out.push_str(&format!("{}\n\n", t("checklist_subtitle")));
    out.push_str(&format!(
        "{}% {}  ·  {}/{} {}\n\n",
        checklist.progress_percent(),
        t("checklist_progress"),
        checklist.completed_count(),
        checklist.total(),
        t("checklist_tasks_completed"),
    ));

    for task in &TASKS {
        let mark = if checklist.is_completed(task.id) { "[x]" } else { "[ ]" };
        out.push_str(&format!("{} {}. {} {}\n", mark, task.id, task.icon, task.title(catalog, lang)));

        if checklist.is_expanded(task.id) {
            out.push_str(&format!("      {}\n", task.description(catalog, lang)));
            out.push_str(&format!("      {}: {}\n", t("checklist_documents_needed"), task.documents(catalog, lang)));
            out.push_str(&format!("      {}: {}\n", t("checklist_where"), task.location(catalog, lang)));
            out.push_str(&format!("      {}: {}\n", t("checklist_fee"), task.fee(catalog, lang)));
            let action = if checklist.is_completed(task.id) {
                format!("{} ✓", t("checklist_done"))
            } else {
                format!("{}: done {}", t("checklist_mark_done"), task.id)
            };
            out.push_str(&format!("      {}\n", action));
        }
    }

    match lang.direction() {
        Direction::Ltr => out,
        Direction::Rtl => out
            .lines()
            .map(|line| if line.is_empty() { String::new() } else { format!("{}{}", RLM, line) })
            .collect::<Vec<_>>()
            .join("\n") + "\n",
    }
}

/// Apply a command, returning a notice for the user when it could not be applied.
pub fn apply(checklist: &mut Checklist, command: Command) -> Option<String> {
    match command {
        Command::Expand(id) | Command::Toggle(id) if find(id).is_none() => {
            Some(format!("Unknown task {}", id))
        }
        Command::Expand(id) => {
            checklist.toggle_expand(id);
            None
        }
        Command::Toggle(id) => {
            checklist.toggle_complete(id);
            None
        }
        Command::Reset => {
            checklist.reset();
            None
        }
        Command::Quit => None,
        Command::Unknown => Some("Unrecognized command".to_string()),
    }
}

pub fn run(db: Db, language: Language) -> Result<()> {
    let catalog = Catalog::embedded();
    let mut checklist = Checklist::load(Arc::new(db));

    loop {
        println!("{}", render(&checklist, &catalog, language));
        print!("<n> details · done <n> · reset · quit > ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        let command = parse_command(input.trim());
        if command == Command::Quit {
            break;
        }
        if let Some(notice) = apply(&mut checklist, command) {
            println!("{}\n", notice);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use citykey_shared::checklist::MemoryStorage;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("3"), Command::Expand(3));
        assert_eq!(parse_command("done 2"), Command::Toggle(2));
        assert_eq!(parse_command("D 6"), Command::Toggle(6));
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("reset"), Command::Reset);
        assert_eq!(parse_command("done"), Command::Unknown);
        assert_eq!(parse_command("done x"), Command::Unknown);
        assert_eq!(parse_command("hello"), Command::Unknown);
        assert_eq!(parse_command(""), Command::Unknown);
    }

    #[test]
    fn render_shows_progress_and_single_expanded_task() {
        let catalog = Catalog::embedded();
        let mut checklist = Checklist::load(Arc::new(MemoryStorage::new()));
        checklist.toggle_complete(1);
        checklist.toggle_complete(2);
        checklist.toggle_complete(3);
        checklist.toggle_expand(4);

        let out = render(&checklist, &catalog, Language::En);
        assert!(out.contains("50% complete"));
        assert!(out.contains("3/6 tasks completed"));
        assert!(out.contains("[x] 1."));
        assert!(out.contains("[ ] 4."));
        assert_eq!(out.matches("Where to go:").count(), 1);
        assert!(out.contains("Mark as done: done 4"));
    }

    #[test]
    fn render_falls_back_to_english_fields() {
        let catalog = Catalog::embedded();
        let mut checklist = Checklist::load(Arc::new(MemoryStorage::new()));
        checklist.toggle_expand(3);

        let out = render(&checklist, &catalog, Language::Ar);
        assert!(out.contains("تفعيل الكهرباء والمياه"));
        assert!(out.contains("AED 100 connection"));
    }

    #[test]
    fn unknown_task_is_reported_and_changes_nothing() {
        let mut checklist = Checklist::load(Arc::new(MemoryStorage::new()));

        assert_eq!(apply(&mut checklist, Command::Toggle(99)).as_deref(), Some("Unknown task 99"));
        assert_eq!(apply(&mut checklist, Command::Expand(0)).as_deref(), Some("Unknown task 0"));
        assert!(checklist.completed_ids().is_empty());
        assert_eq!(checklist.expanded(), None);
    }

    #[test]
    fn known_commands_apply_silently() {
        let mut checklist = Checklist::load(Arc::new(MemoryStorage::new()));

        assert_eq!(apply(&mut checklist, Command::Toggle(2)), None);
        assert_eq!(apply(&mut checklist, Command::Expand(2)), None);
        assert!(checklist.is_completed(2));
        assert!(checklist.is_expanded(2));

        assert_eq!(apply(&mut checklist, Command::Reset), None);
        assert_eq!(checklist.completed_count(), 0);
    }

    #[test]
    fn rtl_languages_mark_every_line() {
        let catalog = Catalog::embedded();
        let checklist = Checklist::load(Arc::new(MemoryStorage::new()));

        let arabic = render(&checklist, &catalog, Language::Ar);
        assert!(arabic.lines().filter(|l| !l.is_empty()).all(|l| l.starts_with(RLM)));

        let english = render(&checklist, &catalog, Language::En);
        assert!(!english.contains(RLM));
    }
}
