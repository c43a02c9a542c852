use crate::{
    kubeconfig::{self, ConfigStore},
    prompt,
};
use inquire::InquireError;
use owo_colors::OwoColorize;
use std::{fmt, process::ExitCode};

const TITLE: &str = "k8s";
const TOOLTIP: &str = "Kubernetes context switch";

pub fn active_label(context: &str) -> String {
    format!("Active context: {context}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Context(String),
    Quit,
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuEntry::Context(name) => f.write_str(name),
            MenuEntry::Quit => f.write_str("Quit"),
        }
    }
}

#[derive(Debug)]
pub struct Menu {
    pub label: String,
    pub entries: Vec<MenuEntry>,
    pub cursor: usize,
    pub notice: Option<String>,
}

impl Menu {
    pub fn build(store: &ConfigStore) -> Self {
        let current = kubeconfig::current(store);
        let contexts = kubeconfig::list(store);

        let label = match &current {
            Ok(name) => active_label(name),
            Err(err) => {
                tracing::warn!(error = %err, "could not read active context");
                active_label("unavailable")
            }
        };

        let (names, notice) = match contexts {
            Ok(names) => (names, None),
            Err(err) => {
                tracing::warn!(error = %err, "could not list contexts");
                (Vec::new(), Some(err.to_string()))
            }
        };

        let cursor = current
            .ok()
            .and_then(|active| names.iter().position(|name| *name == active))
            .unwrap_or(0);

        let mut entries: Vec<MenuEntry> = names.into_iter().map(MenuEntry::Context).collect();
        entries.push(MenuEntry::Quit);

        Self {
            label,
            entries,
            cursor,
            notice,
        }
    }
}

pub fn handle() -> ExitCode {
    let store = match ConfigStore::new() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    println!("{} {}", TITLE.bold(), TOOLTIP.dimmed());

    loop {
        let Menu {
            label,
            entries,
            cursor,
            notice,
        } = Menu::build(&store);

        if let Some(notice) = notice {
            eprintln!("{} {notice}", "warning:".yellow().bold());
        }

        let choice = match prompt::select_context(&label, entries, cursor) {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return ExitCode::SUCCESS;
            }
            Err(err) => {
                eprintln!("{} {err}", "error:".red().bold());
                return ExitCode::FAILURE;
            }
        };

        match choice {
            MenuEntry::Context(name) => switch_to(&store, &name),
            MenuEntry::Quit => return ExitCode::SUCCESS,
        }
    }
}

fn switch_to(store: &ConfigStore, name: &str) {
    match kubeconfig::switch(store, name) {
        Ok(()) => println!("{} {}", "Switched to".green(), name.bold()),
        Err(err) => eprintln!(
            "{} failed to switch to '{name}': {err}",
            "error:".red().bold()
        ),
    }
}
