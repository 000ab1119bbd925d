//! Implements InputPort. Inquire-based interactive form.
//!
//! Menu loop: edit numbers, pick hobbies, analyze, show the last result.

use crate::adapters::render::{paint, project};
use crate::adapters::ui::progress::spinner;
use crate::domain::{DomainError, FieldValue, HobbyCatalog, NumericField};
use crate::ports::InputPort;
use crate::usecases::AnalysisService;
use async_trait::async_trait;
use inquire::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{CustomType, MultiSelect, Select};
use std::fmt;
use std::io::stdout;
use std::sync::Arc;
use tracing::debug;

/// Applies the blue prompt theme to all subsequent inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("🧠").with_fg(Color::LightBlue))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(Color::LightBlue))
        .with_selected_checkbox(Styled::new("[x]").with_fg(Color::LightBlue));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    EditField,
    PickHobbies,
    Review,
    Analyze,
    ShowResult,
    Reset,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 7] = [
        MenuAction::EditField,
        MenuAction::PickHobbies,
        MenuAction::Review,
        MenuAction::Analyze,
        MenuAction::ShowResult,
        MenuAction::Reset,
        MenuAction::Quit,
    ];
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuAction::EditField => "✏️  Edit a number",
            MenuAction::PickHobbies => "🎯 Select your hobbies",
            MenuAction::Review => "📋 Review inputs",
            MenuAction::Analyze => "🚀 Analyze my wellness",
            MenuAction::ShowResult => "📝 Show last result",
            MenuAction::Reset => "↺  Reset form",
            MenuAction::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// One hobby button: label plus the category it is listed under.
#[derive(Debug, Clone, Copy)]
struct HobbyOption {
    category: &'static str,
    hobby: &'static str,
}

impl fmt::Display for HobbyOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} › {}", self.category, self.hobby)
    }
}

/// Map a prompt outcome: Esc/Ctrl-C become `None`, other failures a UI error.
fn answered<T>(res: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

/// Selection summary grouped by category, selected hobbies marked. Selected labels
/// the catalog does not list are reported on a trailing line.
fn selection_lines(catalog: &HobbyCatalog, selected: &[String]) -> Vec<String> {
    let mut lines: Vec<String> = catalog
        .categories()
        .map(|(category, hobbies)| {
            let marked: Vec<String> = hobbies
                .iter()
                .map(|h| {
                    if selected.iter().any(|s| s == h) {
                        format!("[{}]", h)
                    } else {
                        h.to_string()
                    }
                })
                .collect();
            format!("{}: {}", category, marked.join(", "))
        })
        .collect();
    let unlisted: Vec<&str> = selected
        .iter()
        .map(String::as_str)
        .filter(|h| !catalog.contains(h))
        .collect();
    if !unlisted.is_empty() {
        lines.push(format!("Not in catalog: {}", unlisted.join(", ")));
    }
    lines
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    service: Arc<AnalysisService>,
    catalog: HobbyCatalog,
}

impl TuiInputPort {
    pub fn new(service: Arc<AnalysisService>, catalog: HobbyCatalog) -> Self {
        Self { service, catalog }
    }

    async fn edit_field(&self) -> Result<(), DomainError> {
        let Some(field) = answered(
            Select::new("Which input?", NumericField::ALL.to_vec()).prompt(),
        )?
        else {
            return Ok(());
        };
        let current = self.service.get_field(field).await;
        let label = field.label();

        if let FieldValue::Int(default) = current {
            let prompt = CustomType::<i64>::new(label)
                .with_default(default)
                .with_error_message("Please type a whole number")
                .prompt();
            if let Some(v) = answered(prompt)? {
                self.service.set_field(field, v).await?;
            }
        } else {
            let prompt = CustomType::<f64>::new(label)
                .with_default(current.as_f64())
                .with_error_message("Please type a number")
                .prompt();
            if let Some(v) = answered(prompt)? {
                self.service.set_field(field, v).await?;
            }
        }
        Ok(())
    }

    async fn pick_hobbies(&self) -> Result<(), DomainError> {
        let selected = self.service.hobbies().await;
        let options: Vec<HobbyOption> = self
            .catalog
            .entries()
            .map(|(category, hobby)| HobbyOption { category, hobby })
            .collect();
        let defaults: Vec<usize> = options
            .iter()
            .enumerate()
            .filter(|(_, o)| selected.iter().any(|s| s == o.hobby))
            .map(|(i, _)| i)
            .collect();

        let prompt = MultiSelect::new("🎯 Select Your Hobbies", options)
            .with_default(&defaults)
            .with_page_size(12)
            .prompt();
        if let Some(chosen) = answered(prompt)? {
            let labels: Vec<&str> = chosen.iter().map(|o| o.hobby).collect();
            debug!(chosen = labels.len(), "hobby selection submitted");
            self.service.apply_selection(labels).await;
        }
        Ok(())
    }

    async fn review(&self) -> Result<(), DomainError> {
        let mut lines = Vec::new();
        for field in NumericField::ALL {
            let value = self.service.get_field(field).await;
            lines.push(format!("{}: {}", field.label(), value));
        }
        let selected = self.service.hobbies().await;
        lines.extend(selection_lines(&self.catalog, &selected));
        for line in lines {
            println!("{}", line);
        }
        Ok(())
    }

    async fn analyze(&self) -> Result<(), DomainError> {
        let pb = spinner("Analyzing your wellness...");
        let outcome = self.service.analyze().await;
        pb.finish_and_clear();
        // Failures are already logged by the service; the prior result stays on screen.
        if outcome.is_ok() {
            self.show_result().await?;
        }
        Ok(())
    }

    async fn show_result(&self) -> Result<(), DomainError> {
        let state = self.service.result_state().await;
        let view = project(&state);
        paint(&mut stdout(), view.as_ref()).map_err(|e| DomainError::Ui(e.to_string()))
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let Some(action) =
                answered(Select::new("What next?", MenuAction::ALL.to_vec()).prompt())?
            else {
                return Ok(());
            };
            match action {
                MenuAction::EditField => self.edit_field().await?,
                MenuAction::PickHobbies => self.pick_hobbies().await?,
                MenuAction::Review => self.review().await?,
                MenuAction::Analyze => self.analyze().await?,
                MenuAction::ShowResult => self.show_result().await?,
                MenuAction::Reset => self.service.reset().await,
                MenuAction::Quit => return Ok(()),
            }
        }
    }
}
