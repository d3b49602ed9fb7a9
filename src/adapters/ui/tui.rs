//! Implements InputPort. Inquire-based interactive storefront.
//!
//! Main menu: home sections, single sections, category browsing.

use crate::adapters::ui::{card, category_view};
use crate::domain::{DomainError, Section, SectionKind};
use crate::ports::{CategoryPort, InputPort};
use crate::usecases::StorefrontService;
use async_trait::async_trait;
use crossterm::style::Stylize;
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{Confirm, Select, Text};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Applies the storefront prompt theme globally.
pub fn apply_theme() {
    let green = Color::Rgb {
        r: 0x16,
        g: 0xa3,
        b: 0x4a,
    };
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("›").with_fg(green))
        .with_highlighted_option_prefix(Styled::new("»").with_fg(green));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Home,
    NewArrivals,
    TodaysOffers,
    Categories,
    CategoryTree,
    CategoryById,
    CategoryBySlug,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 8] = [
        MenuAction::Home,
        MenuAction::NewArrivals,
        MenuAction::TodaysOffers,
        MenuAction::Categories,
        MenuAction::CategoryTree,
        MenuAction::CategoryById,
        MenuAction::CategoryBySlug,
        MenuAction::Quit,
    ];
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuAction::Home => "Home page sections",
            MenuAction::NewArrivals => "New Arrivals",
            MenuAction::TodaysOffers => "Today's Offers",
            MenuAction::Categories => "Browse categories",
            MenuAction::CategoryTree => "Category tree",
            MenuAction::CategoryById => "Find category by ID",
            MenuAction::CategoryBySlug => "Find category by slug",
            MenuAction::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Outcome of a prompt: a value, "go back to the menu", or "leave the app".
enum Prompted<T> {
    Value(T),
    Back,
    Exit,
}

fn prompted<T>(result: Result<T, InquireError>) -> Result<Prompted<T>, DomainError> {
    match result {
        Ok(v) => Ok(Prompted::Value(v)),
        Err(InquireError::OperationCanceled) => Ok(Prompted::Back),
        Err(InquireError::OperationInterrupted) => Ok(Prompted::Exit),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    storefront: Arc<StorefrontService>,
    categories: Arc<dyn CategoryPort>,
}

impl TuiInputPort {
    pub fn new(storefront: Arc<StorefrontService>, categories: Arc<dyn CategoryPort>) -> Self {
        Self {
            storefront,
            categories,
        }
    }

    fn print_sections(sections: &[Section]) {
        if sections.is_empty() {
            println!("{}", "Nothing to show today.".dark_grey());
        }
        for section in sections {
            println!("{}", card::render_section(section).green());
        }
    }

    fn print_optional_section(kind: SectionKind, section: Option<Section>) {
        match section {
            Some(section) => Self::print_sections(std::slice::from_ref(&section)),
            None => println!("{}", format!("No {} right now.", kind.title()).dark_grey()),
        }
    }

    fn print_failure(err: &DomainError) {
        warn!(error = %err, "request failed");
        println!("{}", format!("Request failed: {err}").red());
    }

    /// Runs one menu action. Returns false when the user asked to leave.
    /// Service errors are returned untouched; `run` reports them and keeps the menu open.
    async fn dispatch(&self, action: MenuAction) -> Result<bool, DomainError> {
        match action {
            MenuAction::Home => Self::print_sections(&self.storefront.home_sections().await?),
            MenuAction::NewArrivals => Self::print_optional_section(
                SectionKind::NewArrivals,
                self.storefront.new_arrivals().await?,
            ),
            MenuAction::TodaysOffers => Self::print_optional_section(
                SectionKind::TodaysOffers,
                self.storefront.todays_offers().await?,
            ),
            MenuAction::Categories => {
                let active = match prompted(
                    Confirm::new("Only active categories?")
                        .with_default(crate::ports::outbound::DEFAULT_ACTIVE_ONLY)
                        .prompt(),
                )? {
                    Prompted::Value(v) => v,
                    Prompted::Back => return Ok(true),
                    Prompted::Exit => return Ok(false),
                };
                let env = self.categories.get_categories(active).await?;
                println!("{}", category_view::render_category_list(&env));
            }
            MenuAction::CategoryTree => {
                let env = self.categories.get_category_tree().await?;
                println!("{}", category_view::render_category_tree(&env));
            }
            MenuAction::CategoryById | MenuAction::CategoryBySlug => {
                let label = if action == MenuAction::CategoryById {
                    "Category ID:"
                } else {
                    "Category slug:"
                };
                let key = match prompted(Text::new(label).prompt())? {
                    Prompted::Value(v) => v.trim().to_string(),
                    Prompted::Back => return Ok(true),
                    Prompted::Exit => return Ok(false),
                };
                if key.is_empty() {
                    return Ok(true);
                }
                let env = if action == MenuAction::CategoryById {
                    self.categories.get_category_by_id(&key).await?
                } else {
                    self.categories.get_category_by_slug(&key).await?
                };
                println!("{}", category_view::render_category(&env));
            }
            MenuAction::Quit => return Ok(false),
        }
        Ok(true)
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let action = match prompted(
                Select::new("What would you like to see?", MenuAction::ALL.to_vec()).prompt(),
            )? {
                Prompted::Value(a) => a,
                Prompted::Back | Prompted::Exit => return Ok(()),
            };
            match self.dispatch(action).await {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(e @ DomainError::Ui(_)) => return Err(e),
                Err(e) => Self::print_failure(&e),
            }
        }
    }
}
