use super::theme::Theme;
use console::Style;
use once_cell::sync::Lazy;

/// Style names referenced from templates.
pub mod names {
    pub const LISTING_HEADER: &str = "listing_header";
    pub const HEADING: &str = "heading";
    pub const RULE: &str = "rule";
    pub const LABEL: &str = "label";
    pub const VALUE: &str = "value";
    pub const INDEX: &str = "index";
    pub const KIND: &str = "kind";
    pub const TIME: &str = "time";
    pub const GROUP: &str = "group";
    pub const COMMAND: &str = "command";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static REALTY_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::LISTING_HEADER, Style::new().yellow().bold())
        .add(names::HEADING, Style::new().bold())
        .add(names::RULE, Style::new().dim())
        .add(names::LABEL, Style::new().cyan())
        .add(names::VALUE, Style::new())
        .add(names::INDEX, Style::new().yellow())
        .add(names::KIND, Style::new().bold())
        .add(names::TIME, Style::new().color256(246).italic())
        .add(names::GROUP, Style::new().bold().underlined())
        .add(names::COMMAND, Style::new().green())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
});
