//! # Rendering Module
//!
//! Turns command results into text. Layout math (widths, truncation, padding) stays in Rust
//! because it needs Unicode-aware processing; templates decide line structure and which named
//! style each piece gets.
//!
//! Every function takes `use_color` explicitly. The shell resolves it from the session's
//! `color` setting before calling in.

use super::styles::{names, REALTY_THEME};
use super::templates;
use super::theme::Renderer;
use chrono::{DateTime, Utc};
use realty::api::{CmdMessage, MessageLevel};
use realty::attributes::Field;
use realty::index::DisplayListing;
use realty::model::Listing;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 16;
/// Width of the widest kind label, "apartment purchase".
pub const KIND_WIDTH: usize = 18;

#[derive(Serialize)]
struct SectionData {
    heading: String,
    rule: String,
    primary: bool,
    fields: Vec<Field>,
}

#[derive(Serialize)]
struct ListingEntry {
    header: String,
    sections: Vec<SectionData>,
}

#[derive(Serialize)]
struct ListingsData {
    listings: Vec<ListingEntry>,
}

/// One summary line. Everything is pre-padded; the template only styles and joins.
#[derive(Serialize)]
struct RowData {
    index: String,
    kind: String,
    details: String,
    padding: String,
    time_ago: String,
}

#[derive(Serialize)]
struct RowsData {
    rows: Vec<RowData>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Debug, Serialize)]
pub struct HelpCommand {
    pub indent: String,
    pub name: String,
    pub padding: String,
    pub about: String,
}

#[derive(Debug, Serialize)]
pub struct HelpGroup {
    pub heading: String,
    pub commands: Vec<HelpCommand>,
}

#[derive(Debug, Serialize)]
pub struct HelpData {
    pub title: String,
    pub about: String,
    pub usage: String,
    pub groups: Vec<HelpGroup>,
}

fn render<T: Serialize>(name: &str, data: &T, use_color: bool) -> Result<String, minijinja::Error> {
    let mut renderer = Renderer::with_color(REALTY_THEME.clone(), use_color);
    for (template_name, source) in templates::ALL {
        renderer.add_template(template_name, source)?;
    }
    renderer.render(name, data)
}

/// Full details of each listing, section by section.
pub fn render_listings(listings: &[DisplayListing], use_color: bool) -> String {
    let entries = listings
        .iter()
        .map(|dl| ListingEntry {
            header: format!("#{} {}", dl.index, dl.listing.kind()),
            sections: dl
                .listing
                .sections()
                .into_iter()
                .map(|section| SectionData {
                    heading: section.heading.to_string(),
                    rule: "=".repeat(section.heading.width()),
                    primary: section.primary,
                    fields: section.fields,
                })
                .collect(),
        })
        .collect();

    render("listing", &ListingsData { listings: entries }, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// One line per listing: index, kind, size and headline cost, age.
pub fn render_listing_rows(listings: &[DisplayListing], use_color: bool) -> String {
    let rows = listings
        .iter()
        .map(|dl| {
            let index = format!("{:>3}.", dl.index);
            let kind = format!("{:<width$}", dl.listing.kind().to_string(), width = KIND_WIDTH);

            let fixed_width = index.width() + 1 + KIND_WIDTH + 1 + TIME_WIDTH;
            let available = LINE_WIDTH.saturating_sub(fixed_width);
            let details = truncate_to_width(&summarize(&dl.listing), available);
            let padding = " ".repeat(available.saturating_sub(details.width()));

            RowData {
                index,
                kind,
                details,
                padding,
                time_ago: format_time_ago(dl.listing.metadata.created_at),
            }
        })
        .collect();

    render("list", &RowsData { rows }, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn summarize(listing: &Listing) -> String {
    let property = &listing.property;
    let size = format!(
        "{} sq ft, {} bd, {} ba",
        property.square_feet, property.bedrooms, property.bathrooms
    );
    let cost = match listing.rent() {
        Some(rent) => format!("rent {}", rent),
        None => match listing.purchase_cost() {
            Some(total) => format!("{} with taxes", total),
            None => "price unreadable".to_string(),
        },
    };
    format!("{}  {}", size, cost)
}

pub fn render_text_list(lines: &[String], empty_message: &str, use_color: bool) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };

    render("text_list", &data, use_color).unwrap_or_else(|_| format!("{}\n", empty_message))
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let message_data = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    let data = MessagesData {
        messages: message_data,
    };

    render("messages", &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn render_help(help: &HelpData, use_color: bool) -> String {
    render("help", help, use_color).unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use realty::attributes::choices::{Balcony, Garage, Laundry, YesNo};
    use realty::attributes::{
        ApartmentDetails, HouseDetails, Physical, PropertyDetails, PurchaseDetails,
        RentalDetails, Transaction,
    };
    use realty::index::index_listings;

    fn house_rental() -> Listing {
        Listing::new(
            PropertyDetails::new("1200", "3", "2"),
            Physical::House(HouseDetails {
                stories: "2".into(),
                garage: Garage::Attached,
                fenced: YesNo::Yes,
            }),
            Transaction::Rental(RentalDetails {
                rent: "1500".into(),
                utilities: "200".into(),
                furnished: YesNo::No,
            }),
        )
    }

    fn apartment_purchase() -> Listing {
        Listing::new(
            PropertyDetails::new("800", "2", "1"),
            Physical::Apartment(ApartmentDetails {
                laundry: Laundry::Coin,
                balcony: Balcony::Solarium,
            }),
            Transaction::Purchase(PurchaseDetails {
                price: "200000".into(),
                taxes: "2500".into(),
            }),
        )
    }

    const HOUSE_RENTAL_BLOCK: &str = "\
#1 house rental
PROPERTY DETAILS
================
square footage: 1200
bedrooms: 3
bathrooms: 2

HOUSE DETAILS
# of stories: 2
garage: attached
fenced yard: yes
RENTAL DETAILS
rent: 1500
estimated utilities: 200
furnished: no
";

    #[test]
    fn full_listing_plain_layout() {
        let listings = index_listings(vec![house_rental()]);
        assert_eq!(render_listings(&listings, false), HOUSE_RENTAL_BLOCK);
    }

    #[test]
    fn listings_are_separated_by_a_blank_line() {
        let listings = index_listings(vec![house_rental(), apartment_purchase()]);
        let output = render_listings(&listings, false);

        let expected_tail = "\
furnished: no

#2 apartment purchase
PROPERTY DETAILS
================
square footage: 800
bedrooms: 2
bathrooms: 1

APARTMENT DETAILS
laundry: coin
has balcony: solarium
PURCHASE DETAILS
selling price: 200000
estimated taxes: 2500
";
        assert!(output.starts_with(HOUSE_RENTAL_BLOCK.trim_end()));
        assert!(output.ends_with(expected_tail), "got:\n{}", output);
    }

    #[test]
    fn no_listings_renders_nothing() {
        assert_eq!(render_listings(&[], false), "");
        assert_eq!(render_listing_rows(&[], false), "");
    }

    #[test]
    fn colored_listing_contains_escape_codes() {
        let listings = index_listings(vec![house_rental()]);
        let output = render_listings(&listings, true);
        assert!(output.contains("\u{1b}["));
        assert!(output.contains("PROPERTY DETAILS"));
    }

    #[test]
    fn summary_rows() {
        let listings = index_listings(vec![house_rental(), apartment_purchase()]);
        let output = render_listing_rows(&listings, false);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  1. house rental "));
        assert!(lines[0].contains("1200 sq ft, 3 bd, 2 ba  rent 1500"));
        assert!(lines[1].starts_with("  2. apartment purchase "));
        assert!(lines[1].contains("202500 with taxes"));
        assert_eq!(lines[0].width(), LINE_WIDTH);
        assert_eq!(lines[1].width(), LINE_WIDTH);
    }

    #[test]
    fn messages_plain() {
        let messages = vec![
            CmdMessage::success("Listing #1 added (house rental)"),
            CmdMessage::info("Nothing available"),
        ];
        assert_eq!(
            render_messages(&messages, false),
            "Listing #1 added (house rental)\nNothing available\n"
        );
        assert_eq!(render_messages(&[], false), "");
    }

    #[test]
    fn text_list_and_empty_message() {
        let lines = vec!["color = never".to_string(), "prompt = > ".to_string()];
        assert_eq!(
            render_text_list(&lines, "Nothing set", false),
            "color = never\nprompt = > \n"
        );
        assert_eq!(render_text_list(&[], "Nothing set", false), "Nothing set\n");
    }

    #[test]
    fn help_layout() {
        let help = HelpData {
            title: "realty".into(),
            about: "Listings".into(),
            usage: "Usage: <command> [args]".into(),
            groups: vec![HelpGroup {
                heading: "Listing Commands:".into(),
                commands: vec![HelpCommand {
                    indent: "  ".into(),
                    name: "add".into(),
                    padding: "   ".into(),
                    about: "Record a new listing".into(),
                }],
            }],
        };
        assert_eq!(
            render_help(&help, false),
            "realty\nListings\n\nUsage: <command> [args]\n\nListing Commands:\n  add   Record a new listing\n"
        );
    }

    #[test]
    fn truncation_is_width_aware() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_to_width("much too long", 6), "much …");
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
    }

    #[test]
    fn time_ago_is_right_aligned() {
        let formatted = format_time_ago(Utc::now());
        assert_eq!(formatted.width(), TIME_WIDTH);
    }
}
