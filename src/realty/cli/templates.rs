//! # Templates
//!
//! Templates live in `templates/*.tmp` and are included here as string constants.
//!
//! Every template follows the same whitespace rule: block tags end with `-%}` and sit on
//! lines of their own, so they emit nothing; text lines end with a real newline, which is
//! kept. A blank line is written as `{{ "" }}` on its own line. Leading spaces a line needs
//! come from the data, since `-%}` eats indentation on the following line.

pub const LISTING_TEMPLATE: &str = include_str!("templates/listing.tmp");
pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const HELP_TEMPLATE: &str = include_str!("templates/help.tmp");

/// Name/source pairs registered with every renderer.
pub const ALL: [(&str, &str); 5] = [
    ("listing", LISTING_TEMPLATE),
    ("list", LIST_TEMPLATE),
    ("text_list", TEXT_LIST_TEMPLATE),
    ("messages", MESSAGES_TEMPLATE),
    ("help", HELP_TEMPLATE),
];
