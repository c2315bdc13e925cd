//! Whether crawlers can fetch and index the page quickly.

use crate::scoring::factors::{performance, technical, Rule};

pub const RULES: &[Rule] = &[
    technical::check_http_status,
    technical::check_noindex,
    technical::check_redirect_chain,
    technical::check_response_time,
    performance::check_page_size,
    performance::check_lighthouse,
];
