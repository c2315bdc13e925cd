//! Title, description, canonical and Open Graph tags.

use crate::scoring::factors::{technical, Rule};

pub const RULES: &[Rule] = &[
    technical::check_title,
    technical::check_meta_description,
    technical::check_canonical,
    technical::check_og_tags,
];
