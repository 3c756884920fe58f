pub mod formatter;

pub use formatter::{
    format_breakdown, format_demo_card, format_json, format_score, format_score_bar,
    format_showcase_table, format_tsv, should_use_colors,
};
