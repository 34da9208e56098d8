pub mod prompts;
pub mod render;

pub use prompts::{
    edit_settings, prompt_field_value, prompt_yes_no, resolve_field, run_session, suggest_fields,
};
pub use render::{display_settings, display_table, settings_summary};
