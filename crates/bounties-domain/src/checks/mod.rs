use crate::model::DirectoryModel;
use crate::policy::EffectiveConfig;
use bounties_types::Finding;

mod contact_format;
mod duplicates;
mod field_types;
mod required_fields;
mod reward_duplicates;
mod reward_values;
mod unknown_fields;
mod url_format;
mod utils;


pub use contact_format::{is_email, is_valid_contact};

pub fn run_all(model: &DirectoryModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    required_fields::run(model, cfg, out);
    field_types::run(model, cfg, out);
    reward_values::run(model, cfg, out);
    reward_duplicates::run(model, cfg, out);
    url_format::run(model, cfg, out);
    contact_format::run(model, cfg, out);
    unknown_fields::run(model, cfg, out);
    duplicates::run(model, cfg, out);
}
