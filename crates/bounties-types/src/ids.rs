//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_COMPANY_REQUIRED_FIELDS: &str = "company.required_fields";
pub const CHECK_COMPANY_FIELD_TYPES: &str = "company.field_types";
pub const CHECK_COMPANY_REWARD_VALUES: &str = "company.reward_values";
pub const CHECK_COMPANY_REWARD_DUPLICATES: &str = "company.reward_duplicates";
pub const CHECK_COMPANY_URL_FORMAT: &str = "company.url_format";
pub const CHECK_COMPANY_CONTACT_FORMAT: &str = "company.contact_format";
pub const CHECK_COMPANY_UNKNOWN_FIELDS: &str = "company.unknown_fields";
pub const CHECK_DIRECTORY_DUPLICATES: &str = "directory.duplicates";

// Codes: company.required_fields
pub const CODE_MISSING_FIELD: &str = "missing_field";
pub const CODE_EMPTY_FIELD: &str = "empty_field";

// Codes: company.field_types
pub const CODE_WRONG_TYPE: &str = "wrong_type";

// Codes: company.reward_values
pub const CODE_UNKNOWN_REWARD: &str = "unknown_reward";

// Codes: company.reward_duplicates
pub const CODE_DUPLICATE_REWARD: &str = "duplicate_reward";

// Codes: company.url_format
pub const CODE_INVALID_URL: &str = "invalid_url";

// Codes: company.contact_format
pub const CODE_INVALID_CONTACT: &str = "invalid_contact";

// Codes: company.unknown_fields
pub const CODE_UNKNOWN_FIELD: &str = "unknown_field";

// Codes: directory.duplicates
pub const CODE_DUPLICATE_COMPANY: &str = "duplicate_company";
pub const CODE_DUPLICATE_URL: &str = "duplicate_url";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
