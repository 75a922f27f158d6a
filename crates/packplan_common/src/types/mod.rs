pub mod asset_rules;
pub mod build_plan;
pub mod bundle_entry;
pub mod copy_mapping;
pub mod integrity_policy;
pub mod module_ref;
pub mod output_settings;
pub mod page_plan;
