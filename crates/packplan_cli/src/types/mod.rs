pub mod target_preset;
