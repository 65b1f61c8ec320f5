pub mod profile;
pub mod split_bins_commands;
