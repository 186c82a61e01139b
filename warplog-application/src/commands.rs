pub mod catalog_commands;
pub mod import_commands;
pub mod player_commands;
