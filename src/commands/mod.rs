pub mod db;
pub mod import;
pub mod settings;
