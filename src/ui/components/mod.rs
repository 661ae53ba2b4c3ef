pub mod error_panel;
pub mod header;
pub mod help;
pub mod hero;
pub mod loading;
pub mod results;
pub mod song_card;
