pub mod dua;
pub mod header;
pub mod next_prayer;
pub mod placeholder;
pub mod prayers;
pub mod qibla;
pub mod settings;
pub mod statusbar;
pub mod tabs;
pub mod tasbih;
