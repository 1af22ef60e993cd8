pub mod checklist;
pub mod consistency;
pub mod header;
pub mod journal;
pub mod statusbar;
pub mod streak;
pub mod tasbih;
