pub mod add;
pub mod bookmark;
pub mod calendar;
pub mod delete;
pub mod list;
pub mod refresh;
pub mod register;
pub mod show;
pub mod stats;
pub mod update;
