pub mod define;
