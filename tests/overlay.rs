#[path = "overlay/config_file.rs"]
mod config_file;
#[path = "overlay/end_to_end.rs"]
mod end_to_end;
