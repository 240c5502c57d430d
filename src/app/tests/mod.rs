mod config_init;
mod terminal_surface;
