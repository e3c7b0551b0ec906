#[path = "families/body_cache.rs"]
mod body_cache;
#[path = "families/dip_ic.rs"]
mod dip_ic;
#[path = "families/layout.rs"]
mod layout;
#[path = "families/perf_board.rs"]
mod perf_board;
#[path = "families/property_surface.rs"]
mod property_surface;
#[path = "families/swap_order.rs"]
mod swap_order;
#[path = "families/terminal_strip.rs"]
mod terminal_strip;
