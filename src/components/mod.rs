pub mod app;
pub mod atomic_structure;
pub mod element_cell;
pub mod element_detail;
pub mod footer;
pub mod hover_tooltip;
pub mod legend;
pub mod legend_panel;
pub mod load_error;
pub mod periodic_table;
pub mod property_card;
pub mod welcome_overlay;
