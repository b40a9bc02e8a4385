pub mod card_animated;
pub mod charts;
pub mod filter_panel;
pub mod page_header;
pub mod stat_card;
