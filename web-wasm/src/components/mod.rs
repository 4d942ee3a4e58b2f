pub mod contact_form;
pub mod header;
pub mod hero_carousel;
pub mod location_cards;
pub mod location_modal;
pub mod search_panel;
