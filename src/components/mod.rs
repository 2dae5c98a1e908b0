pub mod back_to_top;
pub mod contact_form;
pub mod navbar;
pub mod page_loader;
pub mod particles_host;
pub mod project_card;
pub mod typing_text;
