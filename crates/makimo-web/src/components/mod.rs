mod address_form;
mod floating_objects;
mod glitch_title;

pub use address_form::AddressForm;
pub use floating_objects::FloatingObjects;
pub use glitch_title::GlitchTitle;
