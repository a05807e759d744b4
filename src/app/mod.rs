// Consumers of the access layer: explicit section state and the contact form.
pub mod contact_form;
pub mod sections;
