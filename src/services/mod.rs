pub mod leads;
pub mod slots;
pub mod validation;
pub mod whatsapp;
