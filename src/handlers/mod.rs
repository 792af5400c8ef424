pub mod flows;
pub mod health;
pub mod leads;
pub mod slots;
pub mod validate;
