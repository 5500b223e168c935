// Persistence plumbing for the unit constants.
pub mod preferences;
