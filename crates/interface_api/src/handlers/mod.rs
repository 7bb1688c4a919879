//! Request handlers, one module per resource

pub mod general_partner;
pub mod health;
pub mod incorporation;
pub mod limited_partner;
pub mod partnership;
