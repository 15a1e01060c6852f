pub mod rsvp;
pub mod wedding;
