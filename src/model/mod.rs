pub mod attendance;
pub mod invoice;
pub mod worker;
