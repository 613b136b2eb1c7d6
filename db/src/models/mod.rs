pub mod badge;

pub use badge::Entity as Badge;
