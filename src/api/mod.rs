pub mod exrates;
pub mod exrates_dto;
pub mod sendgrid;
pub mod sendgrid_dto;
pub mod utils;

pub use sendgrid::SendGridMailer;
