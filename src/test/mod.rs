mod notifier;
mod sendgrid;
mod support;
