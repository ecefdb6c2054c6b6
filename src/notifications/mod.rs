mod dispatch;
mod telegram;

pub use dispatch::{log_outcome, spawn_notification};
pub use telegram::{Delivery, DispatchError, TelegramNotifier};
