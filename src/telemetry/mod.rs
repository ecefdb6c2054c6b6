mod subscriber;

pub use subscriber::{get_subscriber, init_subscriber};
