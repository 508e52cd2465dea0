//! Domain layer: value objects, the payment behaviors, the exchange
//! subscribers and the ports that connect them to the application layer.

pub mod event;
pub mod money;
pub mod payment;
pub mod ports;
pub mod subscriber;
