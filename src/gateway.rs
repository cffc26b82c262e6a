pub mod events;
pub mod logs;
pub mod factory;

#[derive(Debug, PartialEq)]
pub enum GatewayPublisherVia {
    Logs,
}
