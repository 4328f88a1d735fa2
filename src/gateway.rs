pub mod events;
pub mod logs;
pub mod memory;
pub mod factory;

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum GatewayPublisherVia {
    Logs,
    Memory,
}
