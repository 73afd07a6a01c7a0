//! Concrete signal collectors.
//!
//! Each collector is a thin probe over one capability of the host
//! environment. Collectors report what they can see, say
//! [`Probe::Unavailable`](crate::Probe::Unavailable) when the capability is
//! absent, and return `Err` only when a present capability could not be
//! read. None of them holds state between synthesis calls.
//!
//! The default set is registered in a fixed order; changing that order
//! changes the canonical form and therefore the identifier.

pub mod battery;
pub mod connection;
pub mod device;
pub mod display;
pub mod geolocation;
pub mod language;
pub mod media;
pub mod runtime;
pub mod transport;
pub mod zone;

use crate::registry::Collector;

/// The fixed default collector set, in registration order.
pub fn default_collectors() -> Vec<Box<dyn Collector>> {
    vec![
        Box::new(battery::BatteryCollector),
        Box::new(zone::ZoneCollector),
        Box::new(language::LanguageCollector),
        Box::new(device::DeviceCollector),
        Box::new(media::MediaCollector),
        Box::new(runtime::RuntimeCollector),
        Box::new(transport::TransportCollector),
        Box::new(display::DisplayCollector),
        Box::new(connection::ConnectionCollector),
        Box::new(geolocation::GeolocationCollector),
    ]
}
