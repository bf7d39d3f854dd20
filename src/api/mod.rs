//! API service modules for Hyperswitch endpoints.
//!
//! Each service covers one resource of the API and is obtained from
//! [`HyperswitchClient`](crate::HyperswitchClient).

mod customers;
mod events;
mod mandates;
mod payments;
mod payouts;
mod poll;
mod refunds;
mod relay;
mod routing;

pub use customers::CustomersService;
pub use events::EventsService;
pub use mandates::MandatesService;
pub use payments::PaymentsService;
pub use payouts::PayoutsService;
pub use poll::PollService;
pub use refunds::RefundsService;
pub use relay::RelayService;
pub use routing::RoutingService;
